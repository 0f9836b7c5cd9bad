//! Semantic validation of loaded configuration.
//!
//! Serde handles the syntactic layer; these checks catch values that parse
//! fine but cannot produce a working server.

use crate::config::schema::SiteConfig;

/// A single semantic validation failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyBindAddress,
    /// The event numbering starts in 2013 (`year - 2012` must be positive).
    YearBeforeFirstEvent(i32),
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBindAddress => write!(f, "listener.bind_address is empty"),
            ValidationError::YearBeforeFirstEvent(year) => {
                write!(f, "site.year {} predates the first event (2013)", year)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
        }
    }
}

/// Check all semantic constraints, collecting every failure.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }
    if config.site.year < 2013 {
        errors.push(ValidationError::YearBeforeFirstEvent(config.site.year));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
