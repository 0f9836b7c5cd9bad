//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SITE_ENV override (production flag)
//!     → SiteConfig (validated, immutable)
//!     → consumed once by HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A single environment variable distinguishes production from
//!   development; everything else lives in the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::SiteConfig;
pub use schema::SitePaths;
pub use schema::Stage;
