//! AMP stylesheet compilation and caching.
//!
//! # Responsibilities
//! - Preload the prebuilt stylesheet in production (best effort)
//! - Compile the stylesheet source on first demand otherwise
//! - Memoize the compiled result in production
//!
//! # Design Decisions
//! - The cache is an owned object injected into the dispatcher, not a
//!   module-level variable
//! - A missing prebuilt asset is not fatal; it degrades to lazy compile
//! - Production memoizes via OnceCell (first initialization is
//!   serialized); development recompiles per request so stylesheet edits
//!   show up without a restart

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::Browsers;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::observability::metrics;

/// Error type for stylesheet compilation.
#[derive(Debug, Error)]
pub enum CssError {
    #[error("failed to read stylesheet source {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stylesheet compilation failed: {0}")]
    Compile(String),
}

/// The AMP stylesheet cache.
pub struct AmpCss {
    production: bool,
    source_path: PathBuf,
    prebuilt: Option<String>,
    compiled: OnceCell<String>,
}

impl AmpCss {
    /// Create the cache. In production this attempts to preload the
    /// prebuilt stylesheet; a missing or unreadable file is swallowed.
    pub fn new(production: bool, source_path: &Path, prebuilt_path: &Path) -> Self {
        let prebuilt = if production {
            match std::fs::read_to_string(prebuilt_path) {
                Ok(css) => Some(css),
                Err(e) => {
                    tracing::debug!(
                        path = %prebuilt_path.display(),
                        error = %e,
                        "No prebuilt AMP stylesheet, falling back to lazy compile"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            production,
            source_path: source_path.to_path_buf(),
            prebuilt,
            compiled: OnceCell::new(),
        }
    }

    /// Return the stylesheet for AMP pages, compiling it if needed.
    pub async fn stylesheet(&self) -> Result<String, CssError> {
        if let Some(css) = &self.prebuilt {
            return Ok(css.clone());
        }
        if self.production {
            self.compiled
                .get_or_try_init(|| self.compile())
                .await
                .cloned()
        } else {
            self.compile().await
        }
    }

    async fn compile(&self) -> Result<String, CssError> {
        let source = tokio::fs::read_to_string(&self.source_path)
            .await
            .map_err(|source| CssError::Io {
                path: self.source_path.clone(),
                source,
            })?;
        let css = compile_css(&source)?;
        metrics::record_css_compile();
        tracing::debug!(bytes = css.len(), "Compiled AMP stylesheet");
        Ok(css)
    }
}

/// Parse, minify and print a stylesheet.
pub fn compile_css(source: &str) -> Result<String, CssError> {
    let mut stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| CssError::Compile(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions {
            targets: Browsers::default().into(),
            ..Default::default()
        })
        .map_err(|e| CssError::Compile(e.to_string()))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| CssError::Compile(e.to_string()))?;

    Ok(output.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(tag: &str, css: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("amp-css-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("amp.css");
        std::fs::write(&path, css).unwrap();
        path
    }

    #[test]
    fn test_compile_minifies() {
        let css = compile_css("body {\n  color: #ff0000;\n}\n").unwrap();
        assert!(css.starts_with("body{"));
        assert!(!css.contains('\n'));
    }

    #[test]
    fn test_compile_rejects_garbage() {
        assert!(compile_css("not a stylesheet {{{").is_err());
    }

    #[tokio::test]
    async fn test_production_memoizes() {
        let source = fixture("prod", "body { color: #ff0000; }");
        let cache = AmpCss::new(true, &source, Path::new("missing/amp.css"));

        let first = cache.stylesheet().await.unwrap();
        // mutate the source; a memoized cache must not pick this up
        std::fs::write(&source, "body { color: #00ff00; }").unwrap();
        let second = cache.stylesheet().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_development_recompiles() {
        let source = fixture("dev", "body { color: #ff0000; }");
        let cache = AmpCss::new(false, &source, Path::new("missing/amp.css"));

        let first = cache.stylesheet().await.unwrap();
        std::fs::write(&source, "body { color: #00ff00; }").unwrap();
        let second = cache.stylesheet().await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_prebuilt_wins_over_source() {
        let source = fixture("pre-src", "body { color: #ff0000; }");
        let prebuilt = fixture("pre-built", "body{color:blue}");
        let cache = AmpCss::new(true, &source, &prebuilt);

        assert_eq!(cache.stylesheet().await.unwrap(), "body{color:blue}");
    }

    #[tokio::test]
    async fn test_missing_prebuilt_is_swallowed() {
        let source = fixture("no-pre", "body { color: #ff0000; }");
        let cache = AmpCss::new(true, &source, Path::new("does/not/exist.css"));

        assert!(cache.stylesheet().await.is_ok());
    }
}
