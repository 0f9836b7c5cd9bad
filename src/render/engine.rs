//! Template registry and page rendering.
//!
//! # Responsibilities
//! - Register view, layout and partial templates at startup
//! - Render a view and wrap it in its layout
//!
//! # Design Decisions
//! - Explicit per-file registration over a fixed extension; no runtime
//!   template discovery
//! - Layouts are plain templates receiving the rendered view as `body`
//! - The registry is immutable after construction and shared via Arc

use handlebars::{handlebars_helper, Handlebars, JsonValue};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template file extension (without the dot).
pub const TEMPLATE_EXT: &str = "hbs";

/// Error type for template registration and rendering.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to scan template directory {path}: {source}")]
    Scan { path: PathBuf, source: io::Error },

    #[error("failed to register template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// The template engine: a handlebars registry over the views, layouts and
/// partials directories.
pub struct Engine {
    registry: Handlebars<'static>,
}

impl Engine {
    /// Register every template under the three directories. Views and
    /// partials are registered under their file stem; layouts under
    /// `layouts/{stem}`.
    pub fn new(views: &Path, layouts: &Path, partials: &Path) -> Result<Self, EngineError> {
        let mut registry = Handlebars::new();

        handlebars_helper!(eq: |a: JsonValue, b: JsonValue| a == b);
        registry.register_helper("eq", Box::new(eq));
        handlebars_helper!(internal: |id: String| id.starts_with('_'));
        registry.register_helper("internal", Box::new(internal));

        register_dir(&mut registry, views, "")?;
        register_dir(&mut registry, layouts, "layouts/")?;
        register_dir(&mut registry, partials, "")?;
        Ok(Self { registry })
    }

    /// Render a bare template (no layout).
    pub fn render(&self, template: &str, scope: &Value) -> Result<String, EngineError> {
        Ok(self.registry.render(template, scope)?)
    }

    /// Render a view, then wrap it in the named layout. The layout sees
    /// the same scope plus the rendered view under `body`.
    pub fn render_page(
        &self,
        template: &str,
        layout: &str,
        scope: &Value,
    ) -> Result<String, EngineError> {
        let body = self.registry.render(template, scope)?;
        let mut scope = scope.clone();
        if let Value::Object(map) = &mut scope {
            map.insert("body".to_string(), Value::String(body));
        }
        Ok(self.registry.render(&format!("layouts/{layout}"), &scope)?)
    }
}

fn register_dir(
    registry: &mut Handlebars<'static>,
    dir: &Path,
    prefix: &str,
) -> Result<(), EngineError> {
    let entries = std::fs::read_dir(dir).map_err(|source| EngineError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let path = entry
            .map_err(|source| EngineError::Scan {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        registry.register_template_file(&format!("{prefix}{stem}"), &path)?;
    }
    Ok(())
}
