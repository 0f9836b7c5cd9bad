//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! At startup:
//!     views/layouts/partials dirs
//!         → engine.rs (register templates, fixed extension)
//!         → sections.rs (derive addressable section list)
//!
//! Per request:
//!     resolved content + site metadata
//!         → scope.rs (assemble view scope)
//!         → engine.rs (render view, wrap in layout)
//!         → HTML response
//! ```

pub mod engine;
pub mod scope;
pub mod sections;

pub use engine::{Engine, EngineError};
pub use scope::SiteContext;
pub use sections::SectionList;
