//! AMP page support.
//!
//! AMP popups must inline their CSS, so the dispatcher owns a stylesheet
//! cache that compiles the source once and hands the result to the view
//! scope of every popup render.

pub mod css;

pub use css::{AmpCss, CssError};
