//! Security subsystem.
//!
//! # Design Decisions
//! - The site is read-only; the security surface is response headers
//! - Policy strings are precomputed at startup and injected, never built
//!   in the request path

pub mod headers;

pub use headers::{feature_policy, FEATURE_POLICY_HEADER};
