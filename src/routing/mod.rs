//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path (/{section}[/{id}])
//!     → resolver.rs (section list + dataset lookup)
//!     → Return: Resolved content or explicit decline
//!
//! In parallel:
//!     original URI vs handler URI
//!     → mount.rs (derive externally visible prefix)
//!     → canonical URLs, intra-site links
//! ```
//!
//! # Design Decisions
//! - Section list and dataset compiled at startup, immutable at runtime
//! - Deterministic: same input always resolves the same content
//! - Declines are explicit; only the fallback responder produces 404s

pub mod mount;
pub mod resolver;

pub use mount::mount_url;
pub use resolver::{resolve, EntityRef, Resolved, ResolvedEntity};
