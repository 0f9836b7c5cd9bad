//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, fixed routes, static mounts)
//!     → request.rs (add request ID)
//!     → [resolver decides content]
//!     → [scope assembly + template render]
//!     → HTML/XML/asset response
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer, StartupError, VERIFICATION_ROUTE};
