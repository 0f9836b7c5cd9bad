//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handlers produce:
//!     → tracing events (structured fields: request_id, path, template)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout subscriber (EnvFilter-controlled)
//!     → Prometheus scrape endpoint (optional, separate listener)
//! ```

pub mod metrics;
