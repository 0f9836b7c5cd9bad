//! Schedule subsystem.
//!
//! # Data Flow
//! ```text
//! schedule.json
//!     → dataset.rs (deserialize once at startup)
//!     → Schedule (immutable, Arc-shared)
//!     → calendar.rs (derive day grouping, once)
//!     → resolver + view scope (read-only lookups)
//! ```

pub mod calendar;
pub mod dataset;

pub use calendar::{derive_days, Day};
pub use dataset::{load_schedule, Schedule, ScheduleError, SessionRecord, SpeakerRecord};
