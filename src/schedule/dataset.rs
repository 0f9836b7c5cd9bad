//! The schedule dataset: sessions and speakers.
//!
//! # Responsibilities
//! - Deserialize the schedule JSON file once at startup
//! - Expose sessions and speakers as read-only maps keyed by id
//!
//! # Design Decisions
//! - Immutable after load, shared via Arc (thread-safe without locks)
//! - Unknown record fields are preserved through a flattened map so the
//!   full record round-trips into AMP popup payloads
//! - Ids starting with `_` are reserved for internal entries (breaks,
//!   placeholders) and are never directly addressable

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single talk, workshop or break in the program.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub name: Option<String>,

    /// Display label for the slot, e.g. "Saturday 10:30".
    #[serde(default)]
    pub time_label: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Recording id; absent until the talk is published.
    #[serde(default)]
    pub youtube_id: Option<String>,

    /// ISO date (`YYYY-MM-DD`) the session takes place on. Undated
    /// sessions are kept in the dataset but never appear in the calendar.
    #[serde(default)]
    pub date: Option<String>,

    /// Speaker ids cross-referencing the speakers map.
    #[serde(default)]
    pub speakers: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A speaker profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeakerRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub time_label: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub youtube_id: Option<String>,

    /// Session ids cross-referencing the sessions map.
    #[serde(default)]
    pub sessions: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The complete dataset, loaded once and never mutated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub sessions: HashMap<String, SessionRecord>,

    #[serde(default)]
    pub speakers: HashMap<String, SpeakerRecord>,
}

/// Error type for dataset loading.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read schedule file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse schedule file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the schedule dataset from a JSON file.
pub fn load_schedule(path: &Path) -> Result<Schedule, ScheduleError> {
    let content = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ScheduleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_dataset() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"sessions": {"42": {"name": "Talk"}}, "speakers": {}}"#,
        )
        .unwrap();
        assert_eq!(schedule.sessions.len(), 1);
        assert_eq!(schedule.sessions["42"].name.as_deref(), Some("Talk"));
        assert!(schedule.sessions["42"].youtube_id.is_none());
    }

    #[test]
    fn test_missing_maps_default_empty() {
        let schedule: Schedule = serde_json::from_str("{}").unwrap();
        assert!(schedule.sessions.is_empty());
        assert!(schedule.speakers.is_empty());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"sessions": {"ws-1": {"name": "Workshop", "room": "Studio B", "tier": 2}}}"#,
        )
        .unwrap();
        let record = &schedule.sessions["ws-1"];
        assert_eq!(record.extra["room"], "Studio B");

        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["room"], "Studio B");
        assert_eq!(value["tier"], 2);
        assert_eq!(value["name"], "Workshop");
    }
}
