//! Path-to-content resolution.
//!
//! # Responsibilities
//! - Map a section path (and optional entity id) to renderable content
//! - Return matched content or explicit decline
//!
//! # Design Decisions
//! - Explicit `None` rather than silent default; a decline falls through
//!   to the 404 responder, never to a render
//! - Session lookup always wins over speaker lookup for a shared id
//! - Underscore-prefixed ids are reserved and never addressable

use crate::render::sections::SectionList;
use crate::schedule::dataset::{Schedule, SessionRecord, SpeakerRecord};

/// A resolved entity: either a session or a speaker popup.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Session(&'a SessionRecord),
    Speaker(&'a SpeakerRecord),
}

impl<'a> EntityRef<'a> {
    /// Template name for the popup view.
    pub fn template(&self) -> &'static str {
        match self {
            EntityRef::Session(_) => "_session",
            EntityRef::Speaker(_) => "_speaker",
        }
    }

    /// Body class marking the popup kind.
    pub fn body_class(&self) -> &'static str {
        match self {
            EntityRef::Session(_) => "schedule-popup",
            EntityRef::Speaker(_) => "speaker-popup",
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            EntityRef::Session(r) => r.name.as_deref(),
            EntityRef::Speaker(r) => r.name.as_deref(),
        }
    }

    pub fn time_label(&self) -> Option<&'a str> {
        match self {
            EntityRef::Session(r) => r.time_label.as_deref(),
            EntityRef::Speaker(r) => r.time_label.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match self {
            EntityRef::Session(r) => r.description.as_deref(),
            EntityRef::Speaker(r) => r.description.as_deref(),
        }
    }

    pub fn youtube_id(&self) -> Option<&'a str> {
        match self {
            EntityRef::Session(r) => r.youtube_id.as_deref(),
            EntityRef::Speaker(r) => r.youtube_id.as_deref(),
        }
    }

    /// The full record, for the popup payload.
    pub fn payload(&self) -> serde_json::Value {
        let value = match self {
            EntityRef::Session(r) => serde_json::to_value(r),
            EntityRef::Speaker(r) => serde_json::to_value(r),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// An entity hit under a section path.
#[derive(Debug, Clone)]
pub struct ResolvedEntity<'a> {
    pub id: String,
    pub entity: EntityRef<'a>,
}

/// The outcome of a successful resolution: a section page, optionally
/// narrowed to an entity popup.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    /// Section name; empty string is the root/index section.
    pub section: String,
    pub entity: Option<ResolvedEntity<'a>>,
}

/// Resolve a request path against the section list and the dataset.
///
/// Returns `None` when nothing should be rendered; the caller passes
/// control to the fallback responder.
pub fn resolve<'a>(
    sections: &SectionList,
    schedule: &'a Schedule,
    path: &str,
    rest: Option<&str>,
) -> Option<Resolved<'a>> {
    if !sections.contains(path) {
        return None;
    }

    let Some(rest) = rest else {
        return Some(Resolved {
            section: path.to_string(),
            entity: None,
        });
    };

    // Reserved ids are never addressable, even when present in the maps.
    if rest.starts_with('_') {
        return None;
    }

    let entity = if let Some(record) = schedule.sessions.get(rest) {
        EntityRef::Session(record)
    } else if let Some(record) = schedule.speakers.get(rest) {
        EntityRef::Speaker(record)
    } else {
        return None;
    };

    Some(Resolved {
        section: path.to_string(),
        entity: Some(ResolvedEntity {
            id: rest.to_string(),
            entity,
        }),
    })
}
