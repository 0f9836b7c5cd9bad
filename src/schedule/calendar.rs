//! Derived calendar view of the schedule.
//!
//! Groups sessions into days once at startup. The result is shared for
//! the process lifetime; it is a pure projection of the dataset.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::schedule::dataset::Schedule;

/// One conference day with its sessions in display order.
#[derive(Debug, Clone, Serialize)]
pub struct Day {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub sessions: Vec<DaySession>,
}

/// A session entry as listed in the day grid. Internal (underscore) ids
/// are included here so breaks show up in the grid; the resolver still
/// refuses to address them directly.
#[derive(Debug, Clone, Serialize)]
pub struct DaySession {
    pub id: String,
    pub name: String,
    pub time_label: String,
}

/// Group dated sessions by date, sorted by date then time label then id.
pub fn derive_days(schedule: &Schedule) -> Vec<Day> {
    let mut grouped: BTreeMap<&str, Vec<DaySession>> = BTreeMap::new();

    for (id, record) in &schedule.sessions {
        let Some(date) = record.date.as_deref() else {
            continue;
        };
        grouped.entry(date).or_default().push(DaySession {
            id: id.clone(),
            name: record.name.clone().unwrap_or_default(),
            time_label: record.time_label.clone().unwrap_or_default(),
        });
    }

    grouped
        .into_iter()
        .map(|(date, mut sessions)| {
            sessions.sort_by(|a, b| {
                a.time_label
                    .cmp(&b.time_label)
                    .then_with(|| a.id.cmp(&b.id))
            });
            Day {
                date: date.to_string(),
                sessions,
            }
        })
        .collect()
}
