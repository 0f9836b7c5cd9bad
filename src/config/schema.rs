//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site
//! server. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a minimal (or absent) config
//! file yields a runnable server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the conference site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, connection cap).
    pub listener: ListenerConfig,

    /// Event metadata rendered into every page.
    pub site: SiteMeta,

    /// External form links (CFP, tickets, scholarships).
    pub forms: FormLinks,

    /// Filesystem layout: templates, static assets, dataset.
    pub paths: SitePaths,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Production mode. Overridden by the `SITE_ENV` environment variable;
    /// controls asset prefixes, static mounts and AMP CSS preloading.
    pub production: bool,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Event metadata. These values are constant for a given edition of the
/// conference and flow into the view scope of every rendered page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Edition year. The event number is derived as `year - 2012`.
    pub year: i32,

    /// Human-readable date range shown on every page.
    pub dates: String,

    /// Lifecycle phase controlling which UI elements are shown.
    pub stage: Stage,

    /// Google Analytics property ID.
    pub ga_id: String,

    /// Google Optimize container ID.
    pub optimize_id: String,

    /// Ads conversion ID (numeric).
    pub conversion_id: u64,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            year: 2019,
            dates: "14 - 16 June 2019".to_string(),
            stage: Stage::Announce,
            ga_id: "UA-38173871-1".to_string(),
            optimize_id: "GTM-5WLRMBT".to_string(),
            conversion_id: 870_425_387,
        }
    }
}

/// Event lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Announce,
    Signup,
    Event,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Announce => "announce",
            Stage::Signup => "signup",
            Stage::Event => "event",
        }
    }
}

/// External form links surfaced in the rendered pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormLinks {
    /// Call-for-papers form.
    pub cfp: String,

    /// Ticket shop.
    pub tickets: String,

    /// Scholarship application form.
    pub scholarship: String,

    /// Volunteer signup form.
    pub volunteer: String,
}

impl Default for FormLinks {
    fn default() -> Self {
        Self {
            cfp: "https://forms.example.com/cfp".to_string(),
            tickets: "https://tickets.example.com/2019".to_string(),
            scholarship: "https://forms.example.com/scholarship".to_string(),
            volunteer: "https://forms.example.com/volunteer".to_string(),
        }
    }
}

/// Filesystem layout of the site. Template directories are scanned once at
/// startup; asset directories are mounted read-only.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SitePaths {
    /// Top-level page templates. Scanned at startup to derive the section
    /// list; names starting with `_` or `.` are never addressable.
    pub views_dir: PathBuf,

    /// Layout templates (`default`, `amp`).
    pub layouts_dir: PathBuf,

    /// Partial templates referenced from views and layouts.
    pub partials_dir: PathBuf,

    /// Static files, mounted at `/static` in development.
    pub static_dir: PathBuf,

    /// Source assets, mounted at `/src` in development. Holds the service
    /// worker and the AMP stylesheet source.
    pub src_dir: PathBuf,

    /// Built assets, mounted at `/res` in production.
    pub dist_dir: PathBuf,

    /// Vendored browser dependencies, mounted at `/node_modules` in
    /// development.
    pub vendor_dir: PathBuf,

    /// The schedule dataset (sessions and speakers maps).
    pub schedule_file: PathBuf,

    /// Search-engine verification file, served at a fixed well-known route.
    pub verification_file: PathBuf,

    /// AMP stylesheet source, compiled on demand.
    pub amp_css_source: PathBuf,

    /// Prebuilt AMP stylesheet, preloaded in production when present.
    pub amp_css_prebuilt: PathBuf,
}

impl Default for SitePaths {
    fn default() -> Self {
        Self {
            views_dir: PathBuf::from("site/views"),
            layouts_dir: PathBuf::from("site/layouts"),
            partials_dir: PathBuf::from("site/partials"),
            static_dir: PathBuf::from("site/static"),
            src_dir: PathBuf::from("site/src"),
            dist_dir: PathBuf::from("site/res"),
            vendor_dir: PathBuf::from("site/node_modules"),
            schedule_file: PathBuf::from("site/static/schedule.json"),
            verification_file: PathBuf::from("site/static/googlec6dfdf23945d0d0c.html"),
            amp_css_source: PathBuf::from("site/src/amp.css"),
            amp_css_prebuilt: PathBuf::from("site/res/amp.css"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose a Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Bind address for the metrics exporter.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}
