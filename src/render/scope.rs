//! View scope assembly.
//!
//! # Responsibilities
//! - Build the exact data object passed to the template renderer
//! - Merge global site metadata with resolved per-page data
//!
//! # Design Decisions
//! - The scope is built fresh for every request; only `styles` and
//!   `payload` may reference shared immutable values
//! - Keys are the template-facing contract and keep their template-side
//!   spelling (`sitePrefix`, `bodyClass`)
//! - `youtube_id` is a string or literal `false`, matching what the AMP
//!   popup templates branch on

use serde_json::{json, Value};

use crate::config::schema::SiteConfig;
use crate::config::Stage;
use crate::routing::resolver::Resolved;
use crate::schedule::calendar::Day;

/// Layout used for regular section pages.
pub const DEFAULT_LAYOUT: &str = "default";

/// Layout used for AMP popup pages.
pub const AMP_LAYOUT: &str = "amp";

/// Template rendered for the root section (empty path).
pub const ROOT_TEMPLATE: &str = "index";

/// Template rendered for the sitemap route.
pub const SITEMAP_TEMPLATE: &str = "_sitemap";

/// First edition year; the event number is the offset from it.
const FIRST_YEAR: i32 = 2012;

/// Immutable per-process site metadata, extracted from the config once at
/// startup and shared by every request.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub production: bool,
    pub year: i32,
    pub dates: String,
    pub stage: Stage,
    pub ga_id: String,
    pub optimize_id: String,
    pub conversion_id: u64,
    pub forms: Value,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            production: config.production,
            year: config.site.year,
            dates: config.site.dates.clone(),
            stage: config.site.stage,
            ga_id: config.site.ga_id.clone(),
            optimize_id: config.site.optimize_id.clone(),
            conversion_id: config.site.conversion_id,
            forms: serde_json::to_value(&config.forms).unwrap_or(Value::Null),
        }
    }
}

/// Asset prefix for the current mode: built assets in production, raw
/// sources in development.
pub fn asset_prefix(production: bool) -> &'static str {
    if production {
        "res"
    } else {
        "src"
    }
}

/// Assemble the scope for a resolved page.
///
/// `styles` is only consulted for entity popups; section pages never
/// inline the AMP stylesheet.
pub fn build_scope(
    site: &SiteContext,
    days: &[Day],
    site_prefix: &str,
    resolved: &Resolved<'_>,
    styles: Option<&str>,
) -> Value {
    let canonical = match &resolved.entity {
        Some(entity) => format!("{}/{}/{}", site_prefix, resolved.section, entity.id),
        None => format!("{}/{}", site_prefix, resolved.section),
    };

    let mut scope = json!({
        "year": site.year,
        "eventNumber": site.year - FIRST_YEAR,
        "dates": site.dates,
        "production": site.production,
        "sitePrefix": site_prefix,
        "layout": DEFAULT_LAYOUT,
        "gaId": site.ga_id,
        "optimizeId": site.optimize_id,
        "conversionId": site.conversion_id,
        "canonical": canonical,
        "path": resolved.section,
        "srcPrefix": asset_prefix(site.production),
        "days": days,
        "stage": site.stage.as_str(),
        "forms": site.forms,
    });

    if let (Some(entity), Value::Object(map)) = (&resolved.entity, &mut scope) {
        let youtube_id = match entity.entity.youtube_id() {
            Some(id) => Value::String(id.to_string()),
            None => Value::Bool(false),
        };
        map.insert("layout".into(), json!(AMP_LAYOUT));
        map.insert("id".into(), json!(entity.id));
        map.insert("bodyClass".into(), json!(entity.entity.body_class()));
        map.insert("title".into(), json!(entity.entity.name().unwrap_or("")));
        map.insert(
            "time_label".into(),
            json!(entity.entity.time_label().unwrap_or("")),
        );
        map.insert(
            "description".into(),
            json!(entity.entity.description().unwrap_or("")),
        );
        map.insert("youtube_id".into(), youtube_id);
        map.insert("payload".into(), entity.entity.payload());
        map.insert("styles".into(), json!(styles.unwrap_or("")));
    }

    scope
}
