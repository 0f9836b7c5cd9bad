//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Load the dataset and templates, derive startup state
//! - Special-case the fixed routes, then fall through to the resolver
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Everything derived from disk (dataset, section list, day grouping,
//!   policy header) is computed once in `new` and injected via AppState
//! - A resolver decline produces the same response as the router
//!   fallback; nothing renders on a decline

use axum::{
    extract::{OriginalUri, Path as PathParams, State},
    http::{header, HeaderName, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::amp::css::AmpCss;
use crate::config::schema::{SiteConfig, SitePaths};
use crate::http::request::RequestIdLayer;
use crate::observability::metrics;
use crate::render::engine::{Engine, EngineError};
use crate::render::scope::{self, SiteContext};
use crate::render::sections::SectionList;
use crate::routing::mount::mount_url;
use crate::routing::resolver::resolve;
use crate::schedule::calendar::{derive_days, Day};
use crate::schedule::dataset::{load_schedule, Schedule, ScheduleError};
use crate::security::headers::{feature_policy, FEATURE_POLICY_HEADER};

/// Search-engine ownership verification route.
pub const VERIFICATION_ROUTE: &str = "/googlec6dfdf23945d0d0c.html";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteContext>,
    pub schedule: Arc<Schedule>,
    pub days: Arc<Vec<Day>>,
    pub sections: Arc<SectionList>,
    pub engine: Arc<Engine>,
    pub amp_css: Arc<AmpCss>,
    pub paths: Arc<SitePaths>,
    pub policy_header: HeaderValue,
}

/// Error type for server construction.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("failed to scan views directory {path}: {source}")]
    Sections {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid policy header: {0}")]
    Policy(#[from] axum::http::header::InvalidHeaderValue),
}

/// HTTP server for the conference site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Load the dataset and templates, derive startup state, and build
    /// the router.
    pub fn new(config: SiteConfig) -> Result<Self, StartupError> {
        let schedule = Arc::new(load_schedule(&config.paths.schedule_file)?);
        let days = Arc::new(derive_days(&schedule));
        let sections = Arc::new(SectionList::from_dir(&config.paths.views_dir).map_err(
            |source| StartupError::Sections {
                path: config.paths.views_dir.clone(),
                source,
            },
        )?);
        let engine = Arc::new(Engine::new(
            &config.paths.views_dir,
            &config.paths.layouts_dir,
            &config.paths.partials_dir,
        )?);
        let amp_css = Arc::new(AmpCss::new(
            config.production,
            &config.paths.amp_css_source,
            &config.paths.amp_css_prebuilt,
        ));
        let site = Arc::new(SiteContext::from_config(&config));
        let policy_header = HeaderValue::from_str(&feature_policy(config.production))?;

        tracing::info!(
            sections = sections.names().len(),
            sessions = schedule.sessions.len(),
            speakers = schedule.speakers.len(),
            days = days.len(),
            "Site data loaded"
        );

        let state = AppState {
            site,
            schedule,
            days,
            sections,
            engine,
            amp_css,
            paths: Arc::new(config.paths.clone()),
            policy_header,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router: fixed routes first, static mounts per mode,
    /// then the section/entity fallthrough.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/sw.js", get(service_worker))
            .route("/schedule.json", get(schedule_json))
            .route(VERIFICATION_ROUTE, get(verification))
            .route("/sitemap.xml", get(sitemap))
            .route("/", get(root_page))
            .route("/{section}", get(section_page))
            .route("/{section}/{id}", get(entity_page));

        let router = if config.production {
            router.nest_service("/res", ServeDir::new(&config.paths.dist_dir))
        } else {
            router
                .nest_service("/static", ServeDir::new(&config.paths.static_dir))
                .nest_service("/src", ServeDir::new(&config.paths.src_dir))
                .nest_service("/node_modules", ServeDir::new(&config.paths.vendor_dir))
        };

        router
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            production = self.config.production,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

async fn root_page(
    State(state): State<AppState>,
    OriginalUri(original): OriginalUri,
    uri: Uri,
) -> Response {
    render_page(&state, "", None, &original, &uri).await
}

async fn section_page(
    State(state): State<AppState>,
    PathParams(section): PathParams<String>,
    OriginalUri(original): OriginalUri,
    uri: Uri,
) -> Response {
    render_page(&state, &section, None, &original, &uri).await
}

async fn entity_page(
    State(state): State<AppState>,
    PathParams((section, id)): PathParams<(String, String)>,
    OriginalUri(original): OriginalUri,
    uri: Uri,
) -> Response {
    render_page(&state, &section, Some(&id), &original, &uri).await
}

/// Resolve and render a section or entity page.
async fn render_page(
    state: &AppState,
    path: &str,
    rest: Option<&str>,
    original: &Uri,
    inner: &Uri,
) -> Response {
    let start = Instant::now();

    let Some(resolved) = resolve(&state.sections, &state.schedule, path, rest) else {
        tracing::debug!(path, rest, "No section or entity matched");
        return not_found().await;
    };

    let site_prefix = mount_url(Some(original.path()), inner.path());

    let styles = match &resolved.entity {
        Some(_) => match state.amp_css.stylesheet().await {
            Ok(css) => Some(css),
            Err(e) => {
                tracing::error!(error = %e, "AMP stylesheet unavailable");
                return server_error();
            }
        },
        None => None,
    };

    let (template, layout) = match &resolved.entity {
        Some(entity) => (entity.entity.template().to_string(), scope::AMP_LAYOUT),
        None if resolved.section.is_empty() => (scope::ROOT_TEMPLATE.to_string(), scope::DEFAULT_LAYOUT),
        None => (resolved.section.clone(), scope::DEFAULT_LAYOUT),
    };

    let scope = scope::build_scope(
        &state.site,
        &state.days,
        &site_prefix,
        &resolved,
        styles.as_deref(),
    );

    match state.engine.render_page(&template, layout, &scope) {
        Ok(html) => {
            metrics::record_render(&template, 200, start);
            with_policy_header(state, Html(html).into_response())
        }
        Err(e) => {
            tracing::error!(template = %template, error = %e, "Render failed");
            metrics::record_render(&template, 500, start);
            with_policy_header(state, server_error())
        }
    }
}

fn with_policy_header(state: &AppState, mut response: Response) -> Response {
    response.headers_mut().insert(
        HeaderName::from_static(FEATURE_POLICY_HEADER),
        state.policy_header.clone(),
    );
    response
}

/// The service worker is served from the mode's asset directory,
/// bypassing templating.
async fn service_worker(State(state): State<AppState>) -> Response {
    let dir = if state.site.production {
        &state.paths.dist_dir
    } else {
        &state.paths.src_dir
    };
    serve_file(dir.join("sw.js"), "application/javascript").await
}

/// The raw dataset file, as-is.
async fn schedule_json(State(state): State<AppState>) -> Response {
    serve_file(state.paths.schedule_file.clone(), "application/json").await
}

async fn verification(State(state): State<AppState>) -> Response {
    serve_file(
        state.paths.verification_file.clone(),
        "text/html; charset=utf-8",
    )
    .await
}

/// Render the sitemap template with the full dataset.
async fn sitemap(
    State(state): State<AppState>,
    OriginalUri(original): OriginalUri,
    uri: Uri,
) -> Response {
    let site_prefix = mount_url(Some(original.path()), uri.path());
    let scope = json!({
        "sessions": serde_json::to_value(&state.schedule.sessions).unwrap_or_default(),
        "speakers": serde_json::to_value(&state.schedule.speakers).unwrap_or_default(),
        "sitePrefix": site_prefix,
    });

    match state.engine.render(scope::SITEMAP_TEMPLATE, &scope) {
        Ok(xml) => ([(header::CONTENT_TYPE, "text/xml")], xml).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Sitemap render failed");
            server_error()
        }
    }
}

async fn serve_file(path: PathBuf, content_type: &'static str) -> Response {
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Asset unavailable");
            not_found().await
        }
    }
}

/// Shared responder for router fallback and resolver declines.
async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
