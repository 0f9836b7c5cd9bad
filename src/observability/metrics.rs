//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_renders_total` (counter): rendered pages by template, status
//! - `site_render_duration_seconds` (histogram): render latency
//! - `site_amp_css_compiles_total` (counter): stylesheet compilations

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on its own listener. Failure is logged
/// and the server keeps running without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one templated render.
pub fn record_render(template: &str, status: u16, start: Instant) {
    let labels = [
        ("template", template.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("site_renders_total", &labels).increment(1);
    metrics::histogram!("site_render_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record one AMP stylesheet compilation.
pub fn record_css_compile() {
    metrics::counter!("site_amp_css_compiles_total").increment(1);
}
