//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use conf_site::config::SiteConfig;
use conf_site::http::HttpServer;

/// Build a config pointing at the shipped `site/` tree, independent of
/// the test runner's working directory.
pub fn site_config() -> SiteConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site");
    let mut config = SiteConfig::default();
    config.paths.views_dir = root.join("views");
    config.paths.layouts_dir = root.join("layouts");
    config.paths.partials_dir = root.join("partials");
    config.paths.static_dir = root.join("static");
    config.paths.src_dir = root.join("src");
    config.paths.dist_dir = root.join("res");
    config.paths.vendor_dir = root.join("node_modules");
    config.paths.schedule_file = root.join("static/schedule.json");
    config.paths.verification_file = root.join("static/googlec6dfdf23945d0d0c.html");
    config.paths.amp_css_source = root.join("src/amp.css");
    config.paths.amp_css_prebuilt = root.join("res/amp.css");
    config
}

/// Boot the server on an ephemeral loopback port and return its address.
pub async fn spawn_site(config: SiteConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).expect("server construction failed");
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
