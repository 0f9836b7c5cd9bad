//! End-to-end route tests against the shipped site tree.

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_index_page_renders() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("DevSummit 2019"));
    assert!(body.contains("Edition #7"));
}

#[tokio::test]
async fn test_schedule_section_lists_sessions() {
    let addr = common::spawn_site(common::site_config()).await;

    let body = reqwest::get(format!("http://{addr}/schedule"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Opening Keynote"));
    // breaks appear in the grid but are not linked
    assert!(body.contains("Registration"));
    assert!(!body.contains("/schedule/_registration"));
}

#[tokio::test]
async fn test_unknown_section_is_404() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_popup_renders_amp() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/schedule/opening-keynote"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let policy = response
        .headers()
        .get("feature-policy")
        .expect("feature-policy header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(policy.contains("geolocation 'none'"));

    let body = response.text().await.unwrap();
    assert!(body.contains("schedule-popup"));
    assert!(body.contains("Opening Keynote"));
    assert!(body.contains("<html amp"));
    // dev mode compiles the source stylesheet into the page
    assert!(body.contains(".popup{"));
}

#[tokio::test]
async fn test_speaker_popup_renders() {
    let addr = common::spawn_site(common::site_config()).await;

    let body = reqwest::get(format!("http://{addr}/speakers/mara-voss"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("speaker-popup"));
    assert!(body.contains("Mara Voss"));
}

#[tokio::test]
async fn test_reserved_ids_are_not_addressable() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/schedule/_registration"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_entity_is_404() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/schedule/not-a-talk"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_json_serves_raw_dataset() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/schedule.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let dataset: serde_json::Value = response.json().await.unwrap();
    assert!(dataset["sessions"]["opening-keynote"]["name"]
        .as_str()
        .unwrap()
        .contains("Keynote"));
}

#[tokio::test]
async fn test_sitemap_is_xml_without_reserved_ids() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/xml"
    );

    let body = response.text().await.unwrap();
    assert!(body.contains("<urlset"));
    assert!(body.contains("/schedule/opening-keynote"));
    assert!(body.contains("/speakers/mara-voss"));
    assert!(!body.contains("_registration"));
}

#[tokio::test]
async fn test_service_worker_served_directly() {
    let addr = common::spawn_site(common::site_config()).await;

    let response = reqwest::get(format!("http://{addr}/sw.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/javascript"
    );
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("self.addEventListener"));
}

#[tokio::test]
async fn test_verification_file_served() {
    let addr = common::spawn_site(common::site_config()).await;

    let body = reqwest::get(format!("http://{addr}/googlec6dfdf23945d0d0c.html"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("google-site-verification"));
}

#[tokio::test]
async fn test_development_static_mounts() {
    let addr = common::spawn_site(common::site_config()).await;

    for path in ["/static/schedule.json", "/src/amp.css", "/node_modules/normalize.css/normalize.css"] {
        let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "expected 200 for {path}");
    }
    // production mount is absent in development
    let response = reqwest::get(format!("http://{addr}/res/main.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_production_mode_assets_and_prebuilt_css() {
    let mut config = common::site_config();
    config.production = true;
    let addr = common::spawn_site(config).await;

    // built assets mounted at /res, dev mounts gone
    let response = reqwest::get(format!("http://{addr}/res/main.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = reqwest::get(format!("http://{addr}/static/schedule.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // popups inline the prebuilt stylesheet as-is
    let body = reqwest::get(format!("http://{addr}/schedule/edge-rendering"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(".popup{max-width:640px"));
    // the published recording renders an embedded player
    assert!(body.contains("amp-youtube"));
}
