//! Integration tests for the online travel landing page
//!
//! These tests start the router on an ephemeral port and drive it over HTTP,
//! checking the page and the JSON API against the resolver.

use online_travel_landing::i18n::{resolve, Language, ENGLISH_BASE};
use online_travel_landing::server::{build_router, AppState};
use serde_json::Value;

// ==================== Test Helpers ====================

/// Start the app on 127.0.0.1 with a random port and return its base URL
async fn spawn_app(default_language: Language) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("local addr");

    let router = build_router(AppState { default_language });
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server");
    });

    format!("http://{}", address)
}

async fn get_text(url: &str) -> (u16, String) {
    let response = reqwest::get(url).await.expect("request");
    let status = response.status().as_u16();
    (status, response.text().await.expect("body"))
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.expect("request");
    let status = response.status().as_u16();
    (status, response.json().await.expect("json body"))
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(Language::En).await;

    let (status, body) = get_text(&format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body, "OK");
}

// ==================== Landing Page Tests ====================

#[tokio::test]
async fn test_landing_page_defaults_to_english() {
    let base = spawn_app(Language::En).await;

    let (status, html) = get_text(&format!("{}/", base)).await;
    assert_eq!(status, 200);
    assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(html.contains(ENGLISH_BASE.title));
    assert!(html.contains(r#"href="/flights""#));
    assert!(html.contains(r#"href="/hotels""#));
}

#[tokio::test]
async fn test_landing_page_honours_configured_default() {
    let base = spawn_app(Language::Nl).await;

    let (_, html) = get_text(&format!("{}/", base)).await;
    assert!(html.contains(resolve(Language::Nl).title));
    assert!(html.contains(r#"<option value="nl" selected>"#));
}

#[tokio::test]
async fn test_landing_page_selected_language() {
    let base = spawn_app(Language::En).await;

    let (status, html) = get_text(&format!("{}/?lang=de", base)).await;
    assert_eq!(status, 200);
    assert!(html.contains("Online Reisebuchung für Flüge und Hotels"));
    assert!(html.contains("Reise planen"));
    // German has no section translation
    assert!(html.contains(ENGLISH_BASE.section_title));
}

#[tokio::test]
async fn test_landing_page_unknown_language_falls_back() {
    let base = spawn_app(Language::En).await;

    let (status, html) = get_text(&format!("{}/?lang=tlh", base)).await;
    assert_eq!(status, 200);
    assert!(html.contains(ENGLISH_BASE.title));
    assert!(html.contains(r#"<option value="en" selected>"#));
}

#[tokio::test]
async fn test_landing_page_unknown_language_uses_configured_default() {
    let base = spawn_app(Language::De).await;

    let (status, html) = get_text(&format!("{}/?lang=tlh", base)).await;
    assert_eq!(status, 200);
    assert!(html.contains("Online Reisebuchung für Flüge und Hotels"));
    assert!(html.contains(r#"<option value="de" selected>"#));
}

#[tokio::test]
async fn test_landing_page_arabic_is_rtl() {
    let base = spawn_app(Language::En).await;

    let (_, html) = get_text(&format!("{}/?lang=ar", base)).await;
    assert!(html.contains(r#"dir="rtl""#));
    assert!(html.contains("حجز السفر عبر الإنترنت للرحلات والفنادق"));
}

#[tokio::test]
async fn test_ctas_are_not_served_here() {
    let base = spawn_app(Language::En).await;

    let (status, _) = get_text(&format!("{}/flights", base)).await;
    assert_eq!(status, 404);
}

// ==================== JSON API Tests ====================

#[tokio::test]
async fn test_list_languages() {
    let base = spawn_app(Language::En).await;

    let (status, json) = get_json(&format!("{}/api/languages", base)).await;
    assert_eq!(status, 200);

    let languages = json.as_array().expect("array");
    assert_eq!(languages.len(), 13);
    assert_eq!(languages[0]["code"], "en");
    assert_eq!(languages[0]["canonical"], true);
    assert_eq!(languages[7]["label"], "മലയാളം (Malayalam)");
    assert!(languages.iter().all(|l| l.get("language").is_none()));
}

#[tokio::test]
async fn test_translation_endpoint_merges_partial_override() {
    let base = spawn_app(Language::En).await;

    let (status, json) = get_json(&format!("{}/api/translations/es", base)).await;
    assert_eq!(status, 200);
    assert_eq!(json["title"], "Reserva de viajes en línea para vuelos y hoteles");
    assert_eq!(json["ctaSecondary"], "Explorar destinos");
    assert_eq!(json["sectionTitle"], ENGLISH_BASE.section_title);
    assert_eq!(json["footer"], ENGLISH_BASE.footer);
}

#[tokio::test]
async fn test_translation_endpoint_replaces_feature_list() {
    let base = spawn_app(Language::En).await;

    let (_, json) = get_json(&format!("{}/api/translations/ml", base)).await;
    let features: Vec<&str> = json["features"]
        .as_array()
        .expect("features array")
        .iter()
        .map(|f| f.as_str().expect("string"))
        .collect();

    assert_eq!(features, resolve(Language::Ml).features);
    assert!(features
        .iter()
        .all(|f| !ENGLISH_BASE.features.iter().any(|base| base == f)));
}

#[tokio::test]
async fn test_translation_endpoint_unknown_code() {
    let base = spawn_app(Language::En).await;

    let (status, json) = get_json(&format!("{}/api/translations/xx", base)).await;
    assert_eq!(status, 404);
    assert!(json["error"]
        .as_str()
        .expect("error message")
        .contains("xx"));
}

#[tokio::test]
async fn test_every_language_resolves_over_http() {
    let base = spawn_app(Language::En).await;

    for language in Language::ALL {
        let (status, json) =
            get_json(&format!("{}/api/translations/{}", base, language.code())).await;
        assert_eq!(status, 200, "{}", language);

        for field in [
            "title",
            "subtitle",
            "ctaPrimary",
            "ctaSecondary",
            "sectionTitle",
            "footer",
        ] {
            let text = json[field].as_str().expect("string field");
            assert!(!text.is_empty(), "{} {}", language, field);
        }
        assert!(!json["features"].as_array().expect("array").is_empty());
    }
}

#[tokio::test]
async fn test_metrics_endpoint_counts_resolutions() {
    let base = spawn_app(Language::En).await;

    get_text(&format!("{}/?lang=fr", base)).await;
    let (status, json) = get_json(&format!("{}/api/metrics", base)).await;

    assert_eq!(status, 200);
    assert!(json["resolutions"].as_u64().expect("count") >= 1);
    assert!(json["override_hits"].as_u64().expect("count") >= 1);
    assert!(json["override_hit_rate"].is_number());
}
