use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use travelrec_core::config::Settings;
use travelrec_recommend::TravelRecommender;
use travelrec_server::{router, AppState};

fn fixture_app() -> Router {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test_data");
    let mut settings = Settings::default();
    settings.data.dataset_path = data.join("India_Travel_Dataset.csv").to_string_lossy().to_string();
    settings.model.encoders_path = data.join("label_encoders.json").to_string_lossy().to_string();
    settings.model.index_path = data.join("travel_recommendation_model.json").to_string_lossy().to_string();
    let recommender = TravelRecommender::load(&settings).expect("load fixtures");
    router(AppState::new(recommender).expect("templates"))
}

async fn send(req: Request<Body>) -> (StatusCode, String) {
    let res = fixture_app().oneshot(req).await.expect("response");
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/recommend")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

const MANALI_FORM: &str = "zone=North&state=Himachal+Pradesh&city=Manali&age_group=18-25\
    &gender=Male&ideal_months=Oct-Feb&budget=Medium";

#[tokio::test]
async fn home_page_links_to_form() {
    let (status, body) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/recommendation\""));
}

#[tokio::test]
async fn form_lists_zones_in_dataset_order() {
    let (status, body) = send(get("/recommendation")).await;
    assert_eq!(status, StatusCode::OK);
    let north = body.find("<option value=\"North\">").expect("North option");
    let south = body.find("<option value=\"South\">").expect("South option");
    let west = body.find("<option value=\"West\">").expect("West option");
    let east = body.find("<option value=\"East\">").expect("East option");
    assert!(north < south && south < west && west < east);
    assert!(body.contains("<option value=\"Medium\">"));
}

#[tokio::test]
async fn states_for_known_zone() {
    let (status, body) = send(post_json("/get_states", r#"{"zone":"North"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let states: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(states, vec!["Himachal Pradesh", "Punjab"]);
}

#[tokio::test]
async fn unknown_zone_and_state_give_empty_lists() {
    let (status, body) = send(post_json("/get_states", r#"{"zone":"Central"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let (status, body) = send(post_json("/get_cities", r#"{"state":"Atlantis"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn cities_for_known_state() {
    let (status, body) = send(post_json("/get_cities", r#"{"state":"Himachal Pradesh"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let cities: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(cities, vec!["Manali", "Shimla"]);
}

#[tokio::test]
async fn missing_zone_field_is_rejected() {
    let (status, _) = send(post_json("/get_states", r#"{"region":"North"}"#)).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn recommend_renders_nearest_destinations() {
    let (status, body) = send(post_form(MANALI_FORM)).await;
    assert_eq!(status, StatusCode::OK);
    let solang = body.find("Solang Valley").expect("first pick");
    let rohtang = body.find("Rohtang Pass").expect("second pick");
    let hampi = body.find("Virupaksha Temple").expect("third pick");
    assert!(solang < rohtang && rohtang < hampi);
    assert!(!body.contains("Calangute Beach"));
}

#[tokio::test]
async fn unknown_category_is_bad_request() {
    let form = MANALI_FORM.replace("budget=Medium", "budget=Luxury");
    let (status, body) = send(post_form(&form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Luxury"));
}

#[tokio::test]
async fn incomplete_form_is_rejected() {
    let (status, _) = send(post_form("zone=North&state=Himachal+Pradesh")).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_reports_dataset_and_model() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["destinations"], 12);
    assert_eq!(json["zones"], 4);
    assert_eq!(json["neighbors"], 3);
}
