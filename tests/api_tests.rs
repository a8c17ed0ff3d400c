//! Integration tests for the conversion HTTP endpoints.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use kognic2openlabel::server::router;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tower::ServiceExt;

const CHECK_ID: &str = "9610f0ef-185f-41c6-a500-db0d568a8feb";

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

async fn send_json(method: Method, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    router().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn convert_get_returns_openlabel_document() {
    let response = send_json(Method::GET, "/convert", &fixture("kognic_format.json")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["openlabel"]["objects"].is_object());
    assert!(json["data"]["openlabel"]["frames"].is_object());
}

#[tokio::test]
async fn convert_get_bbox_matches_reference() {
    let response = send_json(Method::GET, "/convert", &fixture("kognic_format.json")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let out = body_json(response).await;
    let expected = fixture("open_label_format.json");
    let pointer = format!("/data/openlabel/frames/0/objects/{}/object_data/bbox/0/val", CHECK_ID);
    let bbox_out = out.pointer(&pointer).unwrap().as_array().unwrap();
    let bbox_expected = expected.pointer(&pointer).unwrap().as_array().unwrap();

    assert_eq!(bbox_out.len(), 4);
    for (a, b) in bbox_out.iter().zip(bbox_expected) {
        assert!((a.as_f64().unwrap() - b.as_f64().unwrap()).abs() < 1e-6);
    }
}

#[tokio::test]
async fn convert_post_returns_same_document_as_get() {
    let input = fixture("kognic_format.json");
    let via_get = body_json(send_json(Method::GET, "/convert", &input).await).await;

    let response = send_json(Method::POST, "/convert", &input).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, via_get);
}

#[tokio::test]
async fn convert_invalid_record_returns_400() {
    let response = send_json(Method::POST, "/convert", &json!({"shapeProperties": {}})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("shapes"));
}

#[tokio::test]
async fn convert_unsupported_geometry_returns_400() {
    let mut input = fixture("kognic_format.json");
    input["shapes"]["CAM"]["features"][0]["geometry"]["type"] = json!("Polygon");

    let response = send_json(Method::POST, "/convert", &input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED_GEOMETRY");
}

#[tokio::test]
async fn health_check_returns_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let request = Request::builder()
        .uri("/this-route-does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
