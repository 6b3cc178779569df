mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn request(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn generates_pdf_attachment_for_resolved_port() {
    let app = common::app();

    let response = request(
        app,
        "/api/v1/loa/rear-ports?port=42&partner=Acme%20Carrier&partner_street=1%20Acme%20Way&partner_city=London",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        disposition,
        format!("attachment; filename=\"LOA_AcmeCarrier_{today}_Hall A.pdf\"")
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"%PDF"));
    assert!(body.len() > 1000);
}

#[tokio::test]
async fn partner_fields_default_to_empty() {
    let app = common::app();

    let response = request(app, "/api/v1/loa/rear-ports?port=42").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn missing_port_parameter_is_rejected() {
    let app = common::app();

    let response = request(app, "/api/v1/loa/rear-ports?partner=Acme").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn device_without_rack_produces_no_document() {
    let app = common::app_with(|inventory| {
        inventory.devices.get_mut(&7).unwrap().rack = None;
    });

    let response = request(app, "/api/v1/loa/rear-ports?port=42&partner=Acme").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!bytes.starts_with(b"%PDF"));

    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().unwrap().contains("device's rack"));
}

#[tokio::test]
async fn empty_rear_port_name_produces_no_document() {
    let app = common::app_with(|inventory| {
        inventory.rear_ports.get_mut(&42).unwrap().name = String::new();
    });

    let response = request(app, "/api/v1/loa/rear-ports?port=42").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().unwrap().contains("rear-port name"));
}

#[tokio::test]
async fn unconfigured_tenant_produces_no_document() {
    let app = common::app_with(|inventory| {
        inventory.devices.get_mut(&7).unwrap().tenant =
            Some(loagen::inventory::models::TenantRef {
                id: 9,
                slug: "acme".into(),
            });
    });

    let response = request(app, "/api/v1/loa/rear-ports?port=42&partner=Acme").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!bytes.starts_with(b"%PDF"));

    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().unwrap().contains("acme"));
}

#[tokio::test]
async fn fractional_rack_position_renders() {
    let app = common::app_with(|inventory| {
        inventory.devices.get_mut(&7).unwrap().position = Some(12.5);
    });

    let response = request(app, "/api/v1/loa/rear-ports?port=42&partner=Acme").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn unknown_rear_port_is_a_named_lookup_failure() {
    let app = common::app();

    let response = request(app, "/api/v1/loa/rear-ports?port=999").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().unwrap().contains("rear-port"));
}
