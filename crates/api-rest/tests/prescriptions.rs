use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use therabot_core::{DiseaseRecord, DocumentComposer, KnowledgeBase, PrescriptionService};
use tower::ServiceExt;

fn app() -> Router {
    let prescriptions =
        PrescriptionService::new(KnowledgeBase::builtin().unwrap(), DocumentComposer::default());
    router(AppState { prescriptions })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn known_disease_returns_pdf_attachment() {
    let response = app()
        .oneshot(post_json("/", r#"{"confirmed_disease": "gastritis"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Prescription.pdf\""
    );
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn prescriptions_route_matches_root_route() {
    let response = app()
        .oneshot(post_json(
            "/prescriptions",
            r#"{"confirmed_disease": "Gastric Ulcer"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_disease_returns_not_found_payload() {
    let response = app()
        .oneshot(post_json(
            "/",
            r#"{"confirmed_disease": "nonexistent disease"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "success": false,
            "error": "No recommendation found for nonexistent_disease"
        })
    );
}

#[tokio::test]
async fn mixed_case_and_extra_spaces_resolve() {
    let response = app()
        .oneshot(post_json(
            "/",
            r#"{"confirmed_disease": "Acute   Pancreatitis"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let response = app().oneshot(post_json("/", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("confirmed_disease"));
}

#[tokio::test]
async fn non_string_field_is_bad_request() {
    let response = app()
        .oneshot(post_json("/", r#"{"confirmed_disease": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_name_is_bad_request() {
    let response = app()
        .oneshot(post_json("/", r#"{"confirmed_disease": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "disease name cannot be empty");
}

#[tokio::test]
async fn health_reports_alive() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn openapi_document_lists_prescription_route() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/prescriptions"]["post"].is_object());
}

#[tokio::test]
async fn rendering_failure_returns_generic_internal_error() {
    let knowledge = KnowledgeBase::load(vec![DiseaseRecord {
        identifier: "gastritis".into(),
        recommendation: "rest".into(),
        treatment: "bad\u{7}text".into(),
    }])
    .unwrap();
    let prescriptions = PrescriptionService::new(knowledge, DocumentComposer::default());

    let response = router(AppState { prescriptions })
        .oneshot(post_json("/", r#"{"confirmed_disease": "gastritis"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "error": "Internal server error"})
    );
}
