//! # API REST
//!
//! REST API implementation for TheraBot.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON payloads, attachment headers, CORS)
//!
//! Uses `api-shared` for payload types and `therabot-core` for the prescription logic.

#![warn(rust_2018_idioms)]

use api_shared::{ErrorRes, HealthRes, HealthService, PrescriptionReq};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use therabot_core::{PrescriptionService, TherabotError};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the REST API server
///
/// Holds the prescription service, whose knowledge base and decoration images were loaded at
/// startup and are only read by handlers.
#[derive(Clone)]
pub struct AppState {
    pub prescriptions: PrescriptionService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_prescription),
    components(schemas(HealthRes, PrescriptionReq, ErrorRes))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

const MALFORMED_REQUEST: &str = "confirmed_disease is required and must be a string";
const INTERNAL_ERROR: &str = "Internal server error";

/// Build the REST router.
///
/// `POST /` is kept alongside `POST /prescriptions` for chat front ends that post to the
/// service root.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_prescription))
        .route("/prescriptions", post(create_prescription))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/prescriptions",
    request_body = PrescriptionReq,
    responses(
        (status = 200, description = "Prescription PDF attachment", content_type = "application/pdf"),
        (status = 400, description = "Missing or malformed disease name", body = ErrorRes),
        (status = 404, description = "No knowledge for the disease", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Render a prescription for a confirmed disease
///
/// Normalises the disease name, looks up its treatment and recommendation, and returns a
/// single-page PDF as a `Prescription.pdf` attachment. The document is built completely before
/// the response starts, so a failure never produces a truncated PDF.
///
/// # Errors
/// - `400 Bad Request` if `confirmed_disease` is missing, not a string, or blank.
/// - `404 Not Found` if the disease is not in the knowledge base.
/// - `500 Internal Server Error` if rendering fails.
#[axum::debug_handler]
async fn create_prescription(
    State(state): State<AppState>,
    payload: Result<Json<PrescriptionReq>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request_id = uuid::Uuid::new_v4();

    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(%request_id, "rejected prescription request: {}", rejection.body_text());
        (StatusCode::BAD_REQUEST, Json(ErrorRes::new(MALFORMED_REQUEST)))
    })?;

    tracing::info!(%request_id, "prescription requested for {:?}", req.confirmed_disease);

    let service = state.prescriptions.clone();
    let name = req.confirmed_disease;
    let outcome = tokio::task::spawn_blocking(move || service.prescribe(&name))
        .await
        .map_err(|e| {
            tracing::error!(%request_id, "prescription task failed: {:?}", e);
            internal_error()
        })?;

    match outcome {
        Ok(prescription) => {
            tracing::info!(
                %request_id,
                "prescription rendered for {} ({} bytes)",
                prescription.disease,
                prescription.bytes.len()
            );
            let disposition = format!("attachment; filename=\"{}\"", prescription.filename);
            Ok((
                [
                    (header::CONTENT_TYPE, prescription.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                prescription.bytes,
            )
                .into_response())
        }
        Err(e) => Err(error_response(request_id, e)),
    }
}

fn error_response(request_id: uuid::Uuid, err: TherabotError) -> ApiError {
    match err {
        TherabotError::InvalidInput(msg) => {
            tracing::warn!(%request_id, "invalid prescription request: {}", msg);
            (StatusCode::BAD_REQUEST, Json(ErrorRes::new(msg)))
        }
        e if e.is_not_found() => {
            tracing::info!(%request_id, "{}", e);
            (StatusCode::NOT_FOUND, Json(ErrorRes::new(e.to_string())))
        }
        e => {
            tracing::error!(%request_id, "prescription error: {:?}", e);
            internal_error()
        }
    }
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorRes::new(INTERNAL_ERROR)),
    )
}
