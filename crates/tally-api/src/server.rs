//! Axum routes for the tally service.
//!
//! Two operations plus a health probe. Errors follow the boundary
//! contract: validation failures are 400 with a plain-text body, unknown
//! or unparseable identifiers are 404 with a plain-text body.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tally::{MemoryStore, PointsStore, ProcessError, Processor, ReceiptId};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: Processor<MemoryStore>,
    pub start_time: Instant,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new() -> Self {
        Self {
            processor: Processor::new(MemoryStore::new()),
            start_time: Instant::now(),
        }
    }

    fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

type SharedState = Arc<AppState>;

#[derive(Debug, Serialize)]
struct ProcessResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct PointsResponse {
    points: u64,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
    receipts_scored: usize,
}

/// Plain-text API error, per the boundary contract.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn invalid_receipt() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "The receipt is invalid",
        }
    }

    fn receipt_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "No receipt found for that id",
        }
    }

    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ProcessError> for ApiError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::Validation(_) => Self::invalid_receipt(),
            ProcessError::ReceiptNotFound(_) => Self::receipt_not_found(),
            ProcessError::Store(_) => Self::internal(),
        }
    }
}

/// Bind the listener and serve until the process is stopped.
pub async fn start_server(state: AppState, addr: &str, log_requests: bool) -> Result<()> {
    let app = build_router(Arc::new(state), log_requests);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind listener on {addr}"))?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")
}

/// Build the router. `log_requests` adds an HTTP trace span per request.
pub fn build_router(state: SharedState, log_requests: bool) -> Router {
    let mut router = Router::new()
        .route("/receipts/process", post(handle_process))
        .route("/receipts/:id/points", get(handle_get_points))
        .route("/health", get(handle_health));

    if log_requests {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

async fn handle_process(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let submission = state.processor.process(&body).await?;
    Ok(Json(ProcessResponse {
        id: submission.id.to_hex(),
    }))
}

async fn handle_get_points(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    // An identifier that does not parse cannot have a record.
    let id = ReceiptId::from_hex(&id).map_err(|_| ApiError::receipt_not_found())?;
    let points = state.processor.lookup(&id).await?;
    Ok(Json(PointsResponse { points }))
}

async fn handle_health(
    State(state): State<SharedState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let receipts_scored = state
        .processor
        .store()
        .record_count()
        .await
        .map_err(|_| ApiError::internal())?;

    Ok(Json(HealthResponse {
        status: "ok",
        uptime_secs: state.uptime_seconds(),
        receipts_scored,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tally_testkit::vectors::{CORNER_MARKET_RECEIPT, TARGET_RECEIPT};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::new()), false)
    }

    fn post_receipt(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text_body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_process_then_retrieve_points() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_receipt(CORNER_MARKET_RECEIPT))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = json_body(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/receipts/{id}/points"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["points"], 109);
    }

    #[tokio::test]
    async fn test_resubmission_returns_the_same_id() {
        let app = app();

        let first = app
            .clone()
            .oneshot(post_receipt(TARGET_RECEIPT))
            .await
            .unwrap();
        let second = app
            .clone()
            .oneshot(post_receipt(TARGET_RECEIPT))
            .await
            .unwrap();

        assert_eq!(
            json_body(first).await["id"],
            json_body(second).await["id"]
        );
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_a_plain_text_400() {
        let app = app();

        let response = app
            .oneshot(post_receipt(r#"{"retailer": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(text_body(response).await, "The receipt is invalid");
    }

    #[tokio::test]
    async fn test_unknown_id_is_a_plain_text_404() {
        let app = app();
        let id = ReceiptId::derive(b"never submitted").to_hex();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/receipts/{id}/points"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text_body(response).await, "No receipt found for that id");
    }

    #[tokio::test]
    async fn test_unparseable_id_is_a_404() {
        let app = app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/receipts/not-a-real-id/points")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_reports_record_count() {
        let app = app();

        app.clone()
            .oneshot(post_receipt(CORNER_MARKET_RECEIPT))
            .await
            .unwrap();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["receipts_scored"], 1);
    }
}
