use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    body::{Body, to_bytes},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    clients::gateway::GatewayClient,
    config::Config,
    models::{
        health::HealthCheckResponse,
        notification::Notification,
        response::{AckResponse, ErrorResponse},
    },
    utils::process_notification,
};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub struct AppState {
    config: Config,
    gateway: GatewayClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Error> {
        let gateway = GatewayClient::new(&config)?;
        Ok(Self { config, gateway })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config, addr: &str) -> Result<(), Error> {
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;

    info!(address = %addr, "Webhook relay started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// The first delivery failure decides the response: later sends still run,
/// but only the first error reaches the caller, as a bare JSON string.
async fn handle_webhook(State(state): State<Arc<AppState>>, body: Body) -> Response {
    let trace_id = Uuid::new_v4();

    let raw = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(%trace_id, error = %e, "Failed to read webhook body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Failed to read body")),
            )
                .into_response();
        }
    };

    let notification = match serde_json::from_slice::<Notification>(&raw) {
        Ok(notification) => notification,
        Err(e) => {
            warn!(%trace_id, details = %e, "Invalid JSON in webhook body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid JSON format").with_details(e.to_string())),
            )
                .into_response();
        }
    };

    info!(
        %trace_id,
        notification_type = %notification.notification_type,
        "Processing webhook notification"
    );

    let report = process_notification(trace_id, &state.config, &state.gateway, &notification).await;

    if let Some(e) = report.first_failure() {
        if report.failures.len() > 1 {
            warn!(
                %trace_id,
                suppressed = report.failures.len() - 1,
                "Additional delivery failures not reported to caller"
            );
        }
        return (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response();
    }

    (StatusCode::OK, Json(AckResponse::ok())).into_response()
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthCheckResponse::healthy(state.config.admins.len())),
    )
}
