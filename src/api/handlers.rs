//! HTTP request handlers

use super::types::{
    ChatRequest, ChatResponse, ConnectivityRequest, ErrorResponse, MessageView, SessionResponse,
    SuccessResponse,
};
use super::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session snapshot (messages, pending, online)
        .route("/api/session", get(get_session))
        // User actions
        .route("/api/chat", post(send_chat))
        .route("/api/session/clear", post(clear_session))
        // Host environment reachability signal
        .route("/api/connectivity", post(set_connectivity))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Read Surface
// ============================================================

async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let snapshot = state.session.snapshot().await;
    let now = Utc::now();

    Json(SessionResponse {
        messages: snapshot
            .messages
            .into_iter()
            .map(|m| MessageView::from_message(m, now))
            .collect(),
        pending: snapshot.pending,
        online: state.connectivity.is_online(),
    })
}

// ============================================================
// Commands
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let rejection = state
        .session
        .send(req.text)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ChatResponse {
        accepted: rejection.is_none(),
    }))
}

async fn clear_session(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .session
        .clear()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(SuccessResponse { success: true }))
}

async fn set_connectivity(
    State(state): State<AppState>,
    Json(req): Json<ConnectivityRequest>,
) -> Json<SuccessResponse> {
    state.connectivity.set_online(req.online);
    Json(SuccessResponse { success: true })
}

async fn get_version() -> &'static str {
    concat!("ember-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Errors
// ============================================================

enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
