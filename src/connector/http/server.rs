use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::connector::api::Container;
use crate::domain::DomainError;

/// `POST /api/chat` body.
#[derive(Debug, Deserialize)]
pub struct ChatInput {
    pub message: String,
}

/// `POST /api/itinerary` body.
#[derive(Debug, Deserialize)]
pub struct ItineraryInput {
    pub destination: String,
    pub days: u32,
}

/// Successful reply for both POST routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageOutput {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOutput {
    pub status: String,
    pub has_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub error: String,
}

/// Maps a [`DomainError`] onto an HTTP status and `{"error": ...}` body.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

// Malformed, incomplete or mistyped bodies are input errors like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::invalid_input(rejection.body_text()))
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Provider(_) | DomainError::ResponseParse(_) => StatusCode::BAD_GATEWAY,
            DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("HTTP request failed with {status}: {}", self.0);
        (
            status,
            Json(ErrorOutput {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Routes served by [`HttpServer`], exposed separately so they can be driven
/// without binding a socket.
pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/itinerary", post(handle_itinerary))
        .route("/api/health", get(handle_health))
        .with_state(container)
}

/// HTTP front for the chat and itinerary use cases.
pub struct HttpServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl HttpServer {
    /// Bind `addr` (port `0` picks a free port) and serve in a background task.
    pub async fn start(container: Arc<Container>, addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind HTTP server to {addr}"))?;
        let addr = listener
            .local_addr()
            .context("failed to read HTTP server address")?;

        info!("HTTP server listening on http://{addr}/api");

        let app = router(container);
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("HTTP server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for HttpServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatInput>, JsonRejection>,
) -> Result<Json<MessageOutput>, ApiError> {
    let Json(input) = payload?;
    let message = container
        .send_message_use_case()
        .execute(&input.message)
        .await?;
    Ok(Json(MessageOutput { message }))
}

async fn handle_itinerary(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ItineraryInput>, JsonRejection>,
) -> Result<Json<MessageOutput>, ApiError> {
    let Json(input) = payload?;
    let message = container
        .itinerary_use_case()
        .get_itinerary(&input.destination, input.days)
        .await?;
    Ok(Json(MessageOutput { message }))
}

async fn handle_health(State(container): State<Arc<Container>>) -> Json<HealthOutput> {
    Json(HealthOutput {
        status: "ok".to_string(),
        has_credentials: container.has_credentials(),
    })
}
