//! Interactions webhook endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{instrument, warn};

use crate::adapters::signature::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::core::format::FormatStyle;
use crate::core::interaction::handle_interaction;
use crate::domain::model::{Interaction, InteractionResponse};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

#[derive(Clone)]
pub struct AppState {
    verifier: Arc<SignatureVerifier>,
    style: FormatStyle,
}

impl AppState {
    pub fn new(verifier: SignatureVerifier, style: FormatStyle) -> Self {
        Self {
            verifier: Arc::new(verifier),
            style,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let verifier = SignatureVerifier::from_hex(config.public_key())?;
        Ok(Self::new(verifier, config.format_style()))
    }
}

/// Reasons a request is turned away before any command logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookRejection {
    MethodNotAllowed,
    MissingSignature,
    InvalidSignature,
    MalformedPayload,
}

impl IntoResponse for WebhookRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebhookRejection::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            WebhookRejection::MissingSignature => {
                (StatusCode::UNAUTHORIZED, "Bad request signature")
            }
            WebhookRejection::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, "Invalid request signature")
            }
            WebhookRejection::MalformedPayload => {
                (StatusCode::BAD_REQUEST, "Invalid interaction payload")
            }
        };
        (status, message).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(interactions))
        .route("/interactions", any(interactions))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// POST /interactions
#[instrument(skip_all)]
pub async fn interactions(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> std::result::Result<Json<InteractionResponse>, WebhookRejection> {
    if method != Method::POST {
        return Err(WebhookRejection::MethodNotAllowed);
    }

    let (Some(signature), Some(timestamp)) = (
        header(&headers, SIGNATURE_HEADER),
        header(&headers, TIMESTAMP_HEADER),
    ) else {
        warn!("🔒 Request without signature headers");
        return Err(WebhookRejection::MissingSignature);
    };

    if let Err(e) = state.verifier.verify(signature, timestamp, &body) {
        warn!("🔒 {}", e);
        return Err(WebhookRejection::InvalidSignature);
    }

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        warn!("❌ Undecodable interaction: {}", e);
        WebhookRejection::MalformedPayload
    })?;

    Ok(Json(handle_interaction(&interaction, state.style)))
}
