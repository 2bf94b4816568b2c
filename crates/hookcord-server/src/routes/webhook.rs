//! Webhook Routes - GitHub deliveries in, Discord messages out
//!
//! Every delivery resolves to one response: 200 with a short text for both
//! delivered and skipped events, or the error text with a non-2xx status.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tracing::{error, info, Instrument};
use uuid::Uuid;

use hookcord::EventKind;

use crate::application::RelayError;
use crate::signature::{verify_signature, SIGNATURE_HEADER};
use crate::AppState;

pub const EVENT_HEADER: &str = "X-GitHub-Event";
pub const DELIVERY_HEADER: &str = "X-GitHub-Delivery";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Receive a GitHub webhook delivery
pub async fn receive_webhook(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, (StatusCode, String)> {
    let delivery_id = header_str(&headers, DELIVERY_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let span = tracing::info_span!("delivery", delivery_id = %delivery_id);

    async move {
        let outcome = async {
            let event = header_str(&headers, EVENT_HEADER).ok_or(RelayError::MissingHeader)?;
            info!(event = %event, "Got X-GitHub-Event header");

            if let Some(secret) = &state.config.webhook_secret {
                if !verify_signature(secret, &body, header_str(&headers, SIGNATURE_HEADER)) {
                    return Err(RelayError::InvalidSignature);
                }
            }

            let kind = EventKind::from_header(event);
            let credentials = state.config.resolve_credentials(&params);
            state.relay.relay(&kind, &body, credentials.as_ref()).await
        }
        .await;

        match outcome {
            Ok(outcome) => Ok(outcome.message()),
            Err(e) => {
                error!(error = %e, status = %e.status_code(), "Webhook delivery failed");
                Err((e.status_code(), e.to_string()))
            }
        }
    }
    .instrument(span)
    .await
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(receive_webhook))
        .route("/webhook", post(receive_webhook))
}
