//! Webhook Routes - the guest messaging boundary
//!
//! GET handles the platform's subscription handshake; POST receives
//! message events. Inbound processing is handed to the per-guest work
//! queue so the platform gets its acknowledgment immediately — failures
//! past this point are guest-experience failures, never transport
//! failures.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::auth::verify_signature;
use crate::models::{Payload, StatusResponse};
use crate::services::RoutingJob;
use crate::AppState;

const SIGNATURE_HEADER: &str = "x-hub-signature-256";
const IMAGE_REPLY: &str =
    "Thanks for the picture! We can't process images yet, but feel free to send a text or voice note.";

/// Subscription handshake query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub hub_mode: String,
    #[serde(rename = "hub.challenge")]
    pub hub_challenge: String,
    #[serde(rename = "hub.verify_token")]
    pub hub_verify_token: String,
}

/// Webhook subscription handshake
#[utoipa::path(
    get,
    path = "/",
    params(VerifyParams),
    responses(
        (status = 200, description = "Challenge echoed back", body = String),
        (status = 403, description = "Invalid verification token")
    ),
    tag = "Webhook"
)]
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<String, (StatusCode, String)> {
    if params.hub_mode == "subscribe" && params.hub_verify_token == state.verify_token {
        info!("Webhook subscription verified");
        return Ok(params.hub_challenge);
    }

    warn!(mode = %params.hub_mode, "Webhook verification rejected");
    Err((
        StatusCode::FORBIDDEN,
        "Invalid verification token".to_string(),
    ))
}

/// Inbound message event
#[utoipa::path(
    post,
    path = "/",
    request_body = Payload,
    responses(
        (status = 200, description = "Event acknowledged", body = StatusResponse),
        (status = 400, description = "Malformed payload"),
        (status = 401, description = "Sender not registered"),
        (status = 403, description = "Signature verification failed")
    ),
    tag = "Webhook"
)]
pub async fn receive_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StatusResponse>, (StatusCode, String)> {
    // Authenticity first, on the raw body
    if let Some(secret) = &state.app_secret {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !verify_signature(secret, &body, signature) {
            warn!("Webhook signature verification failed");
            return Err((
                StatusCode::FORBIDDEN,
                "Invalid webhook signature".to_string(),
            ));
        }
    }

    let payload: Payload = serde_json::from_slice(&body)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Malformed payload: {e}")))?;

    // Delivery receipts and other message-less events are just acknowledged
    let Some(message) = payload.first_message() else {
        info!("No message in payload, acknowledging");
        return Ok(Json(StatusResponse::ok()));
    };

    let guest = state
        .directory
        .lookup(&message.from)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let Some(guest) = guest else {
        warn!(from = %message.from, "Unauthorized sender");
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()));
    };

    if let Some(image) = &message.image {
        info!(media_id = %image.id, guest_id = guest.id, "Image received, replying with notice");
        let channel = state.channel.clone();
        let recipient = guest.phone_number.clone();
        tokio::spawn(async move {
            if let Err(err) = channel.deliver(&recipient, IMAGE_REPLY).await {
                error!(error = %err, "Failed to deliver image notice");
            }
        });
        return Ok(Json(StatusResponse::ok()));
    }

    // Resolve the message to text: direct body, or transcribed voice note
    let text = if let Some(text) = &message.text {
        text.body.clone()
    } else if let Some(audio) = &message.audio {
        match state.transcriber.transcribe(&audio.id, &audio.mime_type).await {
            Ok(transcript) => {
                info!(media_id = %audio.id, "Voice note transcribed");
                transcript
            }
            Err(err) => {
                // Still acknowledge: transcription problems are ours, not
                // the platform's.
                error!(media_id = %audio.id, error = %err, "Transcription failed");
                return Ok(Json(StatusResponse::ok()));
            }
        }
    } else {
        info!(kind = %message.kind, "Unsupported message type, acknowledging");
        return Ok(Json(StatusResponse::ok()));
    };

    let job = RoutingJob::new(guest, text);
    info!(job_id = %job.id, "Enqueueing guest message");
    state.queue.enqueue(job).await;

    Ok(Json(StatusResponse::ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(verify_webhook).post(receive_message))
}
