//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    Audio, Change, ChangeValue, Entry, Image, InboundMessage, Payload, StatusResponse, TextBody,
};
use crate::services::QueueStats;

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::webhook::verify_webhook,
        super::webhook::receive_message,
        super::health::health_check,
        super::health::readiness,
        super::queue::queue_stats,
    ),
    components(schemas(
        Payload,
        Entry,
        Change,
        ChangeValue,
        InboundMessage,
        TextBody,
        Audio,
        Image,
        StatusResponse,
        QueueStats,
        HealthCheck,
    )),
    tags(
        (name = "Webhook", description = "Guest messaging webhook"),
        (name = "Health", description = "Liveness and readiness"),
        (name = "Queue", description = "Routing queue observability"),
    ),
    info(
        title = "Concierge API",
        description = "Hotel guest-messaging intent router",
    )
)]
pub struct ApiDoc;
