//! Concierge Server
//!
//! Binds the guest-messaging webhook, wires the infrastructure adapters
//! into the routing core, and runs the per-guest work queue.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod auth;
mod config;
mod models;
mod routes;
mod services;

use concierge::{
    Dispatcher, GuestDirectory, MessageChannel, Persona, TranscriptionService,
};

use adapters::{
    GeminiSearchAgent, OpenAiProvider, StaticGuestDirectory, WhatsAppChannel, WhisperTranscriber,
};
use config::Config;
use services::GuestWorkQueue;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub verify_token: String,
    pub app_secret: Option<String>,
    pub directory: Arc<dyn GuestDirectory>,
    pub transcriber: Arc<dyn TranscriptionService>,
    pub channel: Arc<dyn MessageChannel>,
    pub queue: GuestWorkQueue,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Concierge initializing...");

    let config = Config::from_env()?;

    if config.app_secret.is_some() {
        tracing::info!("Webhook signature verification enabled");
    } else {
        tracing::warn!("No WHATSAPP_APP_SECRET set - signature verification disabled");
    }

    // Infrastructure adapters
    let whatsapp = WhatsAppChannel::new(
        config.whatsapp_api_key.clone(),
        config.whatsapp_phone_number_id.clone(),
    );
    let channel: Arc<dyn MessageChannel> = Arc::new(whatsapp.clone());

    let llm = Arc::new(
        OpenAiProvider::new(config.openai_api_key.clone(), config.chat_model.clone())
            .with_base_url(config.openai_base_url.clone()),
    );
    tracing::info!(model = %config.chat_model, "Chat provider initialized");

    let agent = Arc::new(
        GeminiSearchAgent::new(config.gemini_api_key.clone())
            .with_model(config.gemini_model.clone())
            .with_max_results(config.search_max_results),
    );
    tracing::info!(model = %config.gemini_model, "Search agent initialized");

    let transcriber: Arc<dyn TranscriptionService> = Arc::new(WhisperTranscriber::new(
        config.openai_api_key.clone(),
        config.whisper_model.clone(),
        whatsapp.clone(),
    ));

    let directory: Arc<dyn GuestDirectory> = Arc::new(StaticGuestDirectory::demo());

    // Routing core, constructed once and shared
    let dispatcher = Arc::new(Dispatcher::new(llm, agent, Persona::default()));
    let queue = GuestWorkQueue::new(dispatcher, channel.clone(), config.queue_capacity);
    tracing::info!(capacity = config.queue_capacity, "Guest work queue initialized");

    let state = AppState {
        verify_token: config.verify_token.clone(),
        app_secret: config.app_secret.clone(),
        directory,
        transcriber,
        channel,
        queue,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::webhook::router())
        .merge(routes::health::router())
        .merge(routes::queue::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Concierge ready - listening for guest messages");

    axum::serve(listener, router).await?;
    Ok(())
}
