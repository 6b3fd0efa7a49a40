//! Dispatcher
//!
//! Top-level entry point of the routing core: classify the message,
//! branch into the task or informational path, and return the final
//! guest-facing text. Total by contract — every failure below this point
//! is converted into a fixed guest-safe string, so the transport boundary
//! can always acknowledge.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{Guest, Intent, RoomAssignment, TaskRecord};
use crate::ports::{LlmProvider, SearchAgent};
use crate::routing::ack::AckSynthesizer;
use crate::routing::classifier::classify;
use crate::routing::department::resolve_department;
use crate::routing::hours::HoursTable;
use crate::routing::persona::Persona;
use crate::routing::responder::InfoResponder;

/// Appended to every task acknowledgment.
const DEFAULT_TRACKING_SUFFIX: &str =
    "\n\nYou can track your request status at this link: https://www.google.com.";

/// Defensive reply for an unrecognized intent.
const UNDETERMINED_REPLY: &str = "I'm sorry, I couldn't determine the intent of your request.";

/// Reply when a task record cannot be assembled.
const PROCESSING_FALLBACK: &str =
    "We are processing your request. Please contact us if you need further assistance.";

/// Apology for a failed informational response.
const SEARCH_APOLOGY: &str =
    "Sorry, there was an issue generating a response. Please try again later.";

/// Classifies, branches and replies. Stateless; one instance is built at
/// startup and shared across all in-flight messages.
#[derive(Clone)]
pub struct Dispatcher {
    ack: AckSynthesizer,
    responder: InfoResponder,
    tracking_suffix: String,
}

impl Dispatcher {
    pub fn new(llm: Arc<dyn LlmProvider>, agent: Arc<dyn SearchAgent>, persona: Persona) -> Self {
        Self {
            ack: AckSynthesizer::new(llm, persona.clone()),
            responder: InfoResponder::new(agent, persona),
            tracking_suffix: DEFAULT_TRACKING_SUFFIX.to_string(),
        }
    }

    /// Replace the hours table consulted on the informational path.
    pub fn with_hours(mut self, hours: HoursTable) -> Self {
        self.responder = self.responder.with_hours(hours);
        self
    }

    /// Override the tracking-link suffix appended to acknowledgments.
    pub fn with_tracking_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.tracking_suffix = suffix.into();
        self
    }

    /// Process one guest message and return the reply to deliver.
    ///
    /// Never fails; idempotent with respect to its inputs modulo the
    /// generative model's non-determinism.
    pub async fn handle(&self, message: &str, guest: &Guest) -> String {
        let intent = classify(message);
        info!(intent = %intent, guest_id = guest.id, "Classified guest message");
        self.handle_classified(intent, message, guest).await
    }

    async fn handle_classified(&self, intent: Intent, message: &str, guest: &Guest) -> String {
        match intent {
            Intent::Task => self.handle_task(message, guest).await,
            Intent::Search => match self.responder.answer(message, &guest.first_name).await {
                Ok(reply) => reply,
                Err(err) => {
                    error!(error = %err, guest_id = guest.id, "Informational path failed");
                    SEARCH_APOLOGY.to_string()
                }
            },
            Intent::Undetermined => UNDETERMINED_REPLY.to_string(),
        }
    }

    async fn handle_task(&self, message: &str, guest: &Guest) -> String {
        let department = resolve_department(message);
        let room = RoomAssignment::for_guest(guest);

        let record = match TaskRecord::assemble(guest, department, room, message) {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, guest_id = guest.id, "Task record assembly failed");
                return PROCESSING_FALLBACK.to_string();
            }
        };

        // Structured handoff point for the task-tracking endpoint.
        match serde_json::to_string(&record) {
            Ok(json) => info!(task = %json, department = %department, "Task record dispatched"),
            Err(err) => warn!(error = %err, "Failed to serialize task record"),
        }

        let ack = self.ack.synthesize(&record, &guest.first_name).await;
        format!("{ack}{suffix}", suffix = self.tracking_suffix)
    }
}
