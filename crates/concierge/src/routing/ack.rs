//! Acknowledgment Synthesizer
//!
//! Generates the short confirmation a guest receives after their request
//! has been routed to a department. Availability over fidelity: a failed
//! model call is logged and replaced with a fixed fallback; this path
//! never surfaces an error to the guest.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::domain::TaskRecord;
use crate::ports::{ChatMessage, CompletionOptions, LlmProvider};
use crate::routing::persona::Persona;

/// System instruction reinforcing the reply length cap.
const LENGTH_CAP_INSTRUCTION: &str = "Please limit your response to 3 sentences or fewer.";

/// Produces task acknowledgments through the generative model.
#[derive(Clone)]
pub struct AckSynthesizer {
    llm: Arc<dyn LlmProvider>,
    persona: Persona,
}

impl AckSynthesizer {
    pub fn new(llm: Arc<dyn LlmProvider>, persona: Persona) -> Self {
        Self { llm, persona }
    }

    /// Generate an acknowledgment for a routed task.
    ///
    /// Never fails: any model error is absorbed and converted into a
    /// fixed fallback that still references the guest by first name.
    pub async fn synthesize(&self, task: &TaskRecord, first_name: &str) -> String {
        let prompt = self.build_prompt(task);
        info!(prompt = %prompt, "Invoking LLM for task acknowledgment");

        let messages = [
            ChatMessage::system(LENGTH_CAP_INSTRUCTION),
            ChatMessage::user(&prompt),
        ];

        let started = Instant::now();
        match self
            .llm
            .complete(&messages, &CompletionOptions::default())
            .await
        {
            Ok(reply) => {
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    model = self.llm.model_id(),
                    "LLM acknowledgment generated"
                );
                reply
            }
            Err(err) => {
                error!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "LLM invocation failed, using fallback acknowledgment"
                );
                Self::fallback(first_name)
            }
        }
    }

    fn build_prompt(&self, task: &TaskRecord) -> String {
        format!(
            "You are a polite and professional hotel owner named {representative} at the {hotel}. \
             A guest named {guest}, staying in room {room}, has submitted the following request: \
             \"{message}\". This request has been routed to the {department} department. \
             Write a response to the guest that acknowledges their request, assures them that \
             the {department} team is working on it, and invites them to make additional \
             requests if needed. Respond in a friendly and professional tone, and please limit \
             your response to 3 sentences or fewer.",
            representative = self.persona.representative,
            hotel = self.persona.hotel,
            guest = task.guest_first_name,
            room = task.room_number,
            message = task.message,
            department = task.department,
        )
    }

    /// Fixed guest-safe acknowledgment used when generation fails.
    pub fn fallback(first_name: &str) -> String {
        format!(
            "Thank you for reaching out, {first_name}. We are reviewing your request and will \
             get back to you shortly. If you have any urgent needs, please contact the front desk."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::{Department, DomainError, Guest, RoomAssignment};

    struct FixedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for FixedLlm {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<String, DomainError> {
            Ok(self.0.to_string())
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }

        fn model_id(&self) -> &str {
            "fixed-test"
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<String, DomainError> {
            Err(DomainError::ModelInvocation("connection refused".into()))
        }

        fn provider_name(&self) -> &str {
            "failing"
        }

        fn model_id(&self) -> &str {
            "failing-test"
        }
    }

    fn task() -> TaskRecord {
        let guest = Guest::new(1, "17818163706", "Dana", "Rivera", "default");
        TaskRecord::assemble(
            &guest,
            Department::Housekeeping,
            RoomAssignment::for_guest(&guest),
            "I need towels sent to my room",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_returns_model_reply_on_success() {
        let synth = AckSynthesizer::new(
            Arc::new(FixedLlm("Right away, Dana! Housekeeping is on it.")),
            Persona::default(),
        );
        let reply = synth.synthesize(&task(), "Dana").await;
        assert_eq!(reply, "Right away, Dana! Housekeeping is on it.");
    }

    #[tokio::test]
    async fn test_model_failure_yields_fallback_with_first_name() {
        let synth = AckSynthesizer::new(Arc::new(FailingLlm), Persona::default());
        let reply = synth.synthesize(&task(), "Dana").await;
        assert!(!reply.is_empty());
        assert!(reply.contains("Dana"));
        assert_eq!(reply, AckSynthesizer::fallback("Dana"));
    }

    #[test]
    fn test_prompt_names_department_and_room() {
        let synth = AckSynthesizer::new(Arc::new(FailingLlm), Persona::default());
        let prompt = synth.build_prompt(&task());
        assert!(prompt.contains("housekeeping"));
        assert!(prompt.contains("406")); // 400 + len("Rivera")
        assert!(prompt.contains("I need towels sent to my room"));
        assert!(prompt.contains("Karim"));
    }
}
