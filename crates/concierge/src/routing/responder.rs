//! Informational Responder
//!
//! Answers non-actionable guest questions. The static hours table is
//! consulted first; everything else goes to the search-augmented agent
//! with persona and formatting instructions appended. No retry here:
//! hard failures propagate to the dispatcher, which owns the apology.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::domain::DomainError;
use crate::ports::SearchAgent;
use crate::routing::hours::HoursTable;
use crate::routing::persona::Persona;

/// Produces informational replies via lookup table or search agent.
#[derive(Clone)]
pub struct InfoResponder {
    agent: Arc<dyn SearchAgent>,
    persona: Persona,
    hours: HoursTable,
}

impl InfoResponder {
    pub fn new(agent: Arc<dyn SearchAgent>, persona: Persona) -> Self {
        Self {
            agent,
            persona,
            hours: HoursTable::standard(),
        }
    }

    /// Replace the default hours table.
    pub fn with_hours(mut self, hours: HoursTable) -> Self {
        self.hours = hours;
        self
    }

    /// Answer an informational query for the named guest.
    pub async fn answer(&self, query: &str, first_name: &str) -> Result<String, DomainError> {
        if let Some(canned) = self.hours.lookup(query) {
            info!(query = %query, "Answered from hours table");
            return Ok(canned.to_string());
        }

        let prompt = self.build_prompt(query, first_name);
        info!(prompt = %prompt, "Running search agent");

        let started = Instant::now();
        match self.agent.run(&prompt).await {
            Ok(reply) => {
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Search agent returned"
                );
                Ok(reply)
            }
            Err(err) => {
                error!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    prompt = %prompt,
                    error = %err,
                    "Search agent failed"
                );
                Err(err)
            }
        }
    }

    fn build_prompt(&self, query: &str, first_name: &str) -> String {
        format!(
            "{query} Respond in less than 3 sentences as if you were a hotel manager at \
             {venue}, and refer to me as {first_name}. Please do not make up information.",
            query = query,
            venue = self.persona.venue,
            first_name = first_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAgent {
        calls: AtomicUsize,
        reply: &'static str,
    }

    impl CountingAgent {
        fn new(reply: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply,
            }
        }
    }

    #[async_trait]
    impl SearchAgent for CountingAgent {
        async fn run(&self, _query: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    struct FailingAgent;

    #[async_trait]
    impl SearchAgent for FailingAgent {
        async fn run(&self, _query: &str) -> Result<String, DomainError> {
            Err(DomainError::ModelInvocation("agent timed out".into()))
        }
    }

    #[tokio::test]
    async fn test_hours_table_hit_skips_agent() {
        let agent = Arc::new(CountingAgent::new("unused"));
        let responder = InfoResponder::new(agent.clone(), Persona::default());

        let reply = responder
            .answer("what time does the spa close?", "Dana")
            .await
            .unwrap();

        assert_eq!(reply, "The spa closes at 7:00 PM");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_miss_delegates_to_agent() {
        let agent = Arc::new(CountingAgent::new("The gondola runs until 4 PM, Dana."));
        let responder = InfoResponder::new(agent.clone(), Persona::default());

        let reply = responder
            .answer("is the gondola running today?", "Dana")
            .await
            .unwrap();

        assert_eq!(reply, "The gondola runs until 4 PM, Dana.");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_agent_failure_propagates() {
        let responder = InfoResponder::new(Arc::new(FailingAgent), Persona::default())
            .with_hours(HoursTable::empty());

        let err = responder
            .answer("is the gondola running today?", "Dana")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ModelInvocation(_)));
    }

    #[test]
    fn test_prompt_carries_persona_and_name() {
        let responder = InfoResponder::new(Arc::new(FailingAgent), Persona::default());
        let prompt = responder.build_prompt("is the pool heated?", "Dana");

        assert!(prompt.starts_with("is the pool heated?"));
        assert!(prompt.contains("Ritz Carlton Bachelor Gulch"));
        assert!(prompt.contains("refer to me as Dana"));
        assert!(prompt.contains("do not make up information"));
    }
}
