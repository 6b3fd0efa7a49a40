//! Voice Transcription Port
//!
//! Resolves a voice-note media reference into text, upstream of the
//! routing core. The core itself only ever sees resolved text.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Download the referenced audio and transcribe it.
    async fn transcribe(&self, media_id: &str, mime_type: &str) -> Result<String, DomainError>;
}
