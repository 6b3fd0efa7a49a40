//! Whisper Transcription
//!
//! Voice-note pipeline: download the media through the WhatsApp client,
//! then post it to the audio transcriptions endpoint with
//! `response_format=text`. Audio stays in memory; nothing touches disk.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use concierge::{DomainError, TranscriptionService};

use crate::adapters::whatsapp::WhatsAppChannel;

/// Transcribes guest voice notes via the Whisper API.
#[derive(Clone)]
pub struct WhisperTranscriber {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    media_source: WhatsAppChannel,
}

impl WhisperTranscriber {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        media_source: WhatsAppChannel,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            media_source,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// File name hint derived from the mime type ("audio/ogg; codecs=opus"
    /// becomes "voice.ogg").
    fn file_name(mime_type: &str) -> String {
        let extension = mime_type
            .split('/')
            .nth(1)
            .and_then(|s| s.split(';').next())
            .unwrap_or("ogg");
        format!("voice.{extension}")
    }
}

#[async_trait]
impl TranscriptionService for WhisperTranscriber {
    async fn transcribe(&self, media_id: &str, mime_type: &str) -> Result<String, DomainError> {
        let audio = self.media_source.download_media(media_id).await?;

        let part = Part::bytes(audio)
            .file_name(Self::file_name(mime_type))
            .mime_str(mime_type)
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        let form = Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("response_format", "text");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "transcription returned {status}: {body}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))
    }
}
