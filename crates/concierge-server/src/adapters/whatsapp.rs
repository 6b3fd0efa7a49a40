//! WhatsApp Cloud API Channel
//!
//! Outbound delivery through the Graph API messages endpoint, plus the
//! two-step media download used for voice notes.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use concierge::{DomainError, MessageChannel};

const GRAPH_BASE_URL: &str = "https://graph.facebook.com/v21.0";

/// WhatsApp Business Cloud API client.
#[derive(Clone)]
pub struct WhatsAppChannel {
    client: Client,
    api_key: String,
    phone_number_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct TextMessageRequest<'a> {
    messaging_product: &'static str,
    preview_url: bool,
    recipient_type: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextPayload<'a>,
}

#[derive(Serialize)]
struct TextPayload<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct MediaUrlResponse {
    url: String,
}

impl WhatsAppChannel {
    pub fn new(api_key: impl Into<String>, phone_number_id: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            phone_number_id: phone_number_id.into(),
            base_url: GRAPH_BASE_URL.to_string(),
        }
    }

    /// Override the Graph API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve a media id to bytes: first GET returns the download URL,
    /// second GET fetches the content. Both carry the bearer token.
    pub async fn download_media(&self, media_id: &str) -> Result<Vec<u8>, DomainError> {
        let meta_url = format!("{}/{}", self.base_url, media_id);
        let meta: MediaUrlResponse = self
            .client
            .get(&meta_url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalService(format!("media URL lookup failed: {e}")))?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        debug!(media_id = %media_id, "Downloading media content");

        let bytes = self
            .client
            .get(&meta.url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalService(format!("media download failed: {e}")))?
            .bytes()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MessageChannel for WhatsAppChannel {
    async fn deliver(&self, recipient: &str, text: &str) -> Result<(), DomainError> {
        let url = format!("{}/{}/messages", self.base_url, self.phone_number_id);
        let request = TextMessageRequest {
            messaging_product: "whatsapp",
            preview_url: false,
            recipient_type: "individual",
            to: recipient,
            kind: "text",
            text: TextPayload { body: text },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "message send returned {status}: {body}"
            )));
        }

        debug!(recipient = %recipient, "Message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_body_shape() {
        let request = TextMessageRequest {
            messaging_product: "whatsapp",
            preview_url: false,
            recipient_type: "individual",
            to: "17818163706",
            kind: "text",
            text: TextPayload {
                body: "The spa closes at 7:00 PM",
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messaging_product"], "whatsapp");
        assert_eq!(json["recipient_type"], "individual");
        assert_eq!(json["to"], "17818163706");
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"]["body"], "The spa closes at 7:00 PM");
        assert_eq!(json["preview_url"], false);
    }

    #[test]
    fn test_media_url_response_parsing() {
        let parsed: MediaUrlResponse = serde_json::from_value(serde_json::json!({
            "url": "https://lookaside.example/media/abc",
            "mime_type": "audio/ogg",
            "id": "media-9"
        }))
        .unwrap();
        assert_eq!(parsed.url, "https://lookaside.example/media/abc");
    }
}
