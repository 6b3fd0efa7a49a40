//! WhatsApp Cloud API inbound payload
//!
//! The platform wraps each event in entry/changes/value layers; only the
//! first message of the first change is relevant for this channel.
//! Status-only notifications (delivery receipts) carry no `messages`
//! array and are acknowledged without processing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level webhook payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Payload {
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Change {
    pub value: ChangeValue,
    #[serde(default)]
    pub field: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChangeValue {
    #[serde(default)]
    pub messaging_product: String,
    #[serde(default)]
    pub messages: Option<Vec<InboundMessage>>,
}

/// One inbound guest message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InboundMessage {
    /// Sender phone number.
    pub from: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextBody>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TextBody {
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Audio {
    pub id: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Image {
    pub id: String,
    pub mime_type: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Payload {
    /// The first message of the first change, if any.
    ///
    /// Delivery-status payloads have no messages and return `None`.
    pub fn first_message(&self) -> Option<&InboundMessage> {
        self.entry
            .first()?
            .changes
            .first()?
            .value
            .messages
            .as_ref()?
            .first()
    }
}

/// Immediate acknowledgment returned to the platform.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_message() {
        let payload: Payload = serde_json::from_value(serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "entry-1",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "messages": [{
                            "from": "17818163706",
                            "id": "wamid.1",
                            "type": "text",
                            "text": { "body": "I need towels sent to my room" }
                        }]
                    }
                }]
            }]
        }))
        .unwrap();

        let message = payload.first_message().unwrap();
        assert_eq!(message.from, "17818163706");
        assert_eq!(message.kind, "text");
        assert_eq!(
            message.text.as_ref().unwrap().body,
            "I need towels sent to my room"
        );
        assert!(message.audio.is_none());
    }

    #[test]
    fn test_parse_audio_message() {
        let payload: Payload = serde_json::from_value(serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "entry-1",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "messages": [{
                            "from": "17818163706",
                            "id": "wamid.2",
                            "type": "audio",
                            "audio": { "id": "media-9", "mime_type": "audio/ogg; codecs=opus" }
                        }]
                    }
                }]
            }]
        }))
        .unwrap();

        let message = payload.first_message().unwrap();
        assert_eq!(message.kind, "audio");
        assert_eq!(message.audio.as_ref().unwrap().id, "media-9");
    }

    #[test]
    fn test_status_only_payload_has_no_message() {
        let payload: Payload = serde_json::from_value(serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "entry-1",
                "changes": [{
                    "field": "messages",
                    "value": { "messaging_product": "whatsapp" }
                }]
            }]
        }))
        .unwrap();

        assert!(payload.first_message().is_none());
    }

    #[test]
    fn test_empty_entry_has_no_message() {
        let payload: Payload = serde_json::from_value(serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": []
        }))
        .unwrap();

        assert!(payload.first_message().is_none());
    }
}
