//! Webhook Signature Verification
//!
//! Validates the `X-Hub-Signature-256` header the platform attaches to
//! inbound webhook requests: HMAC-SHA256 of the raw body keyed by the app
//! secret, hex-encoded with a `sha256=` prefix.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected signature header value for a body.
pub fn sign_body(secret: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

/// Check a received signature header against the raw body.
pub fn verify_signature(secret: &str, body: &[u8], header: &str) -> bool {
    let expected = sign_body(secret, body);
    // Compared byte-wise without early exit
    if expected.len() != header.len() {
        return false;
    }
    expected
        .bytes()
        .zip(header.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_body_format() {
        let signature = sign_body("test-secret", b"test payload");
        assert!(signature.starts_with("sha256="));
        assert_eq!(signature.len(), 7 + 64); // "sha256=" + 64 hex chars
    }

    #[test]
    fn test_roundtrip_verifies() {
        let body = br#"{"object":"whatsapp_business_account"}"#;
        let header = sign_body("app-secret", body);
        assert!(verify_signature("app-secret", body, &header));
    }

    #[test]
    fn test_tampered_body_rejected() {
        let header = sign_body("app-secret", b"original");
        assert!(!verify_signature("app-secret", b"tampered", &header));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let header = sign_body("other-secret", b"body");
        assert!(!verify_signature("app-secret", b"body", &header));
    }

    #[test]
    fn test_malformed_header_rejected() {
        assert!(!verify_signature("app-secret", b"body", "sha256=nope"));
        assert!(!verify_signature("app-secret", b"body", ""));
    }
}
