use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::config::Settings;
use crate::error::AppError;
use crate::models::PaymentEvent;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Authenticates Stripe webhook deliveries against the endpoint's signing secret.
#[derive(Clone)]
pub struct EventVerifier {
    secret: String,
    tolerance_secs: i64,
}

struct SignatureHeader<'a> {
    timestamp: i64,
    /// `t` exactly as sent; the provider signs this text, not a reformatted number.
    signed_timestamp: &'a str,
    signatures: Vec<Vec<u8>>,
}

impl EventVerifier {
    pub fn new(settings: &Settings) -> Self {
        Self::with_secret(settings.stripe_webhook_secret.clone(), settings.stripe_webhook_tolerance_secs)
    }

    pub fn with_secret(secret: String, tolerance_secs: i64) -> Self {
        Self { secret, tolerance_secs }
    }

    pub fn verify(&self, payload: &[u8], header: Option<&str>) -> Result<PaymentEvent, AppError> {
        self.verify_at(payload, header, Utc::now().timestamp())
    }

    pub fn verify_at(&self, payload: &[u8], header: Option<&str>, now: i64) -> Result<PaymentEvent, AppError> {
        let header = header
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| AppError::Authentication("No signature header found".to_string()))?;
        let parsed = SignatureHeader::parse(header)?;

        // Only deliveries that are too old are refused. An age that does not fit in i64 is too old.
        let too_old = now
            .checked_sub(parsed.timestamp)
            .is_none_or(|age| age > self.tolerance_secs);
        if self.tolerance_secs > 0 && too_old {
            warn!("Rejecting webhook signed at {} (now {})", parsed.timestamp, now);
            return Err(AppError::Authentication("Timestamp outside the tolerance zone".to_string()));
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| AppError::Authentication(format!("Invalid signing secret: {}", e)))?;
        mac.update(parsed.signed_timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);

        let matched = parsed
            .signatures
            .iter()
            .any(|candidate| mac.clone().verify_slice(candidate).is_ok());

        if !matched {
            return Err(AppError::Authentication(
                "No signatures found matching the expected signature for payload".to_string(),
            ));
        }

        PaymentEvent::from_slice(payload)
    }
}

impl<'a> SignatureHeader<'a> {
    fn parse(header: &'a str) -> Result<Self, AppError> {
        let mut timestamp = None;
        let mut signatures = Vec::new();

        for part in header.split(',') {
            let Some((key, value)) = part.trim().split_once('=') else {
                continue;
            };
            match key {
                "t" => {
                    let ts = value
                        .parse::<i64>()
                        .map_err(|_| AppError::Authentication("Unable to extract timestamp from header".to_string()))?;
                    timestamp = Some((ts, value));
                }
                // Entries that are not valid hex can never match; skip them.
                "v1" => {
                    if let Ok(bytes) = hex::decode(value) {
                        signatures.push(bytes);
                    }
                }
                _ => {}
            }
        }

        let (timestamp, signed_timestamp) = timestamp
            .ok_or_else(|| AppError::Authentication("Unable to extract timestamp from header".to_string()))?;

        if signatures.is_empty() {
            return Err(AppError::Authentication("No signatures found with expected scheme".to_string()));
        }

        Ok(Self { timestamp, signed_timestamp, signatures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sign, WEBHOOK_SECRET};

    const NOW: i64 = 1_700_000_000;
    const PAYLOAD: &[u8] =
        br#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"id":"cs_1","metadata":{"userId":"7","courseIds":"3"}}}}"#;

    fn verifier() -> EventVerifier {
        EventVerifier::with_secret(WEBHOOK_SECRET.to_string(), 300)
    }

    #[test]
    fn valid_signature_yields_event() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, NOW);

        let event = verifier().verify_at(PAYLOAD, Some(&header), NOW).unwrap();

        assert_eq!(event.id(), "evt_1");
        assert!(matches!(event, PaymentEvent::CheckoutCompleted { .. }));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let header = sign(PAYLOAD, "whsec_someone_else", NOW);

        let err = verifier().verify_at(PAYLOAD, Some(&header), NOW).unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, NOW);
        let tampered = br#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"id":"cs_1","metadata":{"userId":"8","courseIds":"3"}}}}"#;

        let err = verifier().verify_at(tampered, Some(&header), NOW).unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, NOW - 600);

        let err = verifier().verify_at(PAYLOAD, Some(&header), NOW).unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn timestamps_ahead_of_the_clock_are_accepted() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, NOW + 600);

        assert!(verifier().verify_at(PAYLOAD, Some(&header), NOW).is_ok());
    }

    #[test]
    fn extreme_timestamps_are_rejected_without_overflow() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, i64::MIN);

        let err = verifier().verify_at(PAYLOAD, Some(&header), NOW).unwrap_err();

        assert!(matches!(err, AppError::Authentication(m) if m == "Timestamp outside the tolerance zone"));
    }

    #[test]
    fn signature_covers_the_timestamp_as_sent() {
        let signed_timestamp = format!("0{}", NOW);
        let mut mac = HmacSha256::new_from_slice(WEBHOOK_SECRET.as_bytes()).unwrap();
        mac.update(format!("{}.", signed_timestamp).as_bytes());
        mac.update(PAYLOAD);
        let header = format!("t={},v1={}", signed_timestamp, hex::encode(mac.finalize().into_bytes()));

        assert!(verifier().verify_at(PAYLOAD, Some(&header), NOW).is_ok());
    }

    #[test]
    fn zero_tolerance_skips_age_check() {
        let header = sign(PAYLOAD, WEBHOOK_SECRET, NOW - 86_400);
        let verifier = EventVerifier::with_secret(WEBHOOK_SECRET.to_string(), 0);

        assert!(verifier.verify_at(PAYLOAD, Some(&header), NOW).is_ok());
    }

    #[test]
    fn any_matching_v1_entry_is_enough() {
        let valid = sign(PAYLOAD, WEBHOOK_SECRET, NOW);
        let valid_sig = valid.split("v1=").nth(1).unwrap();
        let header = format!("t={},v1={},v1={},v0=deadbeef", NOW, "ab".repeat(32), valid_sig);

        assert!(verifier().verify_at(PAYLOAD, Some(&header), NOW).is_ok());
    }

    #[test]
    fn malformed_headers_are_rejected() {
        for header in [
            None,
            Some(""),
            Some("garbage"),
            Some("v1=abcd"),
            Some("t=1700000000"),
            Some("t=soon,v1=ab"),
            Some("t=-9223372036854775808,v1=abab"),
        ] {
            let err = verifier().verify_at(PAYLOAD, header, NOW).unwrap_err();
            assert!(matches!(err, AppError::Authentication(_)), "header {:?}", header);
        }
    }

    #[test]
    fn signed_garbage_is_a_validation_error() {
        let payload = b"not an event";
        let header = sign(payload, WEBHOOK_SECRET, NOW);

        let err = verifier().verify_at(payload, Some(&header), NOW).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
