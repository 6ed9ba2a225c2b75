//! Shared fixtures for unit and route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::store::{CartClearer, EnrollmentWriter, StoreError};
use crate::usecases::FinalizeCheckout;
use crate::webhook::EventVerifier;

pub const WEBHOOK_SECRET: &str = "whsec_test_course_market";

/// Builds a `Stripe-Signature` header value for `payload`.
pub fn sign(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(format!("{}.", timestamp).as_bytes());
    mac.update(payload);
    format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
}

pub fn sign_now(payload: &[u8]) -> String {
    sign(payload, WEBHOOK_SECRET, chrono::Utc::now().timestamp())
}

pub fn checkout_completed(user_id: &str, course_ids: &str) -> Vec<u8> {
    serde_json::json!({
        "id": "evt_test_checkout",
        "type": "checkout.session.completed",
        "data": {
            "object": {
                "id": "cs_test_a1",
                "metadata": {"userId": user_id, "courseIds": course_ids}
            }
        }
    })
    .to_string()
    .into_bytes()
}

pub fn event_of_type(event_type: &str) -> Vec<u8> {
    serde_json::json!({
        "id": "evt_test_other",
        "type": event_type,
        "data": {"object": {"id": "pi_test"}}
    })
    .to_string()
    .into_bytes()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Enroll { user_id: i64, course_id: i64 },
    ClearCart { user_id: i64 },
}

/// In-memory enrollment and cart backend that records every committed write.
#[derive(Default)]
pub struct RecordingStore {
    ops: Mutex<Vec<Op>>,
    enroll_attempts: AtomicUsize,
    fail_on_enroll_attempt: Option<usize>,
    fail_clear: bool,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fails the n-th enrollment attempt (1-based).
    pub fn failing_enrollment(n: usize) -> Arc<Self> {
        Arc::new(Self { fail_on_enroll_attempt: Some(n), ..Self::default() })
    }

    pub fn failing_cart() -> Arc<Self> {
        Arc::new(Self { fail_clear: true, ..Self::default() })
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().expect("ops lock").clone()
    }

    pub fn enroll_attempts(&self) -> usize {
        self.enroll_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrollmentWriter for RecordingStore {
    async fn enroll(&self, user_id: i64, course_id: i64) -> Result<(), StoreError> {
        let attempt = self.enroll_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_enroll_attempt == Some(attempt) {
            return Err(StoreError::RowCount { expected: 1, actual: 0 });
        }
        self.ops.lock().expect("ops lock").push(Op::Enroll { user_id, course_id });
        Ok(())
    }
}

#[async_trait]
impl CartClearer for RecordingStore {
    async fn clear_cart(&self, user_id: i64) -> Result<u64, StoreError> {
        if self.fail_clear {
            return Err(StoreError::RowCount { expected: 1, actual: 0 });
        }
        self.ops.lock().expect("ops lock").push(Op::ClearCart { user_id });
        Ok(0)
    }
}

pub fn finalizer(store: &Arc<RecordingStore>) -> FinalizeCheckout {
    FinalizeCheckout::new(
        EventVerifier::with_secret(WEBHOOK_SECRET.to_string(), 300),
        store.clone(),
        store.clone(),
    )
}
