use serde::Deserialize;

use crate::error::AppError;

pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

/// A payment provider notification, narrowed to the events this service acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentEvent {
    CheckoutCompleted { id: String, session: CheckoutSession },
    Other { id: String, event_type: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub metadata: Option<CheckoutMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutMetadata {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "courseIds")]
    pub course_ids: Option<String>,
}

#[derive(Deserialize)]
struct RawEvent {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    data: RawEventData,
}

#[derive(Deserialize)]
struct RawEventData {
    object: serde_json::Value,
}

impl PaymentEvent {
    pub fn from_slice(payload: &[u8]) -> Result<Self, AppError> {
        let raw: RawEvent = serde_json::from_slice(payload)
            .map_err(|e| AppError::Validation(format!("Malformed event payload: {}", e)))?;

        if raw.event_type != CHECKOUT_COMPLETED {
            return Ok(PaymentEvent::Other {
                id: raw.id,
                event_type: raw.event_type,
            });
        }

        let session: CheckoutSession = serde_json::from_value(raw.data.object)
            .map_err(|e| AppError::Validation(format!("Malformed checkout session: {}", e)))?;

        Ok(PaymentEvent::CheckoutCompleted { id: raw.id, session })
    }

    pub fn id(&self) -> &str {
        match self {
            PaymentEvent::CheckoutCompleted { id, .. } | PaymentEvent::Other { id, .. } => id,
        }
    }
}

impl CheckoutSession {
    pub fn metadata(&self) -> CheckoutMetadata {
        self.metadata.clone().unwrap_or_default()
    }
}

impl CheckoutMetadata {
    /// Course ids in the order they were listed. Blank entries are dropped,
    /// repeated ids are kept.
    pub fn course_ids(&self) -> Result<Vec<i64>, AppError> {
        let raw = self.course_ids.as_deref().unwrap_or_default();

        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| AppError::Validation(format!("Invalid course ID in metadata: {}", s)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(AppError::NoCourses);
        }

        Ok(ids)
    }

    pub fn user_id(&self) -> Result<i64, AppError> {
        let raw = self.user_id.as_deref().map(str::trim).unwrap_or_default();

        if raw.is_empty() {
            return Err(AppError::Validation("No user ID found in metadata".to_string()));
        }

        raw.parse::<i64>()
            .map_err(|_| AppError::Validation(format!("Invalid user ID in metadata: {}", raw)))
    }
}
