use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::AppError;
use crate::models::PaymentEvent;
use crate::store::{CartClearer, EnrollmentWriter};
use crate::webhook::EventVerifier;

/// Reacts to a completed checkout: enrolls the buyer in every purchased
/// course, in order, then empties their cart.
///
/// Writes are not wrapped in a transaction. A failure part way leaves the
/// earlier enrollments in place and the cart untouched; the provider redelivers
/// on any non-2xx answer, which inserts those earlier enrollments again.
#[derive(Clone)]
pub struct FinalizeCheckout {
    verifier: EventVerifier,
    enrollments: Arc<dyn EnrollmentWriter>,
    cart: Arc<dyn CartClearer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFinalized {
    pub user_id: i64,
    pub course_ids: Vec<i64>,
    pub cart_items_removed: u64,
}

impl FinalizeCheckout {
    pub fn new(
        verifier: EventVerifier,
        enrollments: Arc<dyn EnrollmentWriter>,
        cart: Arc<dyn CartClearer>,
    ) -> Self {
        Self { verifier, enrollments, cart }
    }

    pub async fn execute(&self, payload: &[u8], signature: Option<&str>) -> Result<CheckoutFinalized, AppError> {
        let event = self.verifier.verify(payload, signature).map_err(|e| {
            warn!("Webhook signature verification failed: {}", e);
            e
        })?;
        info!("Verified webhook event {}", event.id());

        let (event_id, session) = match event {
            PaymentEvent::CheckoutCompleted { id, session } => (id, session),
            PaymentEvent::Other { id, event_type } => {
                info!("Ignoring webhook event {} of type {}", id, event_type);
                return Err(AppError::UnsupportedEvent(event_type));
            }
        };

        let metadata = session.metadata();
        let course_ids = metadata.course_ids()?;
        let user_id = metadata.user_id()?;
        info!("Event {} (session {}): enrolling user {} in courses {:?}", event_id, session.id, user_id, course_ids);

        for course_id in &course_ids {
            self.enrollments.enroll(user_id, *course_id).await.map_err(|e| {
                error!("Error enrolling user {} in course {}: {}", user_id, course_id, e);
                e
            })?;
            info!("User {} successfully enrolled in course {}", user_id, course_id);
        }

        let cart_items_removed = self.cart.clear_cart(user_id).await.map_err(|e| {
            error!("Error clearing cart for user {} after enrollment: {}", user_id, e);
            e
        })?;
        info!("Cart cleared for user {} ({} items)", user_id, cart_items_removed);

        Ok(CheckoutFinalized { user_id, course_ids, cart_items_removed })
    }
}
