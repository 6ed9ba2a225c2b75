use crate::error::AppError;
use crate::models::{CheckoutRequest, CheckoutSessionCreated};
use crate::outbound::StripeCheckout;

#[derive(Clone, Debug)]
pub struct CreateCheckoutSession {
    checkout: StripeCheckout,
}

impl CreateCheckoutSession {
    pub fn new(checkout: StripeCheckout) -> Self {
        Self { checkout }
    }

    pub async fn execute(&self, request: CheckoutRequest) -> Result<CheckoutSessionCreated, AppError> {
        let session_id = self.checkout.create_session(&request).await?;

        Ok(CheckoutSessionCreated { session_id })
    }
}
