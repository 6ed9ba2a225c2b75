use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::AppError;
use crate::models::CheckoutRequest;

/// Creates hosted checkout sessions on Stripe.
#[derive(Clone, Debug)]
pub struct StripeCheckout {
    client: Client,
    sessions_url: String,
    secret_key: String,
    currency: String,
    success_url: String,
    cancel_url: String,
}

#[derive(Deserialize)]
struct CreatedSession {
    id: String,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

impl StripeCheckout {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            sessions_url: format!("{}/v1/checkout/sessions", settings.stripe_api_base.trim_end_matches('/')),
            secret_key: settings.stripe_secret_key.clone(),
            currency: settings.checkout_currency.clone(),
            success_url: settings.checkout_success_url.clone(),
            cancel_url: settings.checkout_cancel_url.clone(),
        }
    }

    /// Returns the id of the new session.
    pub async fn create_session(&self, request: &CheckoutRequest) -> Result<String, AppError> {
        request.validate()?;
        let form = self.session_form(request)?;

        match self.client.post(&self.sessions_url)
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&form)
            .send()
            .await {
            Ok(res) => {
                let status = res.status();
                if status.is_success() {
                    let session = res.json::<CreatedSession>().await.map_err(|e| {
                        error!("Unreadable checkout session response: {}", e);
                        AppError::PaymentProvider(e.to_string())
                    })?;
                    info!("Created checkout session {} for user {}", session.id, request.user_id);
                    Ok(session.id)
                } else {
                    let body = res.text().await.unwrap_or_default();
                    let message = serde_json::from_str::<StripeErrorBody>(&body)
                        .ok()
                        .and_then(|b| b.error.message)
                        .unwrap_or_else(|| format!("Checkout session request failed with status {}", status.as_u16()));
                    error!("Error creating Stripe session: {} - status: {}", message, status.as_str());
                    Err(AppError::PaymentProvider(message))
                }
            },
            Err(e) => {
                error!("Error creating Stripe session: {}", e);
                Err(AppError::PaymentProvider(e.to_string()))
            }
        }
    }

    fn session_form(&self, request: &CheckoutRequest) -> Result<Vec<(String, String)>, AppError> {
        let mut form = vec![
            ("mode".to_string(), "payment".to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            ("billing_address_collection".to_string(), "required".to_string()),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
            ("metadata[userId]".to_string(), request.user_id.to_string()),
            ("metadata[courseIds]".to_string(), request.course_ids_metadata()),
        ];

        for (i, item) in request.items.iter().enumerate() {
            let prefix = format!("line_items[{}]", i);
            form.push((format!("{}[price_data][currency]", prefix), self.currency.clone()));
            form.push((format!("{}[price_data][product_data][name]", prefix), item.name.clone()));
            form.push((format!("{}[price_data][unit_amount]", prefix), item.unit_amount()?.to_string()));
            form.push((format!("{}[quantity]", prefix), item.quantity.to_string()));
        }

        Ok(form)
    }
}
