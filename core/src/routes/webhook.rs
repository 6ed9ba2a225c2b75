use actix_web::{post, web, HttpRequest, HttpResponse, ResponseError};

use crate::error::AppError;
use crate::usecases::FinalizeCheckout;
use crate::webhook::SIGNATURE_HEADER;

/// Stripe delivers checkout events here. The body is read raw so the
/// signature can be checked against the exact bytes that were signed.
#[post("/webhook")]
pub async fn stripe_webhook(
    finalizer: web::Data<FinalizeCheckout>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let signature = req.headers().get(SIGNATURE_HEADER).and_then(|h| h.to_str().ok());

    match finalizer.execute(&body, signature).await {
        Ok(done) => {
            tracing::info!(
                "Checkout finalized for user {}: {} enrollments, {} cart items removed",
                done.user_id,
                done.course_ids.len(),
                done.cart_items_removed
            );
            HttpResponse::Ok().body("User successfully enrolled in all courses and cart cleared")
        }
        Err(AppError::UnsupportedEvent(_)) => HttpResponse::BadRequest().finish(),
        Err(e @ AppError::Storage(_)) => {
            tracing::error!("Error enrolling user in courses or clearing cart: {}", e);
            HttpResponse::InternalServerError().body("Error enrolling user in courses or clearing cart")
        }
        Err(e) => HttpResponse::build(e.status_code()).body(e.to_string()),
    }
}
