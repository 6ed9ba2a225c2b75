use actix_web::{post, web, HttpResponse};

use crate::error::AppError;
use crate::models::CheckoutRequest;
use crate::usecases::UseCases;

#[post("/create-checkout-session")]
pub async fn create_checkout_session(
    usecases: web::Data<UseCases>,
    payload: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let created = usecases.create_checkout_session.execute(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(created))
}
