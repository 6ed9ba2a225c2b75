use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::models::NewCartItem;
use crate::usecases::UseCases;

#[post("/cart")]
pub async fn add_to_cart(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewCartItem>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Created().json(usecases.cart.add(payload.into_inner()).await?))
}

#[get("/users/{user_id}/cart")]
pub async fn get_cart(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.cart.list(path.into_inner()).await?))
}

#[delete("/users/{user_id}/cart")]
pub async fn clear_cart(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let removed = usecases.cart.clear(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Cart cleared", "removed": removed})))
}

#[delete("/cart/{cart_item_id}")]
pub async fn remove_from_cart(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    usecases.cart.remove(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Item removed from cart"})))
}
