use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    pub cart_item_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    #[serde(serialize_with = "crate::serializers::decimal::serialize")]
    pub price: Decimal,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub user_id: i64,
    pub course_id: i64,
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl NewCartItem {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quantity < 1 {
            return Err(AppError::Validation("Quantity must be at least 1".to_string()));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::Validation("Price must not be negative".to_string()));
        }
        Ok(())
    }
}
