use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub user_id: i64,
    pub course_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutSessionCreated {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl CheckoutItem {
    /// Price in the currency's minor unit, rounded half away from zero.
    pub fn unit_amount(&self) -> Result<i64, AppError> {
        self.price
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|minor| minor.to_i64())
            .ok_or_else(|| AppError::Validation(format!("Price out of range for {}", self.name)))
    }
}

impl CheckoutRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.items.is_empty() {
            return Err(AppError::Validation("Checkout requires at least one item".to_string()));
        }

        if self.course_ids.is_empty() {
            return Err(AppError::Validation("Checkout requires at least one course".to_string()));
        }

        for item in &self.items {
            if item.quantity == 0 {
                return Err(AppError::Validation(format!("Quantity for {} must be at least 1", item.name)));
            }
            if item.price.is_sign_negative() {
                return Err(AppError::Validation(format!("Price for {} must not be negative", item.name)));
            }
            item.unit_amount()?;
        }

        Ok(())
    }

    pub fn course_ids_metadata(&self) -> String {
        self.course_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: Decimal, quantity: u32) -> CheckoutItem {
        CheckoutItem { name: "Rust 101".to_string(), price, quantity }
    }

    #[test]
    fn unit_amount_rounds_half_up() {
        assert_eq!(item(Decimal::new(49999, 2), 1).unit_amount().unwrap(), 49999);
        assert_eq!(item(Decimal::new(10005, 3), 1).unit_amount().unwrap(), 1001);
        assert_eq!(item(Decimal::new(10004, 3), 1).unit_amount().unwrap(), 1000);
        assert_eq!(item(Decimal::from(12), 1).unit_amount().unwrap(), 1200);
    }

    #[test]
    fn oversized_price_is_a_validation_error() {
        assert!(matches!(item(Decimal::MAX, 1).unit_amount(), Err(AppError::Validation(_))));

        let request: CheckoutRequest = serde_json::from_str(
            r#"{"items": [{"name": "Rust 101", "price": "79228162514264337593543950335", "quantity": 1}], "userId": 7, "courseIds": [3]}"#,
        )
        .unwrap();

        assert!(matches!(request.validate(), Err(AppError::Validation(m)) if m == "Price out of range for Rust 101"));
    }

    #[test]
    fn request_decodes_camel_case_body() {
        let request: CheckoutRequest = serde_json::from_str(
            r#"{"items": [{"name": "Rust 101", "price": "499.50", "quantity": 1}], "userId": 7, "courseIds": [3, 5]}"#,
        )
        .unwrap();

        assert_eq!(request.user_id, 7);
        assert_eq!(request.course_ids_metadata(), "3,5");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validation_rejects_empty_and_bad_lines() {
        let mut request = CheckoutRequest { items: vec![], user_id: 7, course_ids: vec![3] };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));

        request.items = vec![item(Decimal::from(10), 0)];
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));

        request.items = vec![item(Decimal::from(-1), 1)];
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));

        request.items = vec![item(Decimal::from(10), 1)];
        request.course_ids.clear();
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }
}
