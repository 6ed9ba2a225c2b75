use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct CourseReview {
    pub review_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructorReview {
    pub review_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub user_id: i64,
    pub course_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewUpdate {
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewCreated {
    pub message: String,
    pub review_id: i64,
    #[serde(rename = "newAverageRating", serialize_with = "crate::serializers::decimal::serialize")]
    pub new_average_rating: Decimal,
}

pub(crate) fn validate_rating(rating: i16) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".to_string()));
    }
    Ok(())
}

impl NewReview {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_rating(self.rating)
    }
}

impl ReviewUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_rating(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_outside_one_to_five_are_rejected() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn created_response_keeps_client_field_name() {
        let body = serde_json::to_value(ReviewCreated {
            message: "ok".to_string(),
            review_id: 4,
            new_average_rating: Decimal::new(450, 2),
        })
        .unwrap();

        assert_eq!(body["newAverageRating"], serde_json::json!(4.5));
    }
}
