use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(serialize_with = "crate::serializers::decimal::serialize")]
    pub price: Decimal,
    #[serde(serialize_with = "crate::serializers::decimal::serialize_option")]
    pub discount_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub instructor_id: i64,
    pub level: Option<String>,
    pub language: Option<String>,
    pub status: String,
    #[serde(serialize_with = "crate::serializers::decimal::serialize")]
    pub average_rating: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub instructor_name: Option<String>,
    pub enrollment_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub instructor_id: i64,
    pub level: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseUpdate {
    #[serde(flatten)]
    pub fields: NewCourse,
    pub status: Option<String>,
}

/// Body of requests that must prove course ownership.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructorRef {
    pub instructor_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CourseCreated {
    pub message: String,
    pub course_id: i64,
    pub quiz_id: i64,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Course title is required".to_string()));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::Validation("Course price must not be negative".to_string()));
        }
        if let Some(discount) = self.discount_price {
            if discount.is_sign_negative() || discount > self.price {
                return Err(AppError::Validation(
                    "Discount price must be between zero and the course price".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn quiz_title(&self) -> String {
        format!("{} Quiz", self.title)
    }

    pub fn quiz_description(&self) -> String {
        format!("This is the quiz for the {} course.", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_course(price: i64, discount: Option<i64>) -> NewCourse {
        NewCourse {
            title: "Async Rust".to_string(),
            description: None,
            price: Decimal::from(price),
            discount_price: discount.map(Decimal::from),
            image_url: None,
            category_id: Some(2),
            instructor_id: 11,
            level: None,
            language: None,
        }
    }

    #[test]
    fn quiz_is_named_after_course() {
        let course = new_course(100, None);

        assert_eq!(course.quiz_title(), "Async Rust Quiz");
        assert_eq!(course.quiz_description(), "This is the quiz for the Async Rust course.");
    }

    #[test]
    fn discount_must_not_exceed_price() {
        assert!(new_course(100, Some(80)).validate().is_ok());
        assert!(new_course(100, Some(120)).validate().is_err());
        assert!(new_course(-5, None).validate().is_err());
    }

    #[test]
    fn update_body_flattens_course_fields() {
        let update: CourseUpdate = serde_json::from_str(
            r#"{"title": "Async Rust", "price": 10, "instructor_id": 11, "status": "published"}"#,
        )
        .unwrap();

        assert_eq!(update.fields.instructor_id, 11);
        assert_eq!(update.status.as_deref(), Some("published"));
    }
}
