use tracing::info;

use crate::error::AppError;
use crate::models::{CourseReview, InstructorReview, NewReview, ReviewCreated, ReviewUpdate};
use crate::store::{NewReviewOutcome, ReviewStore};

#[derive(Clone, Debug)]
pub struct ManageReviews {
    review_store: ReviewStore,
}

impl ManageReviews {
    pub fn new(review_store: ReviewStore) -> Self {
        Self { review_store }
    }

    pub async fn create(&self, review: NewReview) -> Result<ReviewCreated, AppError> {
        review.validate()?;

        match self.review_store.create(&review).await? {
            NewReviewOutcome::AlreadyReviewed => {
                Err(AppError::Validation("You can only submit one review per course.".to_string()))
            }
            NewReviewOutcome::Created { review_id, average_rating } => {
                info!("Course {} rated {} by user {}, average now {}", review.course_id, review.rating, review.user_id, average_rating);
                Ok(ReviewCreated {
                    message: "Review created and course rating updated successfully".to_string(),
                    review_id,
                    new_average_rating: average_rating,
                })
            }
        }
    }

    pub async fn by_course(&self, course_id: i64) -> Result<Vec<CourseReview>, AppError> {
        Ok(self.review_store.list_by_course(course_id).await?)
    }

    pub async fn by_course_and_user(&self, course_id: i64, user_id: i64) -> Result<Vec<CourseReview>, AppError> {
        Ok(self.review_store.list_by_course_and_user(course_id, user_id).await?)
    }

    pub async fn by_course_and_instructor(
        &self,
        course_id: i64,
        instructor_id: i64,
    ) -> Result<Vec<InstructorReview>, AppError> {
        Ok(self.review_store.list_by_course_and_instructor(course_id, instructor_id).await?)
    }

    pub async fn update(&self, review_id: i64, update: ReviewUpdate) -> Result<(), AppError> {
        update.validate()?;

        self.review_store
            .update(review_id, &update)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Review"))
    }

    pub async fn delete(&self, review_id: i64) -> Result<(), AppError> {
        self.review_store
            .delete(review_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Review"))
    }
}
