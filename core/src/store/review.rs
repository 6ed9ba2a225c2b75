use deadpool_postgres::Pool;
use rust_decimal::Decimal;
use tokio_postgres::Row;

use crate::models::{CourseReview, InstructorReview, NewReview, ReviewUpdate};
use crate::store::StoreError;

#[derive(Clone, Debug)]
pub struct ReviewStore {
    db_pool: Pool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewReviewOutcome {
    Created { review_id: i64, average_rating: Decimal },
    AlreadyReviewed,
}

impl ReviewStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    /// Inserts the review and refreshes the course rating in one transaction.
    pub async fn create(&self, review: &NewReview) -> Result<NewReviewOutcome, StoreError> {
        let mut client = self.db_pool.get().await?;
        let tx = client.transaction().await?;

        let existing = tx.query_opt(
            "SELECT review_id FROM reviews WHERE user_id = $1 AND course_id = $2",
            &[&review.user_id, &review.course_id],
        ).await?;
        if existing.is_some() {
            return Ok(NewReviewOutcome::AlreadyReviewed);
        }

        let row = tx.query_one(
            "INSERT INTO reviews (user_id, course_id, rating, comment) VALUES ($1, $2, $3, $4) RETURNING review_id",
            &[&review.user_id, &review.course_id, &review.rating, &review.comment],
        ).await?;
        let review_id: i64 = row.try_get(0)?;

        let average_rating = refresh_average(&tx, review.course_id).await?;
        tx.commit().await?;

        Ok(NewReviewOutcome::Created { review_id, average_rating })
    }

    pub async fn list_by_course(&self, course_id: i64) -> Result<Vec<CourseReview>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT r.review_id, r.user_id, r.rating, r.comment, r.created_at, u.full_name AS user_name
             FROM reviews r
             LEFT JOIN users u ON r.user_id = u.user_id
             WHERE r.course_id = $1
             ORDER BY r.created_at, r.review_id",
            &[&course_id],
        ).await?;

        rows.iter().map(course_review).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn list_by_course_and_user(&self, course_id: i64, user_id: i64) -> Result<Vec<CourseReview>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT r.review_id, r.user_id, r.rating, r.comment, r.created_at, u.full_name AS user_name
             FROM reviews r
             LEFT JOIN users u ON r.user_id = u.user_id
             WHERE r.course_id = $1 AND r.user_id = $2",
            &[&course_id, &user_id],
        ).await?;

        rows.iter().map(course_review).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn list_by_course_and_instructor(
        &self,
        course_id: i64,
        instructor_id: i64,
    ) -> Result<Vec<InstructorReview>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT r.review_id, r.user_id, r.course_id, r.rating, r.comment, r.created_at, c.title
             FROM reviews r
             JOIN courses c ON r.course_id = c.course_id
             WHERE r.course_id = $1 AND c.instructor_id = $2
             ORDER BY r.created_at, r.review_id",
            &[&course_id, &instructor_id],
        ).await?;

        rows.iter().map(instructor_review).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    /// Returns the refreshed course rating, or None when the review does not exist.
    pub async fn update(&self, review_id: i64, update: &ReviewUpdate) -> Result<Option<Decimal>, StoreError> {
        let mut client = self.db_pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx.query_opt(
            "UPDATE reviews SET rating = $1, comment = $2, created_at = NOW() WHERE review_id = $3 RETURNING course_id",
            &[&update.rating, &update.comment, &review_id],
        ).await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let course_id: i64 = row.try_get(0)?;

        let average_rating = refresh_average(&tx, course_id).await?;
        tx.commit().await?;

        Ok(Some(average_rating))
    }

    pub async fn delete(&self, review_id: i64) -> Result<Option<Decimal>, StoreError> {
        let mut client = self.db_pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx.query_opt(
            "DELETE FROM reviews WHERE review_id = $1 RETURNING course_id",
            &[&review_id],
        ).await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let course_id: i64 = row.try_get(0)?;

        let average_rating = refresh_average(&tx, course_id).await?;
        tx.commit().await?;

        Ok(Some(average_rating))
    }
}

async fn refresh_average(
    tx: &deadpool_postgres::Transaction<'_>,
    course_id: i64,
) -> Result<Decimal, tokio_postgres::Error> {
    let row = tx.query_one(
        "SELECT COALESCE(ROUND(AVG(rating), 2), 0) FROM reviews WHERE course_id = $1",
        &[&course_id],
    ).await?;
    let average: Decimal = row.try_get(0)?;

    tx.execute(
        "UPDATE courses SET average_rating = $1 WHERE course_id = $2",
        &[&average, &course_id],
    ).await?;

    Ok(average)
}

fn course_review(row: &Row) -> Result<CourseReview, tokio_postgres::Error> {
    Ok(CourseReview {
        review_id: row.try_get("review_id")?,
        user_id: row.try_get("user_id")?,
        rating: row.try_get("rating")?,
        comment: row.try_get("comment")?,
        created_at: row.try_get("created_at")?,
        user_name: row.try_get("user_name")?,
    })
}

fn instructor_review(row: &Row) -> Result<InstructorReview, tokio_postgres::Error> {
    Ok(InstructorReview {
        review_id: row.try_get("review_id")?,
        user_id: row.try_get("user_id")?,
        course_id: row.try_get("course_id")?,
        rating: row.try_get("rating")?,
        comment: row.try_get("comment")?,
        created_at: row.try_get("created_at")?,
        title: row.try_get("title")?,
    })
}
