use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tracing::info;

use crate::models::EnrolledCourse;
use crate::store::{EnrollmentWriter, StoreError};

#[derive(Clone, Debug)]
pub struct EnrollmentStore {
    db_pool: Pool,
}

impl EnrollmentStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<EnrolledCourse>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT e.enrollment_id, e.course_id, c.title, e.created_at
             FROM enrollments e
             JOIN courses c ON c.course_id = e.course_id
             WHERE e.user_id = $1
             ORDER BY e.created_at, e.enrollment_id",
            &[&user_id],
        ).await?;

        rows.iter().map(enrolled_course).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn is_enrolled(&self, user_id: i64, course_id: i64) -> Result<bool, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_one(
            "SELECT EXISTS (SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)",
            &[&user_id, &course_id],
        ).await?;

        Ok(row.try_get(0)?)
    }
}

#[async_trait]
impl EnrollmentWriter for EnrollmentStore {
    async fn enroll(&self, user_id: i64, course_id: i64) -> Result<(), StoreError> {
        let client = self.db_pool.get().await?;

        let inserted = client.execute(
            "INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2)",
            &[&user_id, &course_id],
        ).await?;

        if inserted != 1 {
            return Err(StoreError::RowCount { expected: 1, actual: inserted });
        }

        info!("User {} enrolled in course {}", user_id, course_id);
        Ok(())
    }
}

fn enrolled_course(row: &Row) -> Result<EnrolledCourse, tokio_postgres::Error> {
    Ok(EnrolledCourse {
        enrollment_id: row.try_get("enrollment_id")?,
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        created_at: row.try_get("created_at")?,
    })
}
