use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tracing::info;

use crate::models::{Course, CourseDetail, CourseUpdate, NewCourse};
use crate::store::StoreError;

#[derive(Clone, Debug)]
pub struct CourseStore {
    db_pool: Pool,
}

const COURSE_COLUMNS: &str = "c.course_id, c.title, c.description, c.price, c.discount_price, c.image_url,
    c.category_id, c.instructor_id, c.level, c.language, c.status, c.average_rating, c.created_at, c.updated_at";

impl CourseStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    /// Inserts the course and its quiz together. Returns (course_id, quiz_id).
    pub async fn create_with_quiz(&self, course: &NewCourse) -> Result<(i64, i64), StoreError> {
        let mut client = self.db_pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx.query_one(
            "INSERT INTO courses (title, description, price, discount_price, image_url, category_id, instructor_id, level, language)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING course_id",
            &[
                &course.title,
                &course.description,
                &course.price,
                &course.discount_price,
                &course.image_url,
                &course.category_id,
                &course.instructor_id,
                &course.level,
                &course.language,
            ],
        ).await?;
        let course_id: i64 = row.try_get(0)?;

        let row = tx.query_one(
            "INSERT INTO quizzes (course_id, title, description) VALUES ($1, $2, $3) RETURNING quiz_id",
            &[&course_id, &course.quiz_title(), &course.quiz_description()],
        ).await?;
        let quiz_id: i64 = row.try_get(0)?;

        tx.commit().await?;
        info!("Created course {} with quiz {}", course_id, quiz_id);

        Ok((course_id, quiz_id))
    }

    pub async fn list_all(&self) -> Result<Vec<Course>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            &format!("SELECT {} FROM courses c ORDER BY c.course_id", COURSE_COLUMNS),
            &[],
        ).await?;

        rows.iter().map(course).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn get_detail(&self, course_id: i64) -> Result<Option<CourseDetail>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            &format!(
                "SELECT {},
                    u.full_name AS instructor_name,
                    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.course_id) AS enrollment_count
                 FROM courses c
                 LEFT JOIN users u ON c.instructor_id = u.user_id
                 WHERE c.course_id = $1",
                COURSE_COLUMNS
            ),
            &[&course_id],
        ).await?;

        match row {
            Some(row) => Ok(Some(CourseDetail {
                course: course(&row)?,
                instructor_name: row.try_get("instructor_name")?,
                enrollment_count: row.try_get("enrollment_count")?,
            })),
            None => Ok(None),
        }
    }

    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Course>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            &format!("SELECT {} FROM courses c WHERE c.category_id = $1 ORDER BY c.course_id", COURSE_COLUMNS),
            &[&category_id],
        ).await?;

        rows.iter().map(course).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<Course>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            &format!("SELECT {} FROM courses c WHERE c.instructor_id = $1 ORDER BY c.course_id", COURSE_COLUMNS),
            &[&instructor_id],
        ).await?;

        rows.iter().map(course).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn instructor_of(&self, course_id: i64) -> Result<Option<i64>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            "SELECT instructor_id FROM courses WHERE course_id = $1",
            &[&course_id],
        ).await?;

        match row {
            Some(row) => Ok(Some(row.try_get(0)?)),
            None => Ok(None),
        }
    }

    pub async fn update(&self, course_id: i64, update: &CourseUpdate) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;
        let fields = &update.fields;

        let updated = client.execute(
            "UPDATE courses SET title = $1, description = $2, price = $3, discount_price = $4, image_url = $5,
                category_id = $6, level = $7, language = $8, status = COALESCE($9, status), updated_at = NOW()
             WHERE course_id = $10",
            &[
                &fields.title,
                &fields.description,
                &fields.price,
                &fields.discount_price,
                &fields.image_url,
                &fields.category_id,
                &fields.level,
                &fields.language,
                &update.status,
                &course_id,
            ],
        ).await?;

        Ok(updated)
    }

    pub async fn delete(&self, course_id: i64) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let deleted = client.execute("DELETE FROM courses WHERE course_id = $1", &[&course_id]).await?;

        Ok(deleted)
    }
}

fn course(row: &Row) -> Result<Course, tokio_postgres::Error> {
    Ok(Course {
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        discount_price: row.try_get("discount_price")?,
        image_url: row.try_get("image_url")?,
        category_id: row.try_get("category_id")?,
        instructor_id: row.try_get("instructor_id")?,
        level: row.try_get("level")?,
        language: row.try_get("language")?,
        status: row.try_get("status")?,
        average_rating: row.try_get("average_rating")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
