use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{Course, CourseCreated, CourseDetail, CourseUpdate, NewCourse};
use crate::store::CourseStore;

#[derive(Clone, Debug)]
pub struct ManageCourses {
    course_store: CourseStore,
}

impl ManageCourses {
    pub fn new(course_store: CourseStore) -> Self {
        Self { course_store }
    }

    pub async fn create(&self, course: NewCourse) -> Result<CourseCreated, AppError> {
        course.validate()?;
        let (course_id, quiz_id) = self.course_store.create_with_quiz(&course).await?;

        Ok(CourseCreated {
            message: "Course and quiz created successfully".to_string(),
            course_id,
            quiz_id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.course_store.list_all().await?)
    }

    pub async fn get(&self, course_id: i64) -> Result<CourseDetail, AppError> {
        self.course_store
            .get_detail(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course"))
    }

    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Course>, AppError> {
        let courses = self.course_store.list_by_category(category_id).await?;
        if courses.is_empty() {
            return Err(AppError::NotFound("No courses found for this category".to_string()));
        }
        Ok(courses)
    }

    pub async fn by_instructor(&self, instructor_id: i64) -> Result<Vec<Course>, AppError> {
        Ok(self.course_store.list_by_instructor(instructor_id).await?)
    }

    pub async fn update(&self, course_id: i64, update: CourseUpdate) -> Result<(), AppError> {
        update.fields.validate()?;
        self.authorize(course_id, update.fields.instructor_id, "modify").await?;

        if self.course_store.update(course_id, &update).await? == 0 {
            return Err(AppError::not_found("Course"));
        }
        info!("Course {} updated by instructor {}", course_id, update.fields.instructor_id);
        Ok(())
    }

    pub async fn delete(&self, course_id: i64, instructor_id: i64) -> Result<(), AppError> {
        self.authorize(course_id, instructor_id, "delete").await?;

        if self.course_store.delete(course_id).await? == 0 {
            return Err(AppError::not_found("Course"));
        }
        info!("Course {} deleted by instructor {}", course_id, instructor_id);
        Ok(())
    }

    async fn authorize(&self, course_id: i64, instructor_id: i64, action: &str) -> Result<(), AppError> {
        match self.course_store.instructor_of(course_id).await? {
            None => Err(AppError::not_found("Course")),
            Some(owner) if owner != instructor_id => {
                warn!("Instructor {} may not {} course {} owned by {}", instructor_id, action, course_id, owner);
                Err(AppError::Forbidden(format!("You do not have permission to {} this course", action)))
            }
            Some(_) => Ok(()),
        }
    }
}
