use crate::error::AppError;
use crate::models::{EnrolledCourse, EnrollmentStatus};
use crate::store::EnrollmentStore;

#[derive(Clone, Debug)]
pub struct ListEnrollments {
    enrollment_store: EnrollmentStore,
}

impl ListEnrollments {
    pub fn new(enrollment_store: EnrollmentStore) -> Self {
        Self { enrollment_store }
    }

    pub async fn for_user(&self, user_id: i64) -> Result<Vec<EnrolledCourse>, AppError> {
        Ok(self.enrollment_store.list_by_user(user_id).await?)
    }

    pub async fn status(&self, user_id: i64, course_id: i64) -> Result<EnrollmentStatus, AppError> {
        let enrolled = self.enrollment_store.is_enrolled(user_id, course_id).await?;
        Ok(EnrollmentStatus { enrolled })
    }
}
