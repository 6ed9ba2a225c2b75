use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EnrolledCourse {
    pub enrollment_id: i64,
    pub course_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentStatus {
    pub enrolled: bool,
}
