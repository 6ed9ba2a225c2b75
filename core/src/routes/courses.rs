use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::models::{CourseUpdate, InstructorRef, NewCourse};
use crate::usecases::UseCases;

#[post("/courses")]
pub async fn create_course(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewCourse>,
) -> Result<HttpResponse, AppError> {
    let created = usecases.courses.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/courses")]
pub async fn list_courses(usecases: web::Data<UseCases>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.courses.list().await?))
}

#[get("/courses/{course_id}")]
pub async fn get_course(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.courses.get(path.into_inner()).await?))
}

#[put("/courses/{course_id}")]
pub async fn update_course(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<CourseUpdate>,
) -> Result<HttpResponse, AppError> {
    usecases.courses.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Course updated successfully"})))
}

#[delete("/courses/{course_id}")]
pub async fn delete_course(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<InstructorRef>,
) -> Result<HttpResponse, AppError> {
    usecases.courses.delete(path.into_inner(), payload.instructor_id).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Course deleted successfully"})))
}

#[get("/categories/{category_id}/courses")]
pub async fn courses_by_category(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.courses.by_category(path.into_inner()).await?))
}

#[get("/instructors/{instructor_id}/courses")]
pub async fn courses_by_instructor(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.courses.by_instructor(path.into_inner()).await?))
}
