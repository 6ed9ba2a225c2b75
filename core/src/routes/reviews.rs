use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::models::{NewReview, ReviewUpdate};
use crate::usecases::UseCases;

#[post("/reviews")]
pub async fn create_review(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewReview>,
) -> Result<HttpResponse, AppError> {
    let created = usecases.reviews.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/courses/{course_id}/reviews")]
pub async fn reviews_by_course(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.reviews.by_course(path.into_inner()).await?))
}

#[get("/courses/{course_id}/reviews/users/{user_id}")]
pub async fn review_by_course_and_user(
    usecases: web::Data<UseCases>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, user_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(usecases.reviews.by_course_and_user(course_id, user_id).await?))
}

#[get("/instructors/{instructor_id}/courses/{course_id}/reviews")]
pub async fn reviews_by_instructor_course(
    usecases: web::Data<UseCases>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (instructor_id, course_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(usecases.reviews.by_course_and_instructor(course_id, instructor_id).await?))
}

#[put("/reviews/{review_id}")]
pub async fn update_review(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<ReviewUpdate>,
) -> Result<HttpResponse, AppError> {
    usecases.reviews.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Review updated successfully"})))
}

#[delete("/reviews/{review_id}")]
pub async fn delete_review(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    usecases.reviews.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Review deleted successfully"})))
}
