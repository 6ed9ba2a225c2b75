use actix_web::{get, web, HttpResponse};

use crate::error::AppError;
use crate::usecases::UseCases;

#[get("/users/{user_id}/enrollments")]
pub async fn enrollments_by_user(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.enrollments.for_user(path.into_inner()).await?))
}

#[get("/users/{user_id}/enrollments/{course_id}")]
pub async fn enrollment_status(
    usecases: web::Data<UseCases>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, course_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(usecases.enrollments.status(user_id, course_id).await?))
}
