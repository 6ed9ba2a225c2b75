use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::models::{NewQuizScore, QuizScoreUpdate};
use crate::usecases::UseCases;

#[post("/user-quiz-scores")]
pub async fn record_score(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewQuizScore>,
) -> Result<HttpResponse, AppError> {
    let id = usecases.quiz_scores.record(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"user_quiz_score_id": id})))
}

#[get("/users/{user_id}/quiz-scores")]
pub async fn scores_by_user(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quiz_scores.for_user(path.into_inner()).await?))
}

#[put("/user-quiz-scores/{score_id}")]
pub async fn update_score(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<QuizScoreUpdate>,
) -> Result<HttpResponse, AppError> {
    usecases.quiz_scores.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Score updated successfully"})))
}

#[delete("/user-quiz-scores/{score_id}")]
pub async fn delete_score(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    usecases.quiz_scores.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Score deleted successfully"})))
}
