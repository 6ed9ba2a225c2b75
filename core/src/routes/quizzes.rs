use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::models::{NewQuizOption, NewQuizQuestion, QuizOptionUpdate, QuizQuestionUpdate};
use crate::usecases::UseCases;

#[get("/quizzes")]
pub async fn list_quizzes(usecases: web::Data<UseCases>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.list_quizzes().await?))
}

#[get("/quizzes/{quiz_id}")]
pub async fn get_quiz(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.get_quiz(path.into_inner()).await?))
}

#[post("/quiz-questions")]
pub async fn create_question(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewQuizQuestion>,
) -> Result<HttpResponse, AppError> {
    let question_id = usecases.quizzes.create_question(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"question_id": question_id})))
}

#[get("/courses/{course_id}/quiz-questions")]
pub async fn questions_by_course(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.questions_for_course(path.into_inner()).await?))
}

#[get("/quiz-questions/{question_id}")]
pub async fn get_question(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.get_question(path.into_inner()).await?))
}

#[put("/quiz-questions/{question_id}")]
pub async fn update_question(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<QuizQuestionUpdate>,
) -> Result<HttpResponse, AppError> {
    usecases.quizzes.update_question(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Question updated successfully"})))
}

#[delete("/quiz-questions/{question_id}")]
pub async fn delete_question(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    usecases.quizzes.delete_question(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Question deleted successfully"})))
}

#[post("/quiz-options")]
pub async fn create_option(
    usecases: web::Data<UseCases>,
    payload: web::Json<NewQuizOption>,
) -> Result<HttpResponse, AppError> {
    let option_id = usecases.quizzes.create_option(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"option_id": option_id})))
}

#[get("/quiz-questions/{question_id}/options")]
pub async fn options_by_question(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.options_for_question(path.into_inner()).await?))
}

#[get("/quiz-options/{option_id}")]
pub async fn get_option(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(usecases.quizzes.get_option(path.into_inner()).await?))
}

#[put("/quiz-options/{option_id}")]
pub async fn update_option(
    usecases: web::Data<UseCases>,
    path: web::Path<i64>,
    payload: web::Json<QuizOptionUpdate>,
) -> Result<HttpResponse, AppError> {
    usecases.quizzes.update_option(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Option updated successfully"})))
}

#[delete("/quiz-options/{option_id}")]
pub async fn delete_option(usecases: web::Data<UseCases>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
    usecases.quizzes.delete_option(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Option deleted successfully"})))
}
