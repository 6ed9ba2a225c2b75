mod cart;
mod checkout;
mod courses;
mod enrollments;
mod quiz_scores;
mod quizzes;
mod reviews;
mod webhook;

use actix_web::{error, web, HttpRequest};

use crate::error::AppError;

pub use checkout::create_checkout_session;
pub use webhook::stripe_webhook;

/// Malformed JSON bodies answer with the same `{"message": ...}` shape as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

/// Non-numeric ids in the path are a client error, not a missing route.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::Validation(format!("Invalid path parameter: {}", err)).into()
    })
}

/// REST resources mounted under `/api`.
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(courses::create_course)
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(courses::update_course)
        .service(courses::delete_course)
        .service(courses::courses_by_category)
        .service(courses::courses_by_instructor)
        .service(reviews::create_review)
        .service(reviews::reviews_by_course)
        .service(reviews::review_by_course_and_user)
        .service(reviews::reviews_by_instructor_course)
        .service(reviews::update_review)
        .service(reviews::delete_review)
        .service(quizzes::list_quizzes)
        .service(quizzes::get_quiz)
        .service(quizzes::create_question)
        .service(quizzes::questions_by_course)
        .service(quizzes::get_question)
        .service(quizzes::update_question)
        .service(quizzes::delete_question)
        .service(quizzes::create_option)
        .service(quizzes::options_by_question)
        .service(quizzes::get_option)
        .service(quizzes::update_option)
        .service(quizzes::delete_option)
        .service(quiz_scores::record_score)
        .service(quiz_scores::scores_by_user)
        .service(quiz_scores::update_score)
        .service(quiz_scores::delete_score)
        .service(cart::add_to_cart)
        .service(cart::get_cart)
        .service(cart::clear_cart)
        .service(cart::remove_from_cart)
        .service(enrollments::enrollments_by_user)
        .service(enrollments::enrollment_status);
}
