use crate::error::AppError;
use crate::models::{
    NewQuizOption, NewQuizQuestion, Quiz, QuizOption, QuizOptionUpdate, QuizQuestion, QuizQuestionUpdate,
};
use crate::store::QuizStore;

#[derive(Clone, Debug)]
pub struct ManageQuizzes {
    quiz_store: QuizStore,
}

fn require_text(text: &str, what: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{} text is required", what)));
    }
    Ok(())
}

fn expect_one(affected: u64, what: &str) -> Result<(), AppError> {
    if affected == 0 {
        return Err(AppError::not_found(what));
    }
    Ok(())
}

impl ManageQuizzes {
    pub fn new(quiz_store: QuizStore) -> Self {
        Self { quiz_store }
    }

    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, AppError> {
        Ok(self.quiz_store.list_quizzes().await?)
    }

    pub async fn get_quiz(&self, quiz_id: i64) -> Result<Quiz, AppError> {
        self.quiz_store.get_quiz(quiz_id).await?.ok_or_else(|| AppError::not_found("Quiz"))
    }

    pub async fn create_question(&self, question: NewQuizQuestion) -> Result<i64, AppError> {
        require_text(&question.question_text, "Question")?;

        self.quiz_store
            .create_question(&question)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No quiz found for course {}", question.course_id)))
    }

    pub async fn questions_for_course(&self, course_id: i64) -> Result<Vec<QuizQuestion>, AppError> {
        Ok(self.quiz_store.list_questions_by_course(course_id).await?)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<QuizQuestion, AppError> {
        self.quiz_store.get_question(question_id).await?.ok_or_else(|| AppError::not_found("Question"))
    }

    pub async fn update_question(&self, question_id: i64, update: QuizQuestionUpdate) -> Result<(), AppError> {
        require_text(&update.question_text, "Question")?;
        expect_one(self.quiz_store.update_question(question_id, &update).await?, "Question")
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<(), AppError> {
        expect_one(self.quiz_store.delete_question(question_id).await?, "Question")
    }

    pub async fn create_option(&self, option: NewQuizOption) -> Result<i64, AppError> {
        require_text(&option.option_text, "Option")?;
        Ok(self.quiz_store.create_option(&option).await?)
    }

    pub async fn options_for_question(&self, question_id: i64) -> Result<Vec<QuizOption>, AppError> {
        Ok(self.quiz_store.list_options(question_id).await?)
    }

    pub async fn get_option(&self, option_id: i64) -> Result<QuizOption, AppError> {
        self.quiz_store.get_option(option_id).await?.ok_or_else(|| AppError::not_found("Option"))
    }

    pub async fn update_option(&self, option_id: i64, update: QuizOptionUpdate) -> Result<(), AppError> {
        require_text(&update.option_text, "Option")?;
        expect_one(self.quiz_store.update_option(option_id, &update).await?, "Option")
    }

    pub async fn delete_option(&self, option_id: i64) -> Result<(), AppError> {
        expect_one(self.quiz_store.delete_option(option_id).await?, "Option")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(require_text("  ", "Question"), Err(AppError::Validation(m)) if m == "Question text is required"));
        assert!(require_text("What is a lifetime?", "Question").is_ok());
    }

    #[test]
    fn zero_affected_rows_is_not_found() {
        assert!(matches!(expect_one(0, "Option"), Err(AppError::NotFound(m)) if m == "Option not found"));
        assert!(expect_one(1, "Option").is_ok());
    }
}
