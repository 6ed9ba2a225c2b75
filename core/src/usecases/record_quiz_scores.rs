use crate::error::AppError;
use crate::models::{NewQuizScore, QuizScoreUpdate, UserQuizScore};
use crate::store::QuizScoreStore;

#[derive(Clone, Debug)]
pub struct RecordQuizScores {
    score_store: QuizScoreStore,
}

impl RecordQuizScores {
    pub fn new(score_store: QuizScoreStore) -> Self {
        Self { score_store }
    }

    pub async fn record(&self, score: NewQuizScore) -> Result<i64, AppError> {
        Ok(self.score_store.create(&score).await?)
    }

    pub async fn for_user(&self, user_id: i64) -> Result<Vec<UserQuizScore>, AppError> {
        Ok(self.score_store.list_by_user(user_id).await?)
    }

    pub async fn update(&self, user_quiz_score_id: i64, update: QuizScoreUpdate) -> Result<(), AppError> {
        if self.score_store.update(user_quiz_score_id, update.score).await? == 0 {
            return Err(AppError::not_found("User quiz score"));
        }
        Ok(())
    }

    pub async fn delete(&self, user_quiz_score_id: i64) -> Result<(), AppError> {
        if self.score_store.delete(user_quiz_score_id).await? == 0 {
            return Err(AppError::not_found("User quiz score"));
        }
        Ok(())
    }
}
