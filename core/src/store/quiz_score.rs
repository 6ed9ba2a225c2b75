use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::{NewQuizScore, UserQuizScore};
use crate::store::StoreError;

#[derive(Clone, Debug)]
pub struct QuizScoreStore {
    db_pool: Pool,
}

impl QuizScoreStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    pub async fn create(&self, score: &NewQuizScore) -> Result<i64, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_one(
            "INSERT INTO user_quiz_scores (user_id, quiz_id, last_score) VALUES ($1, $2, $3) RETURNING user_quiz_score_id",
            &[&score.user_id, &score.quiz_id, &score.score],
        ).await?;

        Ok(row.try_get(0)?)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<UserQuizScore>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT user_quiz_score_id, user_id, quiz_id, last_score FROM user_quiz_scores
             WHERE user_id = $1 ORDER BY user_quiz_score_id",
            &[&user_id],
        ).await?;

        rows.iter().map(user_quiz_score).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn update(&self, user_quiz_score_id: i64, score: i32) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let updated = client.execute(
            "UPDATE user_quiz_scores SET last_score = $1 WHERE user_quiz_score_id = $2",
            &[&score, &user_quiz_score_id],
        ).await?;

        Ok(updated)
    }

    pub async fn delete(&self, user_quiz_score_id: i64) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let deleted = client.execute(
            "DELETE FROM user_quiz_scores WHERE user_quiz_score_id = $1",
            &[&user_quiz_score_id],
        ).await?;

        Ok(deleted)
    }
}

fn user_quiz_score(row: &Row) -> Result<UserQuizScore, tokio_postgres::Error> {
    Ok(UserQuizScore {
        user_quiz_score_id: row.try_get("user_quiz_score_id")?,
        user_id: row.try_get("user_id")?,
        quiz_id: row.try_get("quiz_id")?,
        last_score: row.try_get("last_score")?,
    })
}
