use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::{
    NewQuizOption, NewQuizQuestion, Quiz, QuizOption, QuizOptionUpdate, QuizQuestion, QuizQuestionUpdate,
};
use crate::store::StoreError;

/// Quizzes together with their questions and answer options.
#[derive(Clone, Debug)]
pub struct QuizStore {
    db_pool: Pool,
}

impl QuizStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT quiz_id, course_id, title, description FROM quizzes ORDER BY quiz_id",
            &[],
        ).await?;

        rows.iter().map(quiz).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn get_quiz(&self, quiz_id: i64) -> Result<Option<Quiz>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            "SELECT quiz_id, course_id, title, description FROM quizzes WHERE quiz_id = $1",
            &[&quiz_id],
        ).await?;

        row.as_ref().map(quiz).transpose().map_err(StoreError::from)
    }

    /// Attaches the question to the quiz of the given course. None when the
    /// course has no quiz.
    pub async fn create_question(&self, question: &NewQuizQuestion) -> Result<Option<i64>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            "INSERT INTO quiz_questions (quiz_id, question_text)
             SELECT quiz_id, $2::TEXT FROM quizzes WHERE course_id = $1
             ORDER BY quiz_id LIMIT 1
             RETURNING question_id",
            &[&question.course_id, &question.question_text],
        ).await?;

        match row {
            Some(row) => Ok(Some(row.try_get(0)?)),
            None => Ok(None),
        }
    }

    pub async fn list_questions_by_course(&self, course_id: i64) -> Result<Vec<QuizQuestion>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT qq.question_id, qq.quiz_id, qq.question_text
             FROM quiz_questions qq
             JOIN quizzes q ON qq.quiz_id = q.quiz_id
             WHERE q.course_id = $1
             ORDER BY qq.question_id",
            &[&course_id],
        ).await?;

        rows.iter().map(question).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<QuizQuestion>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            "SELECT question_id, quiz_id, question_text FROM quiz_questions WHERE question_id = $1",
            &[&question_id],
        ).await?;

        row.as_ref().map(question).transpose().map_err(StoreError::from)
    }

    pub async fn update_question(&self, question_id: i64, update: &QuizQuestionUpdate) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let updated = client.execute(
            "UPDATE quiz_questions SET question_text = $1 WHERE question_id = $2",
            &[&update.question_text, &question_id],
        ).await?;

        Ok(updated)
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let deleted = client.execute("DELETE FROM quiz_questions WHERE question_id = $1", &[&question_id]).await?;

        Ok(deleted)
    }

    pub async fn create_option(&self, option: &NewQuizOption) -> Result<i64, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_one(
            "INSERT INTO quiz_options (question_id, option_text, is_correct) VALUES ($1, $2, $3) RETURNING option_id",
            &[&option.question_id, &option.option_text, &option.is_correct],
        ).await?;

        Ok(row.try_get(0)?)
    }

    pub async fn list_options(&self, question_id: i64) -> Result<Vec<QuizOption>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            "SELECT option_id, question_id, option_text, is_correct FROM quiz_options
             WHERE question_id = $1 ORDER BY option_id",
            &[&question_id],
        ).await?;

        rows.iter().map(option).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    pub async fn get_option(&self, option_id: i64) -> Result<Option<QuizOption>, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_opt(
            "SELECT option_id, question_id, option_text, is_correct FROM quiz_options WHERE option_id = $1",
            &[&option_id],
        ).await?;

        row.as_ref().map(option).transpose().map_err(StoreError::from)
    }

    pub async fn update_option(&self, option_id: i64, update: &QuizOptionUpdate) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let updated = client.execute(
            "UPDATE quiz_options SET option_text = $1, is_correct = $2 WHERE option_id = $3",
            &[&update.option_text, &update.is_correct, &option_id],
        ).await?;

        Ok(updated)
    }

    pub async fn delete_option(&self, option_id: i64) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let deleted = client.execute("DELETE FROM quiz_options WHERE option_id = $1", &[&option_id]).await?;

        Ok(deleted)
    }
}

fn quiz(row: &Row) -> Result<Quiz, tokio_postgres::Error> {
    Ok(Quiz {
        quiz_id: row.try_get("quiz_id")?,
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
    })
}

fn question(row: &Row) -> Result<QuizQuestion, tokio_postgres::Error> {
    Ok(QuizQuestion {
        question_id: row.try_get("question_id")?,
        quiz_id: row.try_get("quiz_id")?,
        question_text: row.try_get("question_text")?,
    })
}

fn option(row: &Row) -> Result<QuizOption, tokio_postgres::Error> {
    Ok(QuizOption {
        option_id: row.try_get("option_id")?,
        question_id: row.try_get("question_id")?,
        option_text: row.try_get("option_text")?,
        is_correct: row.try_get("is_correct")?,
    })
}
