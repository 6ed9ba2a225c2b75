use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub quiz_id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub question_id: i64,
    pub quiz_id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuizQuestion {
    pub course_id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestionUpdate {
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub option_id: i64,
    pub question_id: i64,
    pub option_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuizOption {
    pub question_id: i64,
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizOptionUpdate {
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserQuizScore {
    pub user_quiz_score_id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub last_score: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuizScore {
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizScoreUpdate {
    pub score: i32,
}
