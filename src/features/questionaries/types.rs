use serde::{Deserialize, Serialize};

/// Poll with nested questions and per-question vote counters. Stat fields are
/// only populated by the with-stats endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Questionary {
    pub id: i64,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub total_responses: Option<u64>,
    #[serde(default)]
    pub user_response_id: Option<i64>,
    #[serde(default)]
    pub user_question_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    #[serde(default)]
    pub counter: Option<u64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

/// Payload for creating a questionary; the backend assigns ids.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionaryDraft {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub questions: Vec<QuestionDraft>,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuestionDraft {
    pub question: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VoteRequest {
    pub user_id: i64,
    pub question_id: i64,
    pub questionary_id: i64,
}
