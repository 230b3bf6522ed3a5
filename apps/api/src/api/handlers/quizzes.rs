use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::deserializers::int_or_numeric_string;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::quiz::{QuizPick, QuizScope};

/// Category the quiz is played in
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// `0` plays across all categories
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id: i32,
}

/// Request body for the next quiz question
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Response for POST /quizzes
///
/// `question` is `false` once every eligible question has been asked.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizPick,
}

/// Pick a random question the player has not seen yet
///
/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::not_found(format!("Invalid quiz body: {}", e)))?;
    let scope = QuizScope::from_category_id(req.quiz_category.id);

    let candidates = state
        .questions
        .find_excluding(&req.previous_questions, scope.category())
        .await
        .map_err(|e| ApiError::not_found(format!("Failed to load quiz questions: {}", e)))?;

    let question = {
        let mut rng = rand::thread_rng();
        QuizPick::choose(&candidates, &mut rng)
    };

    if question == QuizPick::Exhausted {
        tracing::debug!(?scope, asked = req.previous_questions.len(), "quiz exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
