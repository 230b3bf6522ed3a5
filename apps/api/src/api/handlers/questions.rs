use std::collections::BTreeSet;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use super::{load_categories, PageParams};
use crate::api::deserializers::{optional_int_or_numeric_string, optional_text_or_number};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::category::{category_map, CategoryMap};
use crate::domain::question::{NewQuestion, Question};

/// Response for GET /questions
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Response for DELETE /questions/:id
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted_question: i32,
    pub total_questions_now: i64,
}

/// Request body for creating a question
///
/// Every field is required. Fields are optional here so that a missing key
/// can be reported as 422 rather than as a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "optional_int_or_numeric_string")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "optional_int_or_numeric_string")]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    /// Checks that all four fields are present
    ///
    /// Returns the name of the first missing field otherwise. Zero and empty
    /// strings count as present.
    pub fn into_new_question(self) -> Result<NewQuestion, &'static str> {
        Ok(NewQuestion {
            question: self.question.ok_or("question")?,
            answer: self.answer.ok_or("answer")?,
            category: self.category.ok_or("category")?,
            difficulty: self.difficulty.ok_or("difficulty")?,
        })
    }
}

/// Response from question creation; echoes the submitted fields
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    #[serde(flatten)]
    pub question: NewQuestion,
}

/// Request body for searching questions
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(
        rename = "searchTerm",
        default,
        deserialize_with = "optional_text_or_number"
    )]
    pub search_term: Option<String>,
}

/// Response for POST /questions/search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Categories referenced by any match, id -> type
    pub current_category: CategoryMap,
}

/// List all questions, paginated, with every category
///
/// GET /questions
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state
        .questions
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load questions: {}", e)))?;

    let pagination = params.pagination();
    let page = pagination.slice(&questions).to_vec();
    if page.is_empty() {
        return Err(ApiError::not_found(format!(
            "No questions on page {}",
            pagination.page
        )));
    }

    let categories = load_categories(&state).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// Delete a question
///
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::not_found(format!("Invalid question id: {}", e)))?;

    state
        .questions
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Question not found: {}", id)))?;

    state
        .questions
        .delete(id)
        .await
        .map_err(|e| ApiError::not_found(format!("Failed to delete question {}: {}", id, e)))?;

    let total_questions_now = state
        .questions
        .count()
        .await
        .map_err(|e| ApiError::not_found(format!("Failed to count questions: {}", e)))?;

    tracing::info!(question_id = id, total_questions_now, "question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted_question: id,
        total_questions_now,
    }))
}

/// Create a new question
///
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let Json(req) =
        body.map_err(|e| ApiError::unprocessable(format!("Invalid question body: {}", e)))?;

    let new_question = req
        .into_new_question()
        .map_err(|field| ApiError::unprocessable(format!("Missing required field: {}", field)))?;

    let created = state
        .questions
        .create(new_question.clone())
        .await
        .map_err(|e| ApiError::unprocessable(format!("Failed to save question: {}", e)))?;

    tracing::info!(question_id = created.id, category = created.category, "question created");

    Ok(Json(CreateQuestionResponse {
        success: true,
        question: new_question,
    }))
}

/// Search questions by a case-insensitive substring
///
/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) =
        body.map_err(|e| ApiError::bad_request(format!("Invalid search body: {}", e)))?;

    let term = req
        .search_term
        .filter(|term| !term.is_empty())
        .ok_or_else(|| ApiError::bad_request("searchTerm is required"))?;

    let matches = state
        .questions
        .search(&term)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Search failed: {}", e)))?;

    if matches.is_empty() {
        return Err(ApiError::not_found(format!("No questions match '{}'", term)));
    }

    let referenced: BTreeSet<i32> = matches.iter().map(|q| q.category).collect();
    let categories = state
        .categories
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load categories: {}", e)))?;

    let page = params.pagination().slice(&matches).to_vec();

    Ok(Json(SearchResponse {
        success: true,
        questions: page,
        total_questions: matches.len(),
        current_category: category_map(
            categories.iter().filter(|c| referenced.contains(&c.id)),
        ),
    }))
}
