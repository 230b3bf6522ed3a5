use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{load_categories, PageParams};
use crate::api::deserializers::lenient_int;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::category::{category_map, CategoryMap};
use crate::domain::question::Question;

/// Query parameters for listing categories
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    /// Restricts the result to one category; `0` means no filter
    #[serde(default, deserialize_with = "lenient_int")]
    pub category_id: Option<i64>,
}

/// Response for GET /categories
///
/// The key changes with the request: `categories` for the full listing,
/// `category` when filtered by `category_id`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CategoriesResponse {
    All {
        success: bool,
        categories: CategoryMap,
    },
    Single {
        success: bool,
        category: CategoryMap,
    },
}

/// Response for GET /categories/:id/questions
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// List all categories as an id -> type mapping
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = load_categories(&state).await?;

    match params.category_id.filter(|id| *id != 0) {
        Some(id) => {
            let category = category_map(categories.iter().filter(|c| i64::from(c.id) == id));
            if category.is_empty() {
                return Err(ApiError::not_found(format!("Category not found: {}", id)));
            }
            Ok(Json(CategoriesResponse::Single {
                success: true,
                category,
            }))
        }
        None => Ok(Json(CategoriesResponse::All {
            success: true,
            categories: category_map(&categories),
        })),
    }
}

/// List the questions of one category, paginated
///
/// GET /categories/:id/questions
pub async fn list_category_questions(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) =
        path.map_err(|e| ApiError::not_found(format!("Invalid category id: {}", e)))?;

    let category = state
        .categories
        .find_by_id(category_id)
        .await
        .map_err(|e| ApiError::not_found(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Category not found: {}", category_id)))?;

    let questions = state
        .questions
        .find_by_category(category_id)
        .await
        .map_err(|e| ApiError::not_found(format!("Failed to load questions: {}", e)))?;

    let page = params.pagination().slice(&questions).to_vec();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}
