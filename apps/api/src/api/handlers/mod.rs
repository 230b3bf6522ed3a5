pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use serde::Deserialize;

use crate::api::deserializers::lenient_int;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;

/// `?page=N` on list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_param(self.page)
    }
}

/// Loads every category, failing with 404 when there are none
pub(crate) async fn load_categories(state: &AppState) -> Result<Vec<Category>, ApiError> {
    let categories = state
        .categories
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load categories: {}", e)))?;

    if categories.is_empty() {
        return Err(ApiError::not_found("No categories stored"));
    }

    Ok(categories)
}
