use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{PostgresCategoryRepository, PostgresQuestionRepository};

/// Shared state handed to every handler
///
/// Holds the injected stores; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub questions: Arc<dyn QuestionRepository>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresQuestionRepository::new(pool)),
        )
    }
}
