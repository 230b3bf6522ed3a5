use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::question::{NewQuestion, Question};

/// Repository trait for trivia questions
///
/// Every listing method returns questions ordered by ascending id so that
/// pagination over the result is deterministic.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn find_all(&self) -> RepositoryResult<Vec<Question>>;

    /// Find a question by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>>;

    /// All questions in a category
    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>>;

    /// Questions not in `exclude`, optionally restricted to one category
    async fn find_excluding(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>>;

    /// Insert a question and return the stored record
    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question by ID
    ///
    /// Returns `RepositoryError::NotFound` if no row was removed.
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Total number of questions
    async fn count(&self) -> RepositoryResult<i64>;
}
