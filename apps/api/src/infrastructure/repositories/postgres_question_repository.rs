use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{QuestionRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of QuestionRepository
///
/// Uses runtime-checked queries (`query_as` + `bind`).
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new PostgresQuestionRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds an ILIKE pattern matching `term` anywhere, with `%`, `_` and `\`
/// in the term taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_excluding(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id <> ALL($1)
              AND ($2::INTEGER IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        let created = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "question",
                id,
            });
        }

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
