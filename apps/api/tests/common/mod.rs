//! Shared fixtures for the API tests
//!
//! `InMemoryStore` implements both repository traits over plain vectors so
//! the real router can be exercised without a database.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use trivia_api::api::{router, AppState};
use trivia_api::domain::repositories::{
    CategoryRepository, QuestionRepository, RepositoryError, RepositoryResult,
};
use trivia_api::domain::{Category, NewQuestion, Question};

#[derive(Default)]
pub struct InMemoryStore {
    categories: Mutex<Vec<Category>>,
    questions: Mutex<Vec<Question>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryStore {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Arc<Self> {
        Arc::new(Self {
            categories: Mutex::new(categories),
            questions: Mutex::new(questions),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        })
    }

    /// Make every create/delete fail as if the database were down
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Make every lookup, search and count fail as if the database were down
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    fn check_writable(&self) -> RepositoryResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }

    fn check_readable(&self) -> RepositoryResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("reads disabled".to_string()));
        }
        Ok(())
    }

    fn select<F>(&self, keep: F) -> RepositoryResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        self.check_readable()?;
        let mut selected: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect();
        selected.sort_by_key(|q| q.id);
        Ok(selected)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        self.check_readable()?;
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        self.check_readable()?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        Ok(self.select(|q| q.id == id)?.into_iter().next())
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        self.select(|q| q.category == category_id)
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let term = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&term))
    }

    async fn find_excluding(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>> {
        self.select(|q| {
            !exclude.contains(&q.id) && category_id.map_or(true, |c| q.category == c)
        })
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        self.check_writable()?;
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let created = question.with_id(id);
        questions.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.check_writable()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(RepositoryError::NotFound {
                entity: "question",
                id,
            });
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.check_readable()?;
        Ok(self.questions.lock().unwrap().len() as i64)
    }
}

pub fn standard_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

pub fn question(id: i32, text: &str, answer: &str, category: i32, difficulty: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Eight questions; only ids 2 and 5 mention "title"
pub fn trivia_questions() -> Vec<Question> {
    vec![
        question(1, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        question(
            2,
            "Whose autobiography carries the title 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        question(
            3,
            "Which Dutch graphic artist drew impossible constructions?",
            "Escher",
            2,
            1,
        ),
        question(4, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        question(
            5,
            "Which film took the Title of Best Picture at the 1995 Oscars?",
            "Forrest Gump",
            5,
            3,
        ),
        question(
            6,
            "Which country won the first ever soccer World Cup in 1930?",
            "Uruguay",
            6,
            4,
        ),
        question(7, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        question(8, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ]
}

/// `count` generic questions cycling through the six categories
pub fn numbered_questions(count: i32) -> Vec<Question> {
    (1..=count)
        .map(|id| {
            question(
                id,
                &format!("Numbered question {}", id),
                &format!("Answer {}", id),
                (id - 1) % 6 + 1,
                id % 5 + 1,
            )
        })
        .collect()
}

pub fn app_with(store: Arc<InMemoryStore>) -> Router {
    router(AppState::new(store.clone(), store))
}
