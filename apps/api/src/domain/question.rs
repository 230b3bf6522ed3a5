use serde::{Deserialize, Serialize};

/// A stored trivia question
///
/// This is also the formatted record returned by every endpoint that lists
/// questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id. Not checked against the categories table.
    pub category: i32,
    pub difficulty: i32,
}

/// Fields required to create a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attaches a store-generated id
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
