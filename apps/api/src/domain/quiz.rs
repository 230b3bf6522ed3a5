use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};

use super::question::Question;

/// Category filter for quiz play
///
/// The client sends category id `0` to play across every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AnyCategory,
    Category(i32),
}

impl QuizScope {
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 {
            QuizScope::AnyCategory
        } else {
            QuizScope::Category(id)
        }
    }

    /// The category to filter on, if any
    pub fn category(&self) -> Option<i32> {
        match self {
            QuizScope::AnyCategory => None,
            QuizScope::Category(id) => Some(*id),
        }
    }
}

/// Outcome of picking the next quiz question
///
/// Serializes as the question record, or as `false` when every candidate
/// has already been asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPick {
    Next(Question),
    Exhausted,
}

impl QuizPick {
    /// Chooses one candidate uniformly at random
    pub fn choose<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Self {
        match candidates.choose(rng) {
            Some(question) => QuizPick::Next(question.clone()),
            None => QuizPick::Exhausted,
        }
    }
}

impl Serialize for QuizPick {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuizPick::Next(question) => question.serialize(serializer),
            QuizPick::Exhausted => serializer.serialize_bool(false),
        }
    }
}
