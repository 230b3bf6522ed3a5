// Domain layer module exports
// Entities, pagination and quiz selection, and the repository ports

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod repositories;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{Pagination, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::{QuizPick, QuizScope};
