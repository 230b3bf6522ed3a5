use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A trivia category
///
/// Categories are seeded by migrations and are read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    /// Display name, stored in the `type` column
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Mapping of category id to display name, ordered by id
///
/// Serializes as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Builds an id -> type mapping from a list of categories
pub fn category_map<'a>(categories: impl IntoIterator<Item = &'a Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
