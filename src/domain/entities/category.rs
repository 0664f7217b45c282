//! Category entity.

use chrono::{DateTime, Utc};

/// An article category. Articles only reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

/// Input data for creating a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}
