//! Tag entity.

use chrono::{DateTime, Utc};

/// A tag with a unique, case-sensitive name.
///
/// Tags are created lazily the first time an article uses them and are never
/// removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}
