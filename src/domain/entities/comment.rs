//! Comment entity attached to an article.

use chrono::{DateTime, Utc};

/// A reader comment on an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    /// Title of the parent article, joined for listings.
    pub article_title: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: i64,
        article_id: i64,
        article_title: String,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            article_id,
            article_title,
            author,
            text,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Input data for inserting a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub article_id: i64,
    pub author: String,
    pub text: String,
}

/// Full replacement of a comment's editable columns.
///
/// A comment may be moved to another article.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateComment {
    pub article_id: i64,
    pub author: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let now = Utc::now();
        let comment = Comment::new(
            3,
            1,
            "Parent article".to_string(),
            "carol".to_string(),
            "Nice post".to_string(),
            now,
        );

        assert_eq!(comment.article_id, 1);
        assert_eq!(comment.updated_at, now);
        assert_eq!(comment.article_title, "Parent article");
    }
}
