//! Article entity and its write models.

use chrono::{DateTime, Utc};

/// A published article with its category and tag names joined in.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub text: String,
    pub category_id: Option<i64>,
    /// Category name, present when the article is categorized.
    pub category: Option<String>,
    /// Tag names ordered alphabetically.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates an uncategorized, untagged article.
    pub fn new(
        id: i64,
        title: String,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            text,
            category_id: None,
            category: None,
            tags: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Attaches a category reference.
    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category = Some(name.into());
        self
    }

    /// Replaces the joined tag names.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Input data for inserting an article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub text: String,
    pub category_id: Option<i64>,
    /// Normalized tag names, created on demand.
    pub tags: Vec<String>,
}

/// Full replacement of an article's editable columns and tag set.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArticle {
    pub title: String,
    pub author: String,
    pub text: String,
    pub category_id: Option<i64>,
    pub tags: Vec<String>,
}

/// Minimal projection used to fill article select boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleChoice {
    pub id: i64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_creation() {
        let now = Utc::now();
        let article = Article::new(
            1,
            "A long enough title".to_string(),
            "alice".to_string(),
            "Body".to_string(),
            now,
        );

        assert_eq!(article.id, 1);
        assert_eq!(article.created_at, now);
        assert_eq!(article.updated_at, now);
        assert!(article.category.is_none());
        assert!(article.tags.is_empty());
    }

    #[test]
    fn test_article_with_category_and_tags() {
        let article = Article::new(
            2,
            "Another long title".to_string(),
            "bob".to_string(),
            "Body".to_string(),
            Utc::now(),
        )
        .with_category(7, "General")
        .with_tags(["Drink", "Food"]);

        assert_eq!(article.category_id, Some(7));
        assert_eq!(article.category.as_deref(), Some("General"));
        assert_eq!(article.tags, vec!["Drink".to_string(), "Food".to_string()]);
    }
}
