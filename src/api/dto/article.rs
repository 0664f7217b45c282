//! DTOs for article, comment and tag responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Article, Comment, Tag};

/// Category reference embedded in an article.
#[derive(Debug, Serialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// Article with its category and tag names.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        let category = article
            .category_id
            .zip(article.category)
            .map(|(id, name)| CategoryRef { id, name });

        Self {
            id: article.id,
            title: article.title,
            author: article.author,
            text: article.text,
            category,
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub article_id: i64,
    pub article_title: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            article_id: comment.article_id,
            article_title: comment.article_title,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}
