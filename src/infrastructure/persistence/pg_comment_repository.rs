//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment, UpdateComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// PostgreSQL repository for comments.
///
/// Every returned comment carries the title of its article.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    article_title: String,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            article_id: row.article_id,
            article_title: row.article_title,
            author: row.author,
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (article_id, author, text)
                VALUES ($1, $2, $3)
                RETURNING id, article_id, author, text, created_at, updated_at
            )
            SELECT i.id, i.article_id, a.title AS article_title, i.author, i.text,
                   i.created_at, i.updated_at
            FROM inserted i
            JOIN articles a ON a.id = i.article_id
            "#,
        )
        .bind(new_comment.article_id)
        .bind(&new_comment.author)
        .bind(&new_comment.text)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.article_id, a.title AS article_title, c.author, c.text,
                   c.created_at, c.updated_at
            FROM comments c
            JOIN articles a ON a.id = c.article_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn update(&self, id: i64, update: UpdateComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH updated AS (
                UPDATE comments
                SET article_id = $1, author = $2, text = $3, updated_at = NOW()
                WHERE id = $4
                RETURNING id, article_id, author, text, created_at, updated_at
            )
            SELECT u.id, u.article_id, a.title AS article_title, u.author, u.text,
                   u.created_at, u.updated_at
            FROM updated u
            JOIN articles a ON a.id = u.article_id
            "#,
        )
        .bind(update.article_id)
        .bind(&update.author)
        .bind(&update.text)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Comment::from)
            .ok_or_else(|| AppError::not_found("Comment not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        article_id: Option<i64>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.article_id, a.title AS article_title, c.author, c.text,
                   c.created_at, c.updated_at
            FROM comments c
            JOIN articles a ON a.id = c.article_id
            WHERE ($1::bigint IS NULL OR c.article_id = $1)
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(article_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn count(&self, article_id: Option<i64>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE ($1::bigint IS NULL OR article_id = $1)",
        )
        .bind(article_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
