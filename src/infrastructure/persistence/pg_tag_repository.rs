//! PostgreSQL implementation of tag repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// PostgreSQL repository for tags and the `article_tags` link table.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag::new(row.id, row.name, row.created_at)
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn get_or_create(&self, name: &str) -> Result<Tag, AppError> {
        let mut conn = self.pool.acquire().await?;
        upsert_tag(&mut conn, name).await
    }

    async fn replace_article_tags(
        &self,
        article_id: i64,
        tag_ids: Vec<i64>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        replace_links(&mut tx, article_id, &tag_ids).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn list_for_article(&self, article_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name, t.created_at
            FROM tags t
            JOIN article_tags atg ON atg.tag_id = t.id
            WHERE atg.article_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows =
            sqlx::query_as::<_, TagRow>("SELECT id, name, created_at FROM tags ORDER BY name")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }
}

/// Inserts the tag if missing and returns it.
pub(super) async fn upsert_tag(conn: &mut PgConnection, name: &str) -> Result<Tag, AppError> {
    // The no-op update makes RETURNING yield the existing row on conflict.
    let row = sqlx::query_as::<_, TagRow>(
        r#"
        INSERT INTO tags (name)
        VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name, created_at
        "#,
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.into())
}

/// Clears the article's tag links and inserts `tag_ids`. Run inside a transaction.
pub(super) async fn replace_links(
    conn: &mut PgConnection,
    article_id: i64,
    tag_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *conn)
        .await?;

    if !tag_ids.is_empty() {
        sqlx::query(
            r#"
            INSERT INTO article_tags (article_id, tag_id)
            SELECT $1, UNNEST($2::bigint[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(article_id)
        .bind(tag_ids)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
