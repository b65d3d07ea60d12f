use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::domain::author::AuthorName;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentReadRepository, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::infrastructure::sqlite::error::{closed_scope, map_sqlx};
use crate::infrastructure::sqlite::posts::SqliteTxHandle;

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    post_id: String,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::parse(&row.id)?,
            post_id: PostId::parse(&row.post_id)?,
            content: CommentContent::new(row.content)?,
            author: AuthorName::new(row.author)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, content, author, created_at, updated_at FROM comments WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, content, author, created_at, updated_at FROM comments WHERE post_id = ?",
        )
        .bind(post_id.to_string())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}

pub struct TxCommentRepository {
    tx: SqliteTxHandle,
}

impl TxCommentRepository {
    pub(crate) fn new(tx: SqliteTxHandle) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl CommentReadRepository for TxCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, content, author, created_at, updated_at FROM comments WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, content, author, created_at, updated_at FROM comments WHERE post_id = ?",
        )
        .bind(post_id.to_string())
        .fetch_all(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}

#[async_trait]
impl CommentWriteRepository for TxCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (id, post_id, content, author, created_at, updated_at) VALUES (?, ?, ?, ?, ?, NULL) RETURNING id, post_id, content, author, created_at, updated_at",
        )
        .bind(comment.id.to_string())
        .bind(comment.post_id.to_string())
        .bind(comment.content.as_str())
        .bind(comment.author.as_str())
        .bind(comment.created_at)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET content = COALESCE(?, content), updated_at = ? WHERE id = ? RETURNING id, post_id, content, author, created_at, updated_at",
        )
        .bind(update.content.as_ref().map(|c| c.as_str()))
        .bind(update.updated_at)
        .bind(update.id.to_string())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let result = sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(post_id.to_string())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
