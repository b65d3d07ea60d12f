use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use tokio::sync::Mutex;

use crate::domain::author::AuthorName;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository,
};
use crate::infrastructure::sqlite::error::{closed_scope, map_sqlx};

/// One scope's transaction, shared by the repositories bound to it.
/// `None` after commit or rollback has consumed the transaction.
pub(crate) type SqliteTxHandle = Arc<Mutex<Option<Transaction<'static, Sqlite>>>>;

#[derive(Debug, FromRow)]
struct PostRow {
    id: String,
    title: String,
    content: String,
    author: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::parse(&row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            author: AuthorName::new(row.author)?,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Pool-backed reads of committed state. Writes exist only on the
/// transaction-scoped repository.
#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, author, status, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, author, status, created_at, updated_at FROM posts",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}

pub struct TxPostRepository {
    tx: SqliteTxHandle,
}

impl TxPostRepository {
    pub(crate) fn new(tx: SqliteTxHandle) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl PostReadRepository for TxPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, author, status, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, author, status, created_at, updated_at FROM posts",
        )
        .fetch_all(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}

#[async_trait]
impl PostWriteRepository for TxPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (id, title, content, author, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, NULL) RETURNING id, title, content, author, status, created_at, updated_at",
        )
        .bind(post.id.to_string())
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.author.as_str())
        .bind(post.status.as_str())
        .bind(post.created_at)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = COALESCE(?, title), content = COALESCE(?, content), status = COALESCE(?, status), updated_at = ? WHERE id = ? RETURNING id, title, content, author, status, created_at, updated_at",
        )
        .bind(update.title.as_ref().map(|t| t.as_str()))
        .bind(update.content.as_ref().map(|c| c.as_str()))
        .bind(update.status.map(|s| s.as_str()))
        .bind(update.updated_at)
        .bind(update.id.to_string())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(closed_scope)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
