// src/infrastructure/sqlite/unit_of_work.rs
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::Mutex;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::unit_of_work::{TransactionContext, UnitOfWork};
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use crate::infrastructure::sqlite::comments::TxCommentRepository;
use crate::infrastructure::sqlite::posts::{SqliteTxHandle, TxPostRepository};

pub struct SqliteUnitOfWork {
    pool: Arc<SqlitePool>,
}

impl SqliteUnitOfWork {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    async fn begin(&self) -> ApplicationResult<Box<dyn TransactionContext>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("opened sqlite transaction scope");
        Ok(Box::new(SqliteTransactionContext::new(tx)))
    }
}

/// Dropping the context without committing drops the inner transaction,
/// which sqlx rolls back.
struct SqliteTransactionContext {
    tx: SqliteTxHandle,
    posts: TxPostRepository,
    comments: TxCommentRepository,
}

impl SqliteTransactionContext {
    fn new(tx: Transaction<'static, Sqlite>) -> Self {
        let handle: SqliteTxHandle = Arc::new(Mutex::new(Some(tx)));
        Self {
            posts: TxPostRepository::new(Arc::clone(&handle)),
            comments: TxCommentRepository::new(Arc::clone(&handle)),
            tx: handle,
        }
    }
}

#[async_trait]
impl TransactionContext for SqliteTransactionContext {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    async fn commit(self: Box<Self>) -> ApplicationResult<()> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("transaction scope already closed"))?;
        tx.commit()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("sqlite transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> ApplicationResult<()> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("transaction scope already closed"))?;
        tx.rollback()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("sqlite transaction rolled back");
        Ok(())
    }
}
