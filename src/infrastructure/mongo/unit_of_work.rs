// src/infrastructure/mongo/unit_of_work.rs
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{ClientSession, Database};
use tokio::sync::Mutex;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::unit_of_work::{TransactionContext, UnitOfWork};
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use crate::infrastructure::mongo::comments::TxCommentRepository;
use crate::infrastructure::mongo::posts::{MongoSessionHandle, TxPostRepository};

pub struct MongoUnitOfWork {
    db: Database,
}

impl MongoUnitOfWork {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for MongoUnitOfWork {
    async fn begin(&self) -> ApplicationResult<Box<dyn TransactionContext>> {
        let mut session = self
            .db
            .client()
            .start_session()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        session
            .start_transaction()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("opened mongodb transaction scope");
        Ok(Box::new(MongoTransactionContext::new(
            self.db.clone(),
            session,
        )))
    }
}

/// Dropping the context without committing drops the session, and the
/// driver aborts the open transaction with it.
struct MongoTransactionContext {
    session: MongoSessionHandle,
    posts: TxPostRepository,
    comments: TxCommentRepository,
}

impl MongoTransactionContext {
    fn new(db: Database, session: ClientSession) -> Self {
        let handle: MongoSessionHandle = Arc::new(Mutex::new(Some(session)));
        Self {
            posts: TxPostRepository::new(db.clone(), Arc::clone(&handle)),
            comments: TxCommentRepository::new(db, Arc::clone(&handle)),
            session: handle,
        }
    }
}

#[async_trait]
impl TransactionContext for MongoTransactionContext {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    async fn commit(self: Box<Self>) -> ApplicationResult<()> {
        let mut session = self
            .session
            .lock()
            .await
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("transaction scope already closed"))?;
        session
            .commit_transaction()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("mongodb transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> ApplicationResult<()> {
        let mut session = self
            .session
            .lock()
            .await
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("transaction scope already closed"))?;
        session
            .abort_transaction()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!("mongodb transaction aborted");
        Ok(())
    }
}
