// src/application/ports/unit_of_work.rs
use crate::application::error::ApplicationResult;
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostRepository;
use async_trait::async_trait;

/// One transactional scope over the backing store.
///
/// Repositories handed out by the context are bound to the scope's
/// transaction; their writes become durable only when `commit` succeeds.
/// `commit` and `rollback` consume the context, so a closed scope cannot
/// hand out repositories again and commit happens at most once. Dropping
/// a context without committing discards everything written through it.
#[async_trait]
pub trait TransactionContext: Send + Sync {
    fn posts(&self) -> &dyn PostRepository;
    fn comments(&self) -> &dyn CommentRepository;
    async fn commit(self: Box<Self>) -> ApplicationResult<()>;
    /// Safe to call when nothing was written.
    async fn rollback(self: Box<Self>) -> ApplicationResult<()>;
}

/// Opens transactional scopes against the configured backend. One scope
/// owns one connection or session; concurrent scopes never share one.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> ApplicationResult<Box<dyn TransactionContext>>;
}
