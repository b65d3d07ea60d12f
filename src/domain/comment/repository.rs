use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Returns `Ok(None)` when no comment carries the update's id.
    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>>;
    /// Deleting an absent id is a no-op, not an error.
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Removes every comment owned by the post; returns how many went away.
    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}

pub trait CommentRepository: CommentReadRepository + CommentWriteRepository {}

impl<T: CommentReadRepository + CommentWriteRepository> CommentRepository for T {}
