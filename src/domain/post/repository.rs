use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Returns `Ok(None)` when no post carries the update's id.
    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>>;
    /// Returns `Ok(false)` when the id was absent; absence is not an error.
    async fn delete(&self, id: PostId) -> DomainResult<bool>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list(&self) -> DomainResult<Vec<Post>>;
}

pub trait PostRepository: PostReadRepository + PostWriteRepository {}

impl<T: PostReadRepository + PostWriteRepository> PostRepository for T {}
