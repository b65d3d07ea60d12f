// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{commands::scope, dto::CommentDto, error::ApplicationResult},
    domain::{
        author::AuthorName,
        comment::{Comment, CommentContent, CommentId, NewComment},
        errors::DomainError,
        post::PostId,
    },
};
use uuid::Uuid;

pub struct CreateCommentCommand {
    pub post_id: Uuid,
    pub content: String,
    pub author: String,
}

impl CommentCommandService {
    /// The owning post's existence is checked inside the same scope as the
    /// insert, so no other writer can delete it between check and insert.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId(command.post_id);
        let content = CommentContent::new(command.content)?;
        let author = AuthorName::new(command.author)?;
        let now = self.clock.now();

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<Comment> = async {
            if tx.posts().find_by_id(post_id).await?.is_none() {
                return Err(
                    DomainError::Referential(format!("post '{post_id}' does not exist")).into(),
                );
            }

            let new_comment = NewComment {
                id: CommentId::generate(),
                post_id,
                content,
                author,
                created_at: now,
            };
            Ok(tx.comments().insert(new_comment).await?)
        }
        .await;

        scope::complete(tx, outcome).await.map(Into::into)
    }
}
