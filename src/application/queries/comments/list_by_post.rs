// src/application/queries/comments/list_by_post.rs
use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};
use uuid::Uuid;

pub struct GetPostCommentsQuery {
    pub post_id: Uuid,
}

impl CommentQueryService {
    /// A post that does not exist is NotFound; a post with no comments is
    /// an empty list. The two never look alike to the caller.
    pub async fn get_post_comments(
        &self,
        query: GetPostCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let post_id = PostId(query.post_id);

        if self.post_reads.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let comments = self.comment_reads.find_by_post(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
