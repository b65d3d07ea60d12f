use super::CommentQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::comment::CommentId,
};
use uuid::Uuid;

pub struct GetCommentQuery {
    pub id: Uuid,
}

impl CommentQueryService {
    pub async fn get_comment(
        &self,
        query: GetCommentQuery,
    ) -> ApplicationResult<Option<CommentDto>> {
        let comment = self.comment_reads.find_by_id(CommentId(query.id)).await?;
        Ok(comment.map(Into::into))
    }
}
