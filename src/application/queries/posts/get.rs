use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::PostId,
};
use uuid::Uuid;

pub struct GetPostQuery {
    pub id: Uuid,
}

impl PostQueryService {
    /// Absence is `None`, not an error; the caller decides what a missing
    /// post means for its protocol.
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<Option<PostDto>> {
        let post = self.read_repo.find_by_id(PostId(query.id)).await?;
        Ok(post.map(Into::into))
    }
}
