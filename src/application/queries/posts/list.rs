use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    /// Every post, draft or not. No filtering or paging at this layer.
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
