use super::PostCommandService;
use crate::{
    application::{
        commands::scope,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostId, PostStatus, PostUpdate},
};
use uuid::Uuid;

pub struct ChangePostStatusCommand {
    pub id: Uuid,
    /// Parsed here so a malformed status surfaces as a validation error
    /// before any transaction opens.
    pub status: String,
}

impl PostCommandService {
    pub async fn change_post_status(
        &self,
        command: ChangePostStatusCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId(command.id);
        let status: PostStatus = command.status.parse()?;
        let now = self.clock.now();

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<Post> = async {
            let mut post = tx
                .posts()
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("post not found"))?;

            post.change_status(status, now);

            let update = PostUpdate::new(id, now).with_status(post.status);
            tx.posts()
                .update(update)
                .await?
                .ok_or_else(|| ApplicationError::not_found("post not found"))
        }
        .await;

        scope::complete(tx, outcome).await.map(Into::into)
    }
}
