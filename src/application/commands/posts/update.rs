use super::PostCommandService;
use crate::{
    application::{
        commands::scope,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostContent, PostId, PostTitle, PostUpdate},
};
use uuid::Uuid;

pub struct UpdatePostCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId(command.id);
        let title = command.title.map(PostTitle::new).transpose()?;
        let content = command.content.map(PostContent::new).transpose()?;
        let now = self.clock.now();

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<Post> = async {
            let mut post = tx
                .posts()
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("post not found"))?;

            post.apply_content(title, content, now);

            let update = PostUpdate::new(id, now)
                .with_title(post.title.clone())
                .with_content(post.content.clone());

            tx.posts()
                .update(update)
                .await?
                .ok_or_else(|| ApplicationError::not_found("post not found"))
        }
        .await;

        scope::complete(tx, outcome).await.map(Into::into)
    }
}
