use super::PostCommandService;
use crate::{
    application::{commands::scope, error::ApplicationResult},
    domain::post::PostId,
};
use uuid::Uuid;

pub struct DeletePostCommand {
    pub id: Uuid,
}

impl PostCommandService {
    /// Removes the post and every comment it owns in one scope. Returns
    /// `false` when the id was absent; the scope still commits.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<bool> {
        let id = PostId(command.id);

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<bool> = async {
            let removed_comments = tx.comments().delete_by_post(id).await?;
            let deleted = tx.posts().delete(id).await?;
            tracing::debug!(post_id = %id, removed_comments, deleted, "post delete cascade");
            Ok(deleted)
        }
        .await;

        scope::complete(tx, outcome).await
    }
}
