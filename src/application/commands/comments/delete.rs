use super::CommentCommandService;
use crate::{
    application::{commands::scope, error::ApplicationResult},
    domain::comment::CommentId,
};
use uuid::Uuid;

pub struct DeleteCommentCommand {
    pub id: Uuid,
}

impl CommentCommandService {
    /// Deleting an absent id is a committed no-op, repeatable at will.
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId(command.id);

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<()> =
            async { Ok(tx.comments().delete(id).await?) }.await;
        scope::complete(tx, outcome).await
    }
}
