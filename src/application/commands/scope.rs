use crate::application::error::ApplicationResult;
use crate::application::ports::unit_of_work::TransactionContext;

/// Commit the scope when the body succeeded, roll it back when it failed.
/// The body's error wins; a failed rollback is logged and swallowed.
pub(super) async fn complete<T>(
    tx: Box<dyn TransactionContext>,
    outcome: ApplicationResult<T>,
) -> ApplicationResult<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed scope also failed");
            }
            Err(err)
        }
    }
}
