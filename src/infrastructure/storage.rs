// src/infrastructure/storage.rs
use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::unit_of_work::UnitOfWork;
use crate::config::{AppConfig, StorageBackend};
use crate::domain::comment::CommentReadRepository;
use crate::domain::post::PostReadRepository;
use crate::infrastructure::mongo::{
    self, MongoCommentReadRepository, MongoPostReadRepository, MongoUnitOfWork,
};
use crate::infrastructure::sqlite::{
    self, SqliteCommentReadRepository, SqlitePostReadRepository, SqliteUnitOfWork,
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// The ports one backend exposes. Callers hand these to
/// [`ApplicationServices::new`](crate::application::services::ApplicationServices::new)
/// and never touch the backend types again.
pub struct StorageHandle {
    pub unit_of_work: Arc<dyn UnitOfWork>,
    pub post_reads: Arc<dyn PostReadRepository>,
    pub comment_reads: Arc<dyn CommentReadRepository>,
}

/// Connects the backend the configuration names and prepares its schema:
/// migrations for sqlite, indexes for mongodb.
pub async fn initialize(config: &AppConfig) -> Result<StorageHandle, StorageError> {
    match config.storage_backend() {
        StorageBackend::Sqlite => {
            let pool = Arc::new(sqlite::database::init_pool(config.sqlite_url()).await?);
            sqlite::database::run_migrations(&pool).await?;
            tracing::info!(backend = "sqlite", "storage initialized");
            Ok(StorageHandle {
                unit_of_work: Arc::new(SqliteUnitOfWork::new(Arc::clone(&pool))),
                post_reads: Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool))),
                comment_reads: Arc::new(SqliteCommentReadRepository::new(pool)),
            })
        }
        StorageBackend::Mongo => {
            let db =
                mongo::database::init_database(config.mongodb_url(), config.mongodb_database())
                    .await?;
            tracing::info!(
                backend = "mongodb",
                database = config.mongodb_database(),
                "storage initialized"
            );
            Ok(StorageHandle {
                unit_of_work: Arc::new(MongoUnitOfWork::new(db.clone())),
                post_reads: Arc::new(MongoPostReadRepository::new(db.clone())),
                comment_reads: Arc::new(MongoCommentReadRepository::new(db)),
            })
        }
    }
}
