use bson::doc;
use mongodb::{Client, Database, IndexModel, options::ClientOptions};

use crate::infrastructure::mongo::posts::posts_collection;

pub async fn init_database(url: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let options = ClientOptions::parse(url).await?;
    let client = Client::with_options(options)?;
    let db = client.database(database);
    create_indexes(&db).await?;
    Ok(db)
}

/// Lookup-acceleration indexes on posts; no query here uses them yet.
/// Index creation is idempotent, so re-running on an existing deployment
/// is harmless.
async fn create_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    posts_collection(db)
        .create_index(IndexModel::builder().keys(doc! { "title": 1 }).build())
        .await?;
    posts_collection(db)
        .create_index(IndexModel::builder().keys(doc! { "author": 1 }).build())
        .await?;
    Ok(())
}
