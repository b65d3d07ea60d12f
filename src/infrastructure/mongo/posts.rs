use std::sync::Arc;

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::{ClientSession, Collection, Database};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::author::AuthorName;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository,
};
use crate::infrastructure::mongo::error::{closed_scope, map_mongo};

pub(crate) const POSTS_COLLECTION: &str = "posts";

/// One scope's session, shared by the repositories bound to it.
/// `None` after commit or rollback has consumed the session.
pub(crate) type MongoSessionHandle = Arc<Mutex<Option<ClientSession>>>;

/// Self-contained post document. Comments are never embedded here; they
/// live in their own collection keyed by the post's id string.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PostDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    content: String,
    author: String,
    status: String,
    created_at: bson::DateTime,
    updated_at: Option<bson::DateTime>,
}

impl From<&NewPost> for PostDocument {
    fn from(post: &NewPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_owned(),
            content: post.content.as_str().to_owned(),
            author: post.author.as_str().to_owned(),
            status: post.status.as_str().to_owned(),
            created_at: bson::DateTime::from_chrono(post.created_at),
            updated_at: None,
        }
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = DomainError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::parse(&document.id)?,
            title: PostTitle::new(document.title)?,
            content: PostContent::new(document.content)?,
            author: AuthorName::new(document.author)?,
            status: document.status.parse()?,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.map(|ts| ts.to_chrono()),
        })
    }
}

pub(crate) fn posts_collection(db: &Database) -> Collection<PostDocument> {
    db.collection(POSTS_COLLECTION)
}

#[derive(Clone)]
pub struct MongoPostReadRepository {
    db: Database,
}

impl MongoPostReadRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostReadRepository for MongoPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let document = posts_collection(&self.db)
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(map_mongo)?;

        document.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let mut cursor = posts_collection(&self.db)
            .find(doc! {})
            .await
            .map_err(map_mongo)?;

        let mut posts = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(map_mongo)? {
            posts.push(Post::try_from(document)?);
        }
        Ok(posts)
    }
}

pub struct TxPostRepository {
    db: Database,
    session: MongoSessionHandle,
}

impl TxPostRepository {
    pub(crate) fn new(db: Database, session: MongoSessionHandle) -> Self {
        Self { db, session }
    }

    fn collection(&self) -> Collection<PostDocument> {
        posts_collection(&self.db)
    }
}

#[async_trait]
impl PostReadRepository for TxPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let document = self
            .collection()
            .find_one(doc! { "_id": id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        document.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let mut cursor = self
            .collection()
            .find(doc! {})
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        let mut posts = Vec::new();
        while let Some(result) = cursor.next(&mut *session).await {
            posts.push(Post::try_from(result.map_err(map_mongo)?)?);
        }
        Ok(posts)
    }
}

#[async_trait]
impl PostWriteRepository for TxPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let document = PostDocument::from(&post);
        self.collection()
            .insert_one(&document)
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        // Read back what the store holds so returned timestamps match
        // later reads (BSON datetimes carry millisecond precision).
        let stored = self
            .collection()
            .find_one(doc! { "_id": post.id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?
            .ok_or_else(|| DomainError::Persistence("inserted post not found".into()))?;

        Post::try_from(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let id = update.id.to_string();
        let mut set = doc! { "updated_at": bson::DateTime::from_chrono(update.updated_at) };
        if let Some(title) = &update.title {
            set.insert("title", title.as_str());
        }
        if let Some(content) = &update.content {
            set.insert("content", content.as_str());
        }
        if let Some(status) = update.status {
            set.insert("status", status.as_str());
        }

        let result = self
            .collection()
            .update_one(doc! { "_id": &id }, doc! { "$set": set })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        let stored = self
            .collection()
            .find_one(doc! { "_id": &id })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        stored.map(Post::try_from).transpose()
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        Ok(result.deleted_count > 0)
    }
}
