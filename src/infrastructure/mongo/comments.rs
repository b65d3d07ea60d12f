use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::author::AuthorName;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentReadRepository, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::infrastructure::mongo::error::{closed_scope, map_mongo};
use crate::infrastructure::mongo::posts::MongoSessionHandle;

pub(crate) const COMMENTS_COLLECTION: &str = "comments";

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CommentDocument {
    #[serde(rename = "_id")]
    id: String,
    post_id: String,
    content: String,
    author: String,
    created_at: bson::DateTime,
    updated_at: Option<bson::DateTime>,
}

impl From<&NewComment> for CommentDocument {
    fn from(comment: &NewComment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            content: comment.content.as_str().to_owned(),
            author: comment.author.as_str().to_owned(),
            created_at: bson::DateTime::from_chrono(comment.created_at),
            updated_at: None,
        }
    }
}

impl TryFrom<CommentDocument> for Comment {
    type Error = DomainError;

    fn try_from(document: CommentDocument) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::parse(&document.id)?,
            post_id: PostId::parse(&document.post_id)?,
            content: CommentContent::new(document.content)?,
            author: AuthorName::new(document.author)?,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.map(|ts| ts.to_chrono()),
        })
    }
}

pub(crate) fn comments_collection(db: &Database) -> Collection<CommentDocument> {
    db.collection(COMMENTS_COLLECTION)
}

#[derive(Clone)]
pub struct MongoCommentReadRepository {
    db: Database,
}

impl MongoCommentReadRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentReadRepository for MongoCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let document = comments_collection(&self.db)
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(map_mongo)?;

        document.map(Comment::try_from).transpose()
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut cursor = comments_collection(&self.db)
            .find(doc! { "post_id": post_id.to_string() })
            .await
            .map_err(map_mongo)?;

        let mut comments = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(map_mongo)? {
            comments.push(Comment::try_from(document)?);
        }
        Ok(comments)
    }
}

pub struct TxCommentRepository {
    db: Database,
    session: MongoSessionHandle,
}

impl TxCommentRepository {
    pub(crate) fn new(db: Database, session: MongoSessionHandle) -> Self {
        Self { db, session }
    }

    fn collection(&self) -> Collection<CommentDocument> {
        comments_collection(&self.db)
    }
}

#[async_trait]
impl CommentReadRepository for TxCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let document = self
            .collection()
            .find_one(doc! { "_id": id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        document.map(Comment::try_from).transpose()
    }

    async fn find_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let mut cursor = self
            .collection()
            .find(doc! { "post_id": post_id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        let mut comments = Vec::new();
        while let Some(result) = cursor.next(&mut *session).await {
            comments.push(Comment::try_from(result.map_err(map_mongo)?)?);
        }
        Ok(comments)
    }
}

#[async_trait]
impl CommentWriteRepository for TxCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let document = CommentDocument::from(&comment);
        self.collection()
            .insert_one(&document)
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": comment.id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?
            .ok_or_else(|| DomainError::Persistence("inserted comment not found".into()))?;

        Comment::try_from(stored)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let id = update.id.to_string();
        let mut set = doc! { "updated_at": bson::DateTime::from_chrono(update.updated_at) };
        if let Some(content) = &update.content {
            set.insert("content", content.as_str());
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

        stored.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        self.collection()
            .delete_one(doc! { "_id": id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        Ok(())
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(closed_scope)?;

        let result = self
            .collection()
            .delete_many(doc! { "post_id": post_id.to_string() })
            .session(&mut *session)
            .await
            .map_err(map_mongo)?;

        Ok(result.deleted_count)
    }
}
