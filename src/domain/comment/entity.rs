// src/domain/comment/entity.rs
use crate::domain::author::AuthorName;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::post::value_objects::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    /// Owning post; set at creation, never changes. The comment cannot
    /// outlive the post it references.
    pub post_id: PostId,
    pub content: CommentContent,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn apply_content(&mut self, content: CommentContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = Some(now);
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub content: CommentContent,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub content: Option<CommentContent>,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub fn new(id: CommentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: None,
            updated_at,
        }
    }

    pub fn with_content(mut self, content: CommentContent) -> Self {
        self.content = Some(content);
        self
    }
}
