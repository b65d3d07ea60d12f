use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            content: comment.content.into(),
            author: comment.author.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Content/author pair for a comment created in the same scope as its post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSpec {
    pub content: String,
    pub author: String,
}
