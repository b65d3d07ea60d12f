use crate::domain::post::{Post, PostStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.into(),
            content: post.content.into(),
            author: post.author.into(),
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
