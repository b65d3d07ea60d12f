// src/domain/post/entity.rs
use crate::domain::author::AuthorName;
use crate::domain::post::status::PostStatus;
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: AuthorName,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    /// None until the first mutation; every mutating operation stamps it.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn apply_content(
        &mut self,
        title: Option<PostTitle>,
        content: Option<PostContent>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = Some(now);
    }

    pub fn change_status(&mut self, status: PostStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(now);
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: AuthorName,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub status: Option<PostStatus>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }
}
