// tests/support/builders.rs
use chrono::{DateTime, Utc};

use tanzaku_core::domain::author::AuthorName;
use tanzaku_core::domain::comment::{Comment, CommentContent, CommentId};
use tanzaku_core::domain::post::{Post, PostContent, PostId, PostStatus, PostTitle};

pub struct PostBuilder {
    id: PostId,
    title: String,
    content: String,
    author: String,
    status: PostStatus,
    created_at: DateTime<Utc>,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: PostId::generate(),
            title: "Test Post".into(),
            content: "Test body".into(),
            author: "tester".into(),
            status: PostStatus::Draft,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: PostId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: self.id,
            title: PostTitle::new(self.title).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            author: AuthorName::new(self.author).unwrap(),
            status: self.status,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

pub struct CommentBuilder {
    id: CommentId,
    post_id: PostId,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl CommentBuilder {
    pub fn for_post(post_id: PostId) -> Self {
        Self {
            id: CommentId::generate(),
            post_id,
            content: "Test comment".into(),
            author: "reader".into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: CommentId) -> Self {
        self.id = id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            post_id: self.post_id,
            content: CommentContent::new(self.content).unwrap(),
            author: AuthorName::new(self.author).unwrap(),
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
