// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{commands::scope, dto::PostDto, error::ApplicationResult},
    domain::{
        author::AuthorName,
        post::{NewPost, Post, PostContent, PostId, PostStatus, PostTitle},
    },
};

#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author: self.author.ok_or("author is required")?,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let author = AuthorName::new(command.author)?;

        let new_post = NewPost {
            id: PostId::generate(),
            title,
            content,
            author,
            status: PostStatus::Draft,
            created_at: self.clock.now(),
        };

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<Post> =
            async { Ok(tx.posts().insert(new_post).await?) }.await;
        scope::complete(tx, outcome).await.map(Into::into)
    }
}
