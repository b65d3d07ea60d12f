// src/application/commands/posts/create_with_comments.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::scope,
        dto::{CommentDto, CommentSpec, PostDto},
        error::ApplicationResult,
    },
    domain::{
        author::AuthorName,
        comment::{Comment, CommentContent, CommentId, NewComment},
        post::{NewPost, Post, PostContent, PostId, PostStatus, PostTitle},
    },
};

pub struct CreatePostWithCommentsCommand {
    pub title: String,
    pub content: String,
    pub author: String,
    pub comments: Vec<CommentSpec>,
}

impl PostCommandService {
    /// Persists the post and all comment specs in one scope. Any validation
    /// or persistence failure rolls the whole batch back, the post included.
    pub async fn create_post_with_comments(
        &self,
        command: CreatePostWithCommentsCommand,
    ) -> ApplicationResult<(PostDto, Vec<CommentDto>)> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let author = AuthorName::new(command.author)?;
        let now = self.clock.now();

        let new_post = NewPost {
            id: PostId::generate(),
            title,
            content,
            author,
            status: PostStatus::Draft,
            created_at: now,
        };

        let tx = self.unit_of_work.begin().await?;
        let outcome: ApplicationResult<(Post, Vec<Comment>)> = async {
            let post = tx.posts().insert(new_post).await?;

            let mut comments = Vec::with_capacity(command.comments.len());
            for spec in command.comments {
                let new_comment = NewComment {
                    id: CommentId::generate(),
                    post_id: post.id,
                    content: CommentContent::new(spec.content)?,
                    author: AuthorName::new(spec.author)?,
                    created_at: now,
                };
                comments.push(tx.comments().insert(new_comment).await?);
            }

            Ok((post, comments))
        }
        .await;

        let (post, comments) = scope::complete(tx, outcome).await?;
        Ok((post.into(), comments.into_iter().map(Into::into).collect()))
    }
}
