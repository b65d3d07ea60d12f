// src/application/commands/posts/mod.rs
mod change_status;
mod create;
mod create_with_comments;
mod delete;
mod service;
mod update;

pub use change_status::ChangePostStatusCommand;
pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use create_with_comments::CreatePostWithCommentsCommand;
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
