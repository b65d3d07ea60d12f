// src/application/queries/comments/mod.rs
mod get;
mod list_by_post;
mod service;

pub use get::GetCommentQuery;
pub use list_by_post::GetPostCommentsQuery;
pub use service::CommentQueryService;
