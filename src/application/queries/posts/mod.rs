// src/application/queries/posts/mod.rs
mod get;
mod list;
mod service;

pub use get::GetPostQuery;
pub use service::PostQueryService;
