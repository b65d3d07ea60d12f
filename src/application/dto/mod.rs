pub mod comments;
pub mod posts;

pub use comments::{CommentDto, CommentSpec};
pub use posts::PostDto;
