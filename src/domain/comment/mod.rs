pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentUpdate, NewComment};
pub use repository::{CommentReadRepository, CommentRepository, CommentWriteRepository};
pub use value_objects::{CommentContent, CommentId};
