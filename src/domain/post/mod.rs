pub mod entity;
pub mod repository;
pub mod status;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::{PostReadRepository, PostRepository, PostWriteRepository};
pub use status::PostStatus;
pub use value_objects::{PostContent, PostId, PostTitle};
