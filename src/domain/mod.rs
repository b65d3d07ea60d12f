pub mod author;
pub mod comment;
pub mod errors;
pub mod post;
