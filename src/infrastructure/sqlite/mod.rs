pub mod comments;
pub mod database;
pub mod error;
pub mod posts;
pub mod unit_of_work;

pub use comments::SqliteCommentReadRepository;
pub use posts::SqlitePostReadRepository;
pub use unit_of_work::SqliteUnitOfWork;
