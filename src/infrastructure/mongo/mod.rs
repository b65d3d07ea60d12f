pub mod comments;
pub mod database;
pub mod error;
pub mod posts;
pub mod unit_of_work;

pub use comments::MongoCommentReadRepository;
pub use posts::MongoPostReadRepository;
pub use unit_of_work::MongoUnitOfWork;
