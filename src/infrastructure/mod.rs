pub mod mongo;
pub mod sqlite;
pub mod storage;
pub mod time;
