//! Blog content service core: posts and comments behind repository and
//! unit-of-work contracts, with interchangeable SQLite and MongoDB storage.
//!
//! The crate is presentation-agnostic. Embedders build an [`AppConfig`],
//! call [`initialize`] once at startup and wire the returned ports into
//! [`ApplicationServices`]; every mutation then runs inside one
//! transactional scope of the selected backend.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::ApplicationServices;
pub use config::{AppConfig, ConfigError, StorageBackend};
pub use infrastructure::storage::{StorageError, StorageHandle, initialize};
