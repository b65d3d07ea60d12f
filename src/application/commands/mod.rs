// src/application/commands/mod.rs
pub mod comments;
pub mod posts;

mod scope;
