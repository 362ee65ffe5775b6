// src/infrastructure/memory/mod.rs
//! In-memory store adapters. One [`MemoryDb`] behaves like a connection
//! pool: every repository holds the same `Arc` and operates on shared
//! tables under a single lock.

mod articles;
mod comments;
mod db;
mod users;

pub use articles::{MemoryArticleReadRepository, MemoryArticleWriteRepository};
pub use comments::MemoryCommentRepository;
pub use db::MemoryDb;
pub use users::MemoryUserRepository;
