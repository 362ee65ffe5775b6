// tests/support/mocks/mod.rs
pub mod security;
pub mod stores;
pub mod time;

pub use security::*;
pub use stores::*;
pub use time::*;
