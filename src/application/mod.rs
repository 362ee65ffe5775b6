pub mod commands;
pub mod dto;
pub mod error;
pub mod guard;
pub mod identity;
pub(crate) mod lookup;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
pub use identity::CallerIdentity;
