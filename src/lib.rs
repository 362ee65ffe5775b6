//! Application core for a Medium-style publishing API.
//!
//! The crate is layered hexagonally: `domain` holds entities, value objects,
//! and store traits; `application` holds the command/query services that
//! orchestrate them; `infrastructure` provides in-process adapters (in-memory
//! stores, Argon2 hashing, HMAC tokens); `presentation` normalizes application
//! errors into transport-agnostic status values.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
