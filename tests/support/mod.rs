// tests/support/mod.rs
// Shared support for the integration test binaries. Each binary uses a
// different subset of these symbols, which would otherwise trip dead_code
// and unused_imports warnings per crate.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
