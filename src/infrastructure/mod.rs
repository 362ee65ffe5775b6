pub mod memory;
pub mod security;
pub mod time;
