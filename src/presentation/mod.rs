pub mod status;

pub use status::{Code, IntoStatusResult, Status, StatusResult};
