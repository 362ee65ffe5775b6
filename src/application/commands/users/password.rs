use crate::application::error::{ApplicationError, ApplicationResult};

/// Plaintext passwords are opaque to the domain; the only rule enforced
/// before hashing is that one was actually supplied.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password cannot be empty"));
    }

    Ok(())
}
