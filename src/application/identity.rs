// src/application/identity.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::UserId;

/// Proof that the transport layer authenticated a caller. Carries only the
/// user id; a stale token for a deleted account fails later, when the
/// operation loads the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: UserId,
}

impl CallerIdentity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// First step of every operation that refuses anonymous callers.
pub fn require_caller(caller: Option<CallerIdentity>) -> ApplicationResult<CallerIdentity> {
    caller.ok_or_else(|| ApplicationError::unauthenticated("unauthenticated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_caller_passes_identity_through() {
        let caller = CallerIdentity::new(UserId(4));
        assert_eq!(require_caller(Some(caller)).unwrap(), caller);
    }

    #[test]
    fn require_caller_rejects_anonymous() {
        let err = require_caller(None).unwrap_err();
        assert!(
            matches!(err, ApplicationError::Unauthenticated(msg) if msg == "unauthenticated")
        );
    }
}
