use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// The caller's own account, returned by every operation that proves or
/// refreshes identity. Always carries a newly issued token; never the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: String,
}

impl UserDto {
    pub fn from_user(user: User, token: String) -> Self {
        Self {
            email: user.email.into(),
            token,
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}
