use crate::domain::article::Author;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Viewer-relative public view of an account: `following` answers "does the
/// viewer follow this person", so the same account renders differently for
/// different callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

impl ProfileDto {
    pub fn from_user(user: &User, following: bool) -> Self {
        Self {
            username: user.username.as_str().to_owned(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following,
        }
    }

    pub fn from_author(author: &Author, following: bool) -> Self {
        Self {
            username: author.username.clone(),
            bio: author.bio.clone(),
            image: author.image.clone(),
            following,
        }
    }
}
