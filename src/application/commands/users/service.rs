use std::sync::Arc;

use crate::application::ports::security::{PasswordHasher, TokenManager};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
}

impl UserCommandService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            users,
            password_hasher,
            token_manager,
        }
    }
}
