use std::sync::Arc;

use crate::{application::ports::security::TokenManager, domain::user::UserRepository};

pub struct UserQueryService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) token_manager: Arc<dyn TokenManager>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>, token_manager: Arc<dyn TokenManager>) -> Self {
        Self {
            users,
            token_manager,
        }
    }
}
