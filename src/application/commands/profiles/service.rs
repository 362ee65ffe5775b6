// src/application/commands/profiles/service.rs
use std::sync::Arc;

use crate::domain::user::UserRepository;

pub struct ProfileCommandService {
    pub(super) users: Arc<dyn UserRepository>,
}

impl ProfileCommandService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
