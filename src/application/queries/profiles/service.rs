use std::sync::Arc;

use crate::domain::user::UserRepository;

pub struct ProfileQueryService {
    pub(super) users: Arc<dyn UserRepository>,
}

impl ProfileQueryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
