use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::ApplicationResult,
    identity::{CallerIdentity, require_caller},
    lookup,
};

impl UserQueryService {
    /// The caller's own account, with a freshly issued token. A token whose
    /// account no longer exists reads as not-found.
    pub async fn current_user(
        &self,
        caller: Option<CallerIdentity>,
    ) -> ApplicationResult<UserDto> {
        let caller = require_caller(caller)?;
        let user = lookup::caller_user(self.users.as_ref(), caller).await?;

        let token = self.token_manager.issue(user.id).await?;
        Ok(UserDto::from_user(user, token))
    }
}
