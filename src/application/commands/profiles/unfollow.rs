// src/application/commands/profiles/unfollow.rs
use super::ProfileCommandService;
use crate::application::{
    dto::ProfileDto,
    error::{ApplicationError, ApplicationResult},
    guard::ensure_distinct_users,
    identity::{CallerIdentity, require_caller},
    lookup,
};

pub struct UnfollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    /// Unfollowing someone the caller never followed succeeds quietly; the
    /// store drops the edge if present and the response is the same either
    /// way.
    pub async fn unfollow_user(
        &self,
        caller: Option<CallerIdentity>,
        command: UnfollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let caller = require_caller(caller)?;
        let follower = lookup::caller_user(self.users.as_ref(), caller).await?;

        let target = self
            .users
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user was not found"))?;

        ensure_distinct_users(follower.id, target.id, "cannot unfollow yourself")?;

        self.users.unfollow(follower.id, target.id).await?;

        Ok(ProfileDto::from_user(&target, false))
    }
}
