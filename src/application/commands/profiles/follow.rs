// src/application/commands/profiles/follow.rs
use super::ProfileCommandService;
use crate::application::{
    dto::ProfileDto,
    error::{ApplicationError, ApplicationResult},
    guard::ensure_distinct_users,
    identity::{CallerIdentity, require_caller},
    lookup,
};

pub struct FollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    pub async fn follow_user(
        &self,
        caller: Option<CallerIdentity>,
        command: FollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let caller = require_caller(caller)?;
        let follower = lookup::caller_user(self.users.as_ref(), caller).await?;

        let target = self
            .users
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user was not found"))?;

        ensure_distinct_users(follower.id, target.id, "cannot follow yourself")?;

        self.users.follow(follower.id, target.id).await?;

        Ok(ProfileDto::from_user(&target, true))
    }
}
