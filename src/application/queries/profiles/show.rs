use super::ProfileQueryService;
use crate::application::{
    dto::ProfileDto,
    error::{ApplicationError, ApplicationResult},
    identity::{CallerIdentity, require_caller},
    lookup,
};

pub struct ShowProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    /// Another account's public profile as seen by the caller. Identity is
    /// required here: the `following` flag is meaningless without a viewer.
    pub async fn show_profile(
        &self,
        caller: Option<CallerIdentity>,
        query: ShowProfileQuery,
    ) -> ApplicationResult<ProfileDto> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;

        let target = self
            .users
            .find_by_username(&query.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user was not found"))?;

        let following = self
            .users
            .is_following(viewer.id, target.id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to get following status");
                ApplicationError::internal("failed to get following status")
            })?;

        Ok(ProfileDto::from_user(&target, following))
    }
}
