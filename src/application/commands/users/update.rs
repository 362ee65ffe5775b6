use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::ApplicationResult,
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::user::{Email, PasswordHash, Username, UserUpdate},
};

/// Self-service account update. Absent fields keep their stored value; a
/// present password is re-hashed before it reaches the store.
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        caller: Option<CallerIdentity>,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let caller = require_caller(caller)?;
        let user = lookup::caller_user(self.users.as_ref(), caller).await?;

        let mut update = UserUpdate::new(user.id);

        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }

        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let updated = self.users.update(update).await?;

        let token = self.token_manager.issue(updated.id).await?;
        Ok(UserDto::from_user(updated, token))
    }
}
