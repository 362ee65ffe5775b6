use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Registration is open to anonymous callers. Uniqueness of username and
    /// email is the store's call; a constraint violation surfaces as a
    /// conflict and is reported generically.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .users
            .insert(NewUser::new(username, email, password_hash))
            .await?;

        let token = self.token_manager.issue(user.id).await?;
        Ok(UserDto::from_user(user, token))
    }
}
