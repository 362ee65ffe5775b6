use super::UserCommandService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Verifies credentials and issues a fresh token. Unknown email, store
    /// failure, and wrong password all answer with the same message.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let user = match self.users.find_by_email(&command.email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(invalid_credentials()),
            Err(err) => {
                tracing::error!(error = %err, "failed to load user by email");
                return Err(invalid_credentials());
            }
        };

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| invalid_credentials())?;

        let token = self.token_manager.issue(user.id).await?;
        Ok(UserDto::from_user(user, token))
    }
}

fn invalid_credentials() -> ApplicationError {
    ApplicationError::validation("invalid email or password")
}
