use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult, LoginFailure},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Check local credentials. A refused attempt is reported as
    /// `LoginRefused`, telling an unknown username apart from a wrong password.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthenticatedUser> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::LoginRefused(LoginFailure::UnknownUser))?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::LoginRefused(LoginFailure::UnknownUser))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::LoginRefused(LoginFailure::WrongPassword)
                }
                other => other,
            })?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user.into())
    }
}
