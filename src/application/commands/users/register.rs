use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        errors::DomainError,
        user::{EmailAddress, NewUser, PasswordHash, PersonName, Username},
    },
};

/// User-facing messages for rejected registration fields.
pub struct RegistrationMessages;

impl RegistrationMessages {
    pub const NAME_REQUIRED: &'static str = "Name is required";
    pub const EMAIL_INVALID: &'static str = "Email is invalid";
    pub const USERNAME_REQUIRED: &'static str = "Username is required";
    pub const PASSWORD_REQUIRED: &'static str = "Password is required";
    pub const PASSWORDS_DIFFER: &'static str = "Passwords do not match";
}

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
}

struct ValidRegistration {
    name: PersonName,
    email: EmailAddress,
    username: Username,
    password: String,
}

impl RegisterUserCommand {
    /// Check every field and report all failures at once.
    fn validate(self) -> ApplicationResult<ValidRegistration> {
        type M = RegistrationMessages;
        let mut errors = FieldErrors::new();

        let name = errors.check("name", M::NAME_REQUIRED, PersonName::new(self.name));
        let email = errors.check("email", M::EMAIL_INVALID, EmailAddress::new(self.email));
        let username = errors.check("username", M::USERNAME_REQUIRED, Username::new(self.username));
        if self.password.is_empty() {
            errors.push("password", M::PASSWORD_REQUIRED);
        }
        if self.password_confirmation != self.password {
            errors.push("password2", M::PASSWORDS_DIFFER);
        }

        match (name, email, username) {
            (Some(name), Some(email), Some(username)) if errors.is_empty() => {
                Ok(ValidRegistration {
                    name,
                    email,
                    username,
                    password: self.password,
                })
            }
            _ => Err(ApplicationError::InvalidInput(errors)),
        }
    }
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let ValidRegistration {
            name,
            email,
            username,
            password,
        } = command.validate()?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(name, email, username, password_hash, self.clock.now());

        // A concurrent registration can still win the unique index.
        let user = self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(msg) => ApplicationError::Conflict(msg),
            other => ApplicationError::from(other),
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> RegisterUserCommand {
        RegisterUserCommand {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            password: "engine".into(),
            password_confirmation: "engine".into(),
        }
    }

    fn messages(result: ApplicationResult<ValidRegistration>) -> Vec<String> {
        match result {
            Err(ApplicationError::InvalidInput(errors)) => errors.messages(),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn valid_command_passes() {
        let valid = command().validate().unwrap();
        assert_eq!(valid.username.as_str(), "ada");
        assert_eq!(valid.password, "engine");
    }

    #[test]
    fn every_failure_is_reported() {
        let cmd = RegisterUserCommand {
            name: " ".into(),
            email: "nope".into(),
            username: String::new(),
            password: String::new(),
            password_confirmation: "x".into(),
        };
        assert_eq!(
            messages(cmd.validate()),
            vec![
                RegistrationMessages::NAME_REQUIRED,
                RegistrationMessages::EMAIL_INVALID,
                RegistrationMessages::USERNAME_REQUIRED,
                RegistrationMessages::PASSWORD_REQUIRED,
                RegistrationMessages::PASSWORDS_DIFFER,
            ]
        );
    }

    #[test]
    fn mismatched_confirmation_alone_fails() {
        let cmd = RegisterUserCommand {
            password_confirmation: "engines".into(),
            ..command()
        };
        assert_eq!(
            messages(cmd.validate()),
            vec![RegistrationMessages::PASSWORDS_DIFFER]
        );
    }
}
