// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid input: {0}")]
    InvalidInput(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("login refused: {0}")]
    LoginRefused(LoginFailure),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

/// Why a username and password pair was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    UnknownUser,
    WrongPassword,
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUser => f.write_str("unknown user"),
            Self::WrongPassword => f.write_str("wrong password"),
        }
    }
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rejected field of a submitted form, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record `message` for `field` when `check` failed.
    pub fn check<T, E>(&mut self, field: &'static str, message: &str, check: Result<T, E>) -> Option<T> {
        match check {
            Ok(value) => Some(value),
            Err(_) => {
                self.push(field, message);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|err| err.message.clone()).collect()
    }

    /// `Ok(())` when nothing was rejected, otherwise the collected errors.
    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidInput(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .0
            .iter()
            .map(|err| format!("{}: {}", err.field, err.message))
            .collect();
        f.write_str(&joined.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keep_check_order() {
        let mut errors = FieldErrors::new();
        let first: Option<()> = errors.check("title", "Title is required", Err::<(), _>(()));
        let second = errors.check("body", "Body is required", Ok::<_, ()>(5));

        assert!(first.is_none());
        assert_eq!(second, Some(5));
        assert_eq!(errors.messages(), vec!["Title is required".to_string()]);
        assert!(matches!(
            errors.into_result(),
            Err(ApplicationError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name is required");
        errors.push("email", "Email is invalid");
        assert_eq!(
            errors.to_string(),
            "name: Name is required, email: Email is invalid"
        );
    }
}
