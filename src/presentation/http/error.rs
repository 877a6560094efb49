use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Plain-text error page: a status code and the message shown to the browser.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg)
            | ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::LoginRefused(failure) => {
                Self::new(StatusCode::UNAUTHORIZED, failure.to_string())
            }
            ApplicationError::Conflict(msg)
            | ApplicationError::Domain(DomainError::Conflict(msg)) => {
                Self::new(StatusCode::CONFLICT, msg)
            }
            ApplicationError::Validation(msg)
            | ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::InvalidInput(errors) => {
                Self::new(StatusCode::BAD_REQUEST, errors.messages().join("\n"))
            }
            other @ (ApplicationError::Infrastructure(_)
            | ApplicationError::Domain(DomainError::Persistence(_))) => {
                Self::internal(other, INTERNAL_SERVER_ERROR)
            }
        }
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Log `err` and answer 500 with `message`, keeping the cause out of the
    /// response body.
    pub fn internal(err: impl fmt::Display, message: impl Into<String>) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::FieldErrors;

    #[test]
    fn not_found_keeps_message() {
        let err = HttpError::from_error(ApplicationError::not_found("Author not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Author not found");

        let err = HttpError::from_error(DomainError::NotFound("Article not found".into()).into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Article not found");
    }

    #[test]
    fn infrastructure_details_are_hidden() {
        let err = HttpError::from_error(ApplicationError::infrastructure(
            "connection refused (os error 111)",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn refused_logins_are_unauthorized() {
        let err = HttpError::from_error(ApplicationError::LoginRefused(
            crate::application::error::LoginFailure::WrongPassword,
        ));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "wrong password");
    }

    #[test]
    fn field_errors_are_listed() {
        let mut errors = FieldErrors::new();
        errors.push("title", "Title is required");
        errors.push("body", "Body is required");
        let err = HttpError::from_error(ApplicationError::InvalidInput(errors));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Title is required\nBody is required");
    }
}
