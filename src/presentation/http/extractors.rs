// src/presentation/http/extractors.rs
use crate::{
    application::dto::{AuthenticatedUser, FlashKind},
    presentation::http::{
        error::{HttpError, INTERNAL_SERVER_ERROR},
        session::Session,
        state::HttpState,
    },
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

pub const LOGIN_PATH: &str = "/users/login";
pub const PLEASE_LOGIN: &str = "Please login";

/// The logged-in user, if the session names one that still exists.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

/// Guard for routes that need a logged-in user. Anonymous requests are sent
/// to the login page with a flash message, whatever their method.
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(resolved) = parts.extensions.get::<MaybeUser>() {
            return Ok(resolved.clone());
        }

        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::internal(err, INTERNAL_SERVER_ERROR))?;
        let session = Session::from_request_parts(parts, state).await?;

        let user = app_state
            .services
            .session_user(session.user_id())
            .await
            .map_err(HttpError::from_error)?;

        let resolved = Self(user);
        parts.extensions.insert(resolved.clone());
        Ok(resolved)
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match user {
            Some(user) => Ok(Self(user)),
            None => {
                let session = Session::from_request_parts(parts, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                session.flash(FlashKind::Danger, PLEASE_LOGIN);
                Err(Redirect::to(LOGIN_PATH).into_response())
            }
        }
    }
}
