// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::FlashKind,
    error::{ApplicationError, LoginFailure},
};
use crate::domain::errors::DomainError;
use crate::presentation::http::{
    error::{HttpError, HttpResult, INTERNAL_SERVER_ERROR},
    extractors::{LOGIN_PATH, MaybeUser},
    session::Session,
    state::HttpState,
    views::{
        Page,
        users::{self as view, RegisterFields},
    },
};
use axum::{
    Extension, Form,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

const REGISTER_PATH: &str = "/users/register";

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password2: String,
}

impl RegisterForm {
    fn fields(&self) -> RegisterFields<'_> {
        RegisterFields {
            name: &self.name,
            email: &self.email,
            username: &self.username,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register_form(session: Session, MaybeUser(user): MaybeUser) -> Html<String> {
    let page = Page::new(user, session.take_flash());
    Html(view::register_form(&page, &RegisterFields::default(), &[]))
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    session: Session,
    MaybeUser(user): MaybeUser,
    Form(form): Form<RegisterForm>,
) -> HttpResult<Response> {
    let command = RegisterUserCommand {
        name: form.name.clone(),
        email: form.email.clone(),
        username: form.username.clone(),
        password: form.password.clone(),
        password_confirmation: form.password2.clone(),
    };

    match state.services.user_commands.register(command).await {
        Ok(_) => {
            session.flash(FlashKind::Success, "You are now registered and can log in");
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Err(ApplicationError::InvalidInput(errors)) => {
            let page = Page::new(user, session.take_flash());
            let html = view::register_form(&page, &form.fields(), &errors.messages());
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_))) => {
            session.flash(FlashKind::Danger, "Username already exists");
            Ok(Redirect::to(REGISTER_PATH).into_response())
        }
        Err(err) => Err(HttpError::internal(err, "Failed to register user")),
    }
}

pub async fn login_form(session: Session, MaybeUser(user): MaybeUser) -> Html<String> {
    let page = Page::new(user, session.take_flash());
    Html(view::login_form(&page))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> HttpResult<Redirect> {
    let command = LoginUserCommand {
        username: form.username,
        password: form.password,
    };

    match state.services.user_commands.login(command).await {
        Ok(user) => {
            session.log_in(user.id);
            Ok(Redirect::to("/"))
        }
        Err(ApplicationError::LoginRefused(failure)) => {
            let message = match failure {
                LoginFailure::UnknownUser => "Incorrect username or password.",
                LoginFailure::WrongPassword => "Incorrect password.",
            };
            session.flash(FlashKind::Danger, message);
            Ok(Redirect::to(LOGIN_PATH))
        }
        Err(err) => Err(HttpError::internal(err, INTERNAL_SERVER_ERROR)),
    }
}

pub async fn logout(session: Session) -> Redirect {
    session.log_out();
    session.flash(FlashKind::Success, "You are logged out");
    Redirect::to(LOGIN_PATH)
}
