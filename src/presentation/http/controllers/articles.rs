// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::FlashKind,
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, GetArticleForEditQuery},
};
use crate::domain::errors::DomainError;
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::{MaybeUser, RequireUser},
    session::Session,
    state::HttpState,
    views::{
        Page,
        articles::{self as view, ArticleFields},
    },
};
use axum::{
    Extension, Form,
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ArticleForm {
    fn fields(&self) -> ArticleFields<'_> {
        ArticleFields {
            title: &self.title,
            body: &self.body,
        }
    }
}

/// Ids that are not numbers can never match a row.
fn article_id(raw: &str) -> i64 {
    raw.parse().unwrap_or_default()
}

fn redirect_with(session: &Session, kind: FlashKind, message: &str, to: &str) -> Response {
    session.flash(kind, message);
    Redirect::to(to).into_response()
}

pub async fn add_form(session: Session, RequireUser(user): RequireUser) -> Html<String> {
    let page = Page::new(Some(user), session.take_flash());
    Html(view::add_form(&page, &ArticleFields::default(), &[]))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    session: Session,
    RequireUser(user): RequireUser,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Response> {
    let command = CreateArticleCommand {
        title: form.title.clone(),
        body: form.body.clone(),
    };

    match state.services.article_commands.create_article(&user, command).await {
        Ok(_) => Ok(redirect_with(
            &session,
            FlashKind::Success,
            "Article added successfully",
            "/",
        )),
        Err(ApplicationError::InvalidInput(errors)) => {
            let page = Page::new(Some(user), session.take_flash());
            let html = view::add_form(&page, &form.fields(), &errors.messages());
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(err) => Err(HttpError::internal(err, "Failed to save article")),
    }
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    session: Session,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let detail = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery {
            id: article_id(&id),
        })
        .await
        .into_http()?;

    let is_owner = user
        .as_ref()
        .is_some_and(|user| i64::from(user.id) == detail.article.author_id);
    let page = Page::new(user, session.take_flash());
    Ok(Html(view::show(&page, &detail, is_owner)))
}

/// Redirect home with the message matching a failed edit lookup.
fn edit_rejection(session: &Session, err: ApplicationError, fallback: &str) -> Response {
    let message = match err {
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
            "Article not found"
        }
        ApplicationError::Forbidden(_) => "Not Authorized",
        other => {
            tracing::error!(error = %other, "article edit failed");
            fallback
        }
    };
    redirect_with(session, FlashKind::Danger, message, "/")
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    session: Session,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
) -> Response {
    let query = GetArticleForEditQuery {
        id: article_id(&id),
    };
    match state
        .services
        .article_queries
        .get_article_for_edit(&user, query)
        .await
    {
        Ok(article) => {
            let fields = ArticleFields {
                title: &article.title,
                body: &article.body,
            };
            let page = Page::new(Some(user), session.take_flash());
            Html(view::edit_form(&page, article.id, &fields, &[])).into_response()
        }
        Err(err) => edit_rejection(&session, err, "Error loading article"),
    }
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    session: Session,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
    Form(form): Form<ArticleForm>,
) -> Response {
    let id = article_id(&id);
    let command = UpdateArticleCommand {
        id,
        title: form.title.clone(),
        body: form.body.clone(),
    };

    match state.services.article_commands.update_article(&user, command).await {
        Ok(_) => redirect_with(&session, FlashKind::Success, "Article Updated", "/"),
        Err(ApplicationError::InvalidInput(errors)) => {
            let page = Page::new(Some(user), session.take_flash());
            let html = view::edit_form(&page, id, &form.fields(), &errors.messages());
            (StatusCode::BAD_REQUEST, Html(html)).into_response()
        }
        Err(err) => edit_rejection(&session, err, "Error updating article"),
    }
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    Path(id): Path<String>,
) -> HttpResult<&'static str> {
    let command = DeleteArticleCommand {
        id: article_id(&id),
    };

    match state.services.article_commands.delete_article(&user, command).await {
        Ok(()) => Ok("Success"),
        Err(
            err @ (ApplicationError::NotFound(_)
            | ApplicationError::Domain(DomainError::NotFound(_))),
        ) => Err(HttpError::from_error(err)),
        Err(ApplicationError::Forbidden(_)) => {
            Err(HttpError::new(StatusCode::FORBIDDEN, "Unauthorized"))
        }
        Err(err) => Err(HttpError::internal(err, "Failed to delete article")),
    }
}
