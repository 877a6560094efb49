use crate::presentation::http::{
    error::{HttpError, HttpResult, INTERNAL_SERVER_ERROR},
    extractors::MaybeUser,
    session::Session,
    state::HttpState,
    views::{Page, articles},
};
use axum::{Extension, Json, response::Html};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    session: Session,
    MaybeUser(user): MaybeUser,
) -> HttpResult<Html<String>> {
    let listing = state
        .services
        .article_queries
        .list_articles()
        .await
        .map_err(|err| HttpError::internal(err, INTERNAL_SERVER_ERROR))?;

    let page = Page::new(user, session.take_flash());
    Ok(Html(articles::index(&page, &listing)))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
