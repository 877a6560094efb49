use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldErrors},
    domain::article::{ArticleBody, ArticleTitle},
};

pub(super) const TITLE_REQUIRED: &str = "Title is required";
pub(super) const BODY_REQUIRED: &str = "Body is required";

/// Validate a submitted article form, reporting every missing field.
pub(super) fn validate_content(
    title: String,
    body: String,
) -> ApplicationResult<(ArticleTitle, ArticleBody)> {
    let mut errors = FieldErrors::new();
    let title = errors.check("title", TITLE_REQUIRED, ArticleTitle::new(title));
    let body = errors.check("body", BODY_REQUIRED, ArticleBody::new(body));

    match (title, body) {
        (Some(title), Some(body)) => Ok((title, body)),
        _ => Err(ApplicationError::InvalidInput(errors)),
    }
}
