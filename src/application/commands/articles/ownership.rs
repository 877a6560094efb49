use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleOwnershipSpec, ArticleReadRepository},
};

/// Ids that can never exist are reported as missing rather than malformed.
pub(crate) fn parse_article_id(id: i64) -> ApplicationResult<ArticleId> {
    ArticleId::new(id).map_err(|_| ApplicationError::not_found("Article not found"))
}

/// Load an article and make sure `actor` wrote it.
pub(crate) async fn find_owned_article(
    read_repo: &dyn ArticleReadRepository,
    actor: &AuthenticatedUser,
    id: ArticleId,
) -> ApplicationResult<Article> {
    let article = read_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

    if !ArticleOwnershipSpec::new(&article, actor.id).is_satisfied() {
        tracing::warn!(
            article_id = %article.id,
            author_id = %article.author_id,
            user_id = %actor.id,
            "rejected modification of another user's article"
        );
        return Err(ApplicationError::forbidden(
            "only the author may modify this article",
        ));
    }

    Ok(article)
}
