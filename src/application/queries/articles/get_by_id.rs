use super::ArticleQueryService;
use crate::application::{
    commands::articles::parse_article_id,
    dto::ArticleDetailDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Load an article for display. Both the article and its author must
    /// resolve; a dangling author reference is reported as not found.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = parse_article_id(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    article_id = %article.id,
                    author_id = %article.author_id,
                    "article author does not resolve"
                );
                ApplicationError::not_found("Author not found")
            })?;

        Ok(ArticleDetailDto {
            author_name: author.name.into(),
            article: article.into(),
        })
    }
}
