use super::ArticleQueryService;
use crate::application::{
    commands::articles::{find_owned_article, parse_article_id},
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct GetArticleForEditQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_for_edit(
        &self,
        actor: &AuthenticatedUser,
        query: GetArticleForEditQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(query.id)?;
        let article = find_owned_article(self.read_repo.as_ref(), actor, id).await?;
        Ok(article.into())
    }
}
