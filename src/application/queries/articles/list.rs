use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::user::UserId,
};
use std::collections::{BTreeSet, HashMap};

impl ArticleQueryService {
    /// Every article with its author's display name attached.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let articles = self.read_repo.list().await?;

        let author_ids: Vec<UserId> = articles
            .iter()
            .map(|article| article.author_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let names: HashMap<UserId, String> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            self.user_repo
                .find_by_ids(&author_ids)
                .await?
                .into_iter()
                .map(|user| (user.id, user.name.into()))
                .collect()
        };

        Ok(articles
            .into_iter()
            .map(|article| ArticleSummaryDto {
                id: article.id.into(),
                author_name: names.get(&article.author_id).cloned(),
                title: article.title.into_inner(),
            })
            .collect())
    }
}
