use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Listing row for the home page. `author_name` is `None` when the author
/// record no longer resolves.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub author_name: String,
}
