// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        body: ArticleBody,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            body,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Replacement content for an existing article. The author never changes.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            body: article.body.clone(),
            updated_at: article.updated_at,
        }
    }
}
