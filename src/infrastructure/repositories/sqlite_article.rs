use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, body, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            author_id,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, body, author_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(body.as_str())
            .bind(i64::from(author_id))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles SET title = ?, body = ?, updated_at = ? WHERE id = ? \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(body.as_str())
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id ASC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
