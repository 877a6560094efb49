// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use quire::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use quire::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/* -------------------------------- in-memory -------------------------------- */

/// Article table kept in memory; serves both the read and the write side.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, article: Article) -> Article {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(i64::from(article.id));
        self.articles.lock().unwrap().push(article.clone());
        article
    }

    pub fn all(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.all()
            .into_iter()
            .find(|article| i64::from(article.id) == id)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let article = Article {
            id: ArticleId::new(*next_id)?,
            title: new.title,
            body: new.body,
            author_id: new.author_id,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.articles.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;
        article.title = update.title;
        article.body = update.body;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let mut articles = self.all();
        articles.sort_by_key(|article| i64::from(article.id));
        Ok(articles)
    }
}

/* -------------------------------- failing -------------------------------- */

/// Write side whose every operation fails, for the 500 paths.
#[derive(Debug, Default)]
pub struct FailingArticleRepo;

fn unavailable() -> DomainError {
    DomainError::Persistence("database is unavailable".into())
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _new: NewArticle) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(unavailable())
    }
}
