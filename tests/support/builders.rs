// tests/support/builders.rs
use quire::domain::article::*;
use quire::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            body: "Test body".into(),
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
