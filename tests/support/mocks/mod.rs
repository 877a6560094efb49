// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
pub use security::PlainPasswordHasher;
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
