// src/application/commands/articles/mod.rs
mod content;
mod create;
mod delete;
mod ownership;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub(crate) use ownership::{find_owned_article, parse_article_id};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
