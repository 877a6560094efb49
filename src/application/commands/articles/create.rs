// src/application/commands/articles/create.rs
use super::{ArticleCommandService, content::validate_content};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let (title, body) = validate_content(command.title, command.body)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticle::new(title, body, actor.id, now))
            .await?;

        tracing::info!(article_id = %created.id, author_id = %actor.id, "article created");
        Ok(created.into())
    }
}
