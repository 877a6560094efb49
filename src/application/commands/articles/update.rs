use super::{
    ArticleCommandService,
    content::validate_content,
    ownership::{find_owned_article, parse_article_id},
};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    /// Replace title and body. Existence and ownership are checked before
    /// the submitted content is validated.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(command.id)?;
        let mut article = find_owned_article(self.read_repo.as_ref(), actor, id).await?;

        let (title, body) = validate_content(command.title, command.body)?;
        article.set_content(title, body, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
