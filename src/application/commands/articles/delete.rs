// src/application/commands/articles/delete.rs
use super::{
    ArticleCommandService,
    ownership::{find_owned_article, parse_article_id},
};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = parse_article_id(command.id)?;
        find_owned_article(self.read_repo.as_ref(), actor, id).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, user_id = %actor.id, "article deleted");
        Ok(())
    }
}
