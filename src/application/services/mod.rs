// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{articles::ArticleCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{security::PasswordHasher, session_store::SessionStore, time::Clock},
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
    session_store: Arc<dyn SessionStore>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            user_queries,
            session_store,
        }
    }

    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.session_store)
    }

    /// Resolve the user behind a session's stored id, if any.
    pub async fn session_user(
        &self,
        user_id: Option<i64>,
    ) -> ApplicationResult<Option<AuthenticatedUser>> {
        match user_id {
            Some(id) => self.user_queries.find_session_user(id).await,
            None => Ok(None),
        }
    }
}
