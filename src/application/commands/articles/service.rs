// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
