use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::UserId;

/// Satisfied when `user_id` authored `article`. Editing and deleting an
/// article both require it.
pub struct ArticleOwnershipSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> ArticleOwnershipSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.author_id == self.user_id
    }
}
