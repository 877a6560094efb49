use super::UserQueryService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::user::UserId,
};

impl UserQueryService {
    /// Resolve the user id stored in a session. Ids that are malformed or no
    /// longer exist yield `None` and the session is treated as anonymous.
    pub async fn find_session_user(
        &self,
        user_id: i64,
    ) -> ApplicationResult<Option<AuthenticatedUser>> {
        let Ok(id) = UserId::new(user_id) else {
            tracing::warn!(user_id, "invalid user id in session");
            return Ok(None);
        };

        Ok(self.user_repo.find_by_id(id).await?.map(Into::into))
    }
}
