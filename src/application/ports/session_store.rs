use crate::application::{ApplicationResult, dto::SessionRecord};
use async_trait::async_trait;
use std::time::Duration;

/// Server-side storage for browser sessions, keyed by the session id carried
/// in the signed cookie.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Return the stored record, or `None` when the id is unknown or expired.
    async fn load(&self, session_id: &str) -> ApplicationResult<Option<SessionRecord>>;

    /// Insert or replace the record; it expires `ttl` after this call.
    async fn save(
        &self,
        session_id: &str,
        record: &SessionRecord,
        ttl: Duration,
    ) -> ApplicationResult<()>;

    /// Remove the record. Unknown ids are not an error.
    async fn destroy(&self, session_id: &str) -> ApplicationResult<()>;
}
