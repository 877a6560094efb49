// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::dto::SessionRecord;
use crate::application::error::ApplicationError;
use crate::application::ports::session_store::SessionStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

const KEY_PREFIX: &str = "quire:session:";

/// Session store shared between processes through Redis. Expiry is delegated
/// to Redis key TTLs.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key(session_id: &str) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> ApplicationResult<Option<SessionRecord>> {
        let mut conn = self.connection().await?;

        let raw: Option<String> = conn
            .get(key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(record) => Ok(Some(record)),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable session record");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn save(
        &self,
        session_id: &str,
        record: &SessionRecord,
        ttl: Duration,
    ) -> ApplicationResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut conn = self.connection().await?;

        let _: () = redis::cmd("SET")
            .arg(key(session_id))
            .arg(json)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(key("abc"), "quire:session:abc");
    }

    #[tokio::test]
    async fn pool_is_created_lazily() {
        // No connection is attempted until the first command.
        assert!(RedisSessionStore::from_url("redis://127.0.0.1:6399/0").is_ok());
    }
}
