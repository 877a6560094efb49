use crate::application::{
    ApplicationResult, dto::SessionRecord, ports::session_store::SessionStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

struct Entry {
    record: SessionRecord,
    expires_at: Instant,
}

/// Process-local session store. Expired entries are dropped when read and
/// swept on every save.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Entry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> ApplicationResult<Option<SessionRecord>> {
        let mut guard = self.lock();
        let expired = match guard.get(session_id) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Ok(Some(entry.record.clone()));
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            guard.remove(session_id);
        }
        Ok(None)
    }

    async fn save(
        &self,
        session_id: &str,
        record: &SessionRecord,
        ttl: Duration,
    ) -> ApplicationResult<()> {
        let now = Instant::now();
        let mut guard = self.lock();
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(
            session_id.to_string(),
            Entry {
                record: record.clone(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> ApplicationResult<()> {
        self.lock().remove(session_id);
        Ok(())
    }
}
