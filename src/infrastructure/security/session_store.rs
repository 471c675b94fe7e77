// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::session_revocation::SessionRevocationStore,
    ports::time::Clock,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local revocation list. Entries are dropped once the tokens they
/// guard have expired.
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashMap<String, DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl InMemorySessionRevocationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            revoked: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, DateTime<Utc>>>> {
        self.revoked
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store poisoned"))
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let now = self.clock.now();
        Ok(self
            .lock()?
            .get(session_id)
            .is_some_and(|until| *until > now))
    }

    async fn revoke(&self, session_id: &str, until: DateTime<Utc>) -> ApplicationResult<()> {
        let now = self.clock.now();
        let mut revoked = self.lock()?;
        revoked.retain(|_, expires| *expires > now);
        revoked.insert(session_id.to_owned(), until);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time::SystemClock;
    use chrono::Duration;

    #[tokio::test]
    async fn revoked_sessions_stay_revoked_until_expiry() {
        let store = InMemorySessionRevocationStore::new(Arc::new(SystemClock));
        assert!(!store.is_revoked("s-1").await.unwrap());

        store
            .revoke("s-1", Utc::now() + Duration::hours(1))
            .await
            .unwrap();
        assert!(store.is_revoked("s-1").await.unwrap());
        assert!(!store.is_revoked("s-2").await.unwrap());
    }

    #[tokio::test]
    async fn lapsed_entries_are_pruned() {
        let store = InMemorySessionRevocationStore::new(Arc::new(SystemClock));
        store
            .revoke("old", Utc::now() - Duration::seconds(1))
            .await
            .unwrap();
        assert!(!store.is_revoked("old").await.unwrap());

        store
            .revoke("new", Utc::now() + Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(store.lock().unwrap().len(), 1);
    }
}
