use crate::application::{
    ApplicationResult, error::ApplicationError, ports::time::Clock,
    ports::view_markers::ViewMarkerStore,
};
use crate::domain::item::ViewKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Process-local marker store. Expiry is evaluated against the injected
/// clock, and stale entries are pruned on every write.
pub struct InMemoryViewMarkerStore {
    markers: Mutex<HashMap<String, DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryViewMarkerStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            markers: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, DateTime<Utc>>>> {
        self.markers
            .lock()
            .map_err(|_| ApplicationError::infrastructure("view marker store poisoned"))
    }
}

#[async_trait]
impl ViewMarkerStore for InMemoryViewMarkerStore {
    async fn mark_if_absent(&self, key: &ViewKey, ttl: Duration) -> ApplicationResult<bool> {
        let now = self.clock.now();
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut markers = self.lock()?;
        markers.retain(|_, expires_at| *expires_at > now);
        if markers.contains_key(key.as_str()) {
            return Ok(false);
        }
        markers.insert(key.as_str().to_owned(), now + ttl);
        Ok(true)
    }
}
