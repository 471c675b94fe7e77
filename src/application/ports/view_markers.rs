// src/application/ports/view_markers.rs
use crate::application::ApplicationResult;
use crate::domain::item::ViewKey;
use async_trait::async_trait;
use std::time::Duration;

/// Ephemeral presence markers with a time-to-live. Expiry is the store's
/// job; nothing deletes markers explicitly.
#[async_trait]
pub trait ViewMarkerStore: Send + Sync {
    /// Set the marker unless a live one exists. Returns `true` when this call
    /// created it. Must be atomic with respect to concurrent callers.
    async fn mark_if_absent(&self, key: &ViewKey, ttl: Duration) -> ApplicationResult<bool>;
}
