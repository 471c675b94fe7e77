// tests/support/mocks/markers.rs
use async_trait::async_trait;
use plaza_core::application::{
    ApplicationResult, error::ApplicationError, ports::view_markers::ViewMarkerStore,
};
use plaza_core::domain::errors::{DomainError, DomainResult};
use plaza_core::domain::item::{
    Item, ItemId, ItemKind, ItemUpdate, ItemWriteRepository, NewItem, ViewKey,
};
use std::sync::Arc;
use std::time::Duration;

/// Marker store whose backend is permanently unreachable.
#[derive(Clone, Debug, Default)]
pub struct FailingMarkerStore;

#[async_trait]
impl ViewMarkerStore for FailingMarkerStore {
    async fn mark_if_absent(&self, _key: &ViewKey, _ttl: Duration) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("cache unavailable"))
    }
}

/// Delegates writes but fails every counter increment.
pub struct FailingViewCounter {
    pub inner: Arc<dyn ItemWriteRepository>,
}

#[async_trait]
impl ItemWriteRepository for FailingViewCounter {
    async fn insert(&self, item: NewItem) -> DomainResult<Item> {
        self.inner.insert(item).await
    }

    async fn update(&self, update: ItemUpdate) -> DomainResult<Item> {
        self.inner.update(update).await
    }

    async fn delete(&self, kind: ItemKind, id: ItemId) -> DomainResult<()> {
        self.inner.delete(kind, id).await
    }

    async fn increment_view_count(&self, _kind: ItemKind, _id: ItemId) -> DomainResult<u64> {
        Err(DomainError::Persistence("counter write failed".into()))
    }
}
