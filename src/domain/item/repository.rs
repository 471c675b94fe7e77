use crate::domain::errors::DomainResult;
use crate::domain::item::entity::{Item, ItemUpdate, NewItem};
use crate::domain::item::listing::ItemListing;
use crate::domain::item::value_objects::{ItemId, ItemKind};
use async_trait::async_trait;

#[async_trait]
pub trait ItemReadRepository: Send + Sync {
    async fn find_by_id(&self, kind: ItemKind, id: ItemId) -> DomainResult<Option<Item>>;

    /// Number of items matching the listing's filters.
    async fn count(&self, listing: &ItemListing) -> DomainResult<u64>;

    /// One page of matching items in the listing's order.
    async fn list_page(
        &self,
        listing: &ItemListing,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Item>>;
}

#[async_trait]
pub trait ItemWriteRepository: Send + Sync {
    async fn insert(&self, item: NewItem) -> DomainResult<Item>;

    async fn update(&self, update: ItemUpdate) -> DomainResult<Item>;

    async fn delete(&self, kind: ItemKind, id: ItemId) -> DomainResult<()>;

    /// Atomically add one to the stored counter and return the new value.
    async fn increment_view_count(&self, kind: ItemKind, id: ItemId) -> DomainResult<u64>;
}
