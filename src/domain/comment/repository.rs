use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one item by ascending id.
    async fn list_for_item(&self, kind: ItemKind, item_id: ItemId) -> DomainResult<Vec<Comment>>;

    /// A comment only resolves through the item it belongs to.
    async fn find_in_item(
        &self,
        kind: ItemKind,
        item_id: ItemId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Returns `false` when the user was already in the like-set.
    async fn add_like(&self, kind: ItemKind, id: CommentId, user: UserId) -> DomainResult<bool>;

    /// Returns `false` when the user was not in the like-set.
    async fn remove_like(&self, kind: ItemKind, id: CommentId, user: UserId)
    -> DomainResult<bool>;
}
