// src/application/commands/items/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::item::{
        Item, ItemId, ItemKind, ItemReadRepository, ItemWriteRepository,
        specifications::CanModifyItemSpec,
    },
};

pub struct ItemCommandService {
    pub(super) write_repo: Arc<dyn ItemWriteRepository>,
    pub(super) read_repo: Arc<dyn ItemReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ItemCommandService {
    pub fn new(
        write_repo: Arc<dyn ItemWriteRepository>,
        read_repo: Arc<dyn ItemReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    /// Load an item and check that `actor` owns it.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        kind: ItemKind,
        id: i64,
        action: &str,
    ) -> ApplicationResult<Item> {
        let id = ItemId::new(id).map_err(|_| ApplicationError::not_found(kind.not_found_message()))?;
        let item = self
            .read_repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(kind.not_found_message()))?;

        if !CanModifyItemSpec::new(&item, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only the author can {action} this {kind}"
            )));
        }

        Ok(item)
    }
}
