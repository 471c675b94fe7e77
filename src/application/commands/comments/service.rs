// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::CommentRepository,
        item::{ItemId, ItemKind, ItemReadRepository},
    },
};

pub struct CommentCommandService {
    pub(super) item_repo: Arc<dyn ItemReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        item_repo: Arc<dyn ItemReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            item_repo,
            comment_repo,
            clock,
        }
    }

    pub(super) async fn existing_item(&self, kind: ItemKind, id: i64) -> ApplicationResult<ItemId> {
        let id = ItemId::new(id).map_err(|_| ApplicationError::not_found(kind.not_found_message()))?;
        match self.item_repo.find_by_id(kind, id).await? {
            Some(item) => Ok(item.id),
            None => Err(ApplicationError::not_found(kind.not_found_message())),
        }
    }
}
