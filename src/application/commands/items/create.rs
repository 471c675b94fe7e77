// src/application/commands/items/create.rs
use super::ItemCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        item::{ItemContent, ItemKind, ItemTitle, NewItem},
        media::MediaRef,
    },
};

/// Fields stay optional so missing ones surface as field-level validation
/// errors rather than deserialization failures.
pub struct CreateItemCommand {
    pub kind: ItemKind,
    pub title: Option<String>,
    pub content: Option<String>,
    pub media: Option<String>,
}

fn required(field: &str, value: Option<String>) -> ApplicationResult<String> {
    value.ok_or_else(|| ApplicationError::validation(format!("{field}: this field is required")))
}

impl ItemCommandService {
    pub async fn create_item(
        &self,
        actor: &AuthenticatedUser,
        command: CreateItemCommand,
    ) -> ApplicationResult<ItemDetailDto> {
        let CreateItemCommand {
            kind,
            title,
            content,
            media,
        } = command;

        let title =
            ItemTitle::new(required("title", title)?).map_err(|e| ApplicationError::field("title", e))?;
        let content = ItemContent::new(required("content", content)?)
            .map_err(|e| ApplicationError::field("content", e))?;
        let media = match media {
            Some(raw) => Some(MediaRef::new(raw).map_err(|e| ApplicationError::field("media", e))?),
            None if kind.requires_media() => {
                return Err(ApplicationError::validation("media: this field is required"));
            }
            None => None,
        };

        let new_item = NewItem {
            kind,
            author_id: actor.id,
            title,
            content,
            media,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_item).await?;
        tracing::info!(kind = %kind, item_id = %created.id, author_id = actor.id.0, "item created");
        Ok(created.into())
    }
}
