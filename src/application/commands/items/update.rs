use super::ItemCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        item::{ItemContent, ItemKind, ItemTitle, ItemUpdate},
        media::MediaRef,
    },
};

/// Partial update; absent fields keep their current value.
pub struct UpdateItemCommand {
    pub kind: ItemKind,
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub media: Option<String>,
}

impl ItemCommandService {
    pub async fn update_item(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateItemCommand,
    ) -> ApplicationResult<ItemDetailDto> {
        let UpdateItemCommand {
            kind,
            id,
            title,
            content,
            media,
        } = command;

        let item = self.load_owned(actor, kind, id, "update").await?;

        let mut update = ItemUpdate::new(kind, item.id, self.clock.now());
        if let Some(title) = title {
            update = update
                .with_title(ItemTitle::new(title).map_err(|e| ApplicationError::field("title", e))?);
        }
        if let Some(content) = content {
            update = update.with_content(
                ItemContent::new(content).map_err(|e| ApplicationError::field("content", e))?,
            );
        }
        if let Some(media) = media {
            update = update
                .with_media(MediaRef::new(media).map_err(|e| ApplicationError::field("media", e))?);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
