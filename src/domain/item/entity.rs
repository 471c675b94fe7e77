// src/domain/item/entity.rs
use crate::domain::item::value_objects::{ItemContent, ItemId, ItemKind, ItemTitle};
use crate::domain::media::MediaRef;
use crate::domain::user::{AuthorRef, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub author: AuthorRef,
    pub title: ItemTitle,
    pub content: ItemContent,
    pub media: Option<MediaRef>,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author.id == user_id
    }

    /// Adopt a freshly persisted counter value. The counter never moves
    /// backwards.
    pub fn observe_view_count(&mut self, persisted: u64) {
        self.view_count = self.view_count.max(persisted);
    }
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub kind: ItemKind,
    pub author_id: UserId,
    pub title: ItemTitle,
    pub content: ItemContent,
    pub media: Option<MediaRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ItemUpdate {
    pub kind: ItemKind,
    pub id: ItemId,
    pub title: Option<ItemTitle>,
    pub content: Option<ItemContent>,
    pub media: Option<MediaRef>,
    pub updated_at: DateTime<Utc>,
}

impl ItemUpdate {
    pub fn new(kind: ItemKind, id: ItemId, updated_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            id,
            title: None,
            content: None,
            media: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ItemTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ItemContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_media(mut self, media: MediaRef) -> Self {
        self.media = Some(media);
        self
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(content) = &self.content {
            item.content = content.clone();
        }
        if let Some(media) = &self.media {
            item.media = Some(media.clone());
        }
        item.updated_at = self.updated_at;
    }
}
