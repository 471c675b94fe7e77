use crate::domain::item::{Item, ItemKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Listing row. `author` is the owner's id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemSummaryDto {
    pub id: i64,
    pub author: i64,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub view_count: u64,
}

impl From<Item> for ItemSummaryDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.into(),
            author: item.author.id.into(),
            title: item.title.into_inner(),
            created_at: item.created_at,
            view_count: item.view_count,
        }
    }
}

/// Full item. `author` is the owner's email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDetailDto {
    pub id: i64,
    pub kind: ItemKind,
    pub author: String,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub media: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub view_count: u64,
}

impl From<Item> for ItemDetailDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.into(),
            kind: item.kind,
            author: item.author.email.into(),
            author_id: item.author.id.into(),
            title: item.title.into_inner(),
            content: item.content.into_inner(),
            media: item.media.map(|media| media.into_inner()),
            created_at: item.created_at,
            updated_at: item.updated_at,
            view_count: item.view_count,
        }
    }
}
