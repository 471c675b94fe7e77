// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::user::{AuthorRef, UserId};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub author: AuthorRef,
    pub content: CommentContent,
    pub liked_by: BTreeSet<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Anonymous viewers never count as having liked.
    pub fn is_liked_by(&self, user_id: Option<UserId>) -> bool {
        user_id.is_some_and(|id| self.liked_by.contains(&id))
    }
}

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

impl LikeState {
    pub fn is_liked(&self) -> bool {
        matches!(self, LikeState::Liked)
    }

    pub fn message(&self) -> &'static str {
        match self {
            LikeState::Liked => "comment liked",
            LikeState::Unliked => "comment like removed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}
