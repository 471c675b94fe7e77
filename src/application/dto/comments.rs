use crate::domain::comment::Comment;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub item_id: i64,
    pub author: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub like_users: Vec<i64>,
    pub like_count: u64,
    pub is_liked: bool,
}

impl CommentDto {
    /// `is_liked` is computed for `viewer`; anonymous viewers get `false`.
    pub fn for_viewer(comment: Comment, viewer: Option<UserId>) -> Self {
        let is_liked = comment.is_liked_by(viewer);
        let like_count = comment.like_count() as u64;
        Self {
            id: comment.id.into(),
            item_id: comment.item_id.into(),
            author: comment.author.email.into(),
            content: comment.content.into_inner(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            like_users: comment.liked_by.into_iter().map(i64::from).collect(),
            like_count,
            is_liked,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentLikeDto {
    pub message: String,
    pub comment: CommentDto,
}
