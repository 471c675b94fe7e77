// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, postgres_item::item_table};
use crate::domain::comment::{Comment, CommentContent, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::user::{AuthorRef, Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::{BTreeSet, HashMap};

fn comment_table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Article => "article_comments",
        ItemKind::Product => "product_comments",
    }
}

fn like_table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Article => "article_comment_likes",
        ItemKind::Product => "product_comment_likes",
    }
}

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_from(kind: ItemKind) -> String {
        format!(
            "SELECT c.id, c.item_id, c.author_id, u.email AS author_email, c.content,
                    c.created_at, c.updated_at
             FROM {} c JOIN users u ON u.id = c.author_id",
            comment_table(kind)
        )
    }

    /// Load like-sets for a batch of comments in one round trip.
    async fn likes_for(
        &self,
        kind: ItemKind,
        ids: &[i64],
    ) -> DomainResult<HashMap<i64, BTreeSet<UserId>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT comment_id, user_id FROM {} WHERE comment_id = ANY($1)",
            like_table(kind)
        );
        let rows: Vec<(i64, i64)> = sqlx::query_as(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut likes: HashMap<i64, BTreeSet<UserId>> = HashMap::new();
        for (comment_id, user_id) in rows {
            likes
                .entry(comment_id)
                .or_default()
                .insert(UserId::new(user_id)?);
        }
        Ok(likes)
    }

    async fn hydrate(&self, kind: ItemKind, rows: Vec<CommentRow>) -> DomainResult<Vec<Comment>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut likes = self.likes_for(kind, &ids).await?;
        rows.into_iter()
            .map(|row| {
                let liked_by = likes.remove(&row.id).unwrap_or_default();
                row.into_comment(kind, liked_by)
            })
            .collect()
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    item_id: i64,
    author_id: i64,
    author_email: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self, kind: ItemKind, liked_by: BTreeSet<UserId>) -> DomainResult<Comment> {
        Ok(Comment {
            id: CommentId::new(self.id)?,
            kind,
            item_id: ItemId::new(self.item_id)?,
            author: AuthorRef {
                id: UserId::new(self.author_id)?,
                email: Email::new(self.author_email)?,
            },
            content: CommentContent::new(self.content)?,
            liked_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_item(&self, kind: ItemKind, item_id: ItemId) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "{} WHERE c.item_id = $1 ORDER BY c.id ASC",
            Self::select_from(kind)
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(item_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(kind, rows).await
    }

    async fn find_in_item(
        &self,
        kind: ItemKind,
        item_id: ItemId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let sql = format!(
            "{} WHERE c.item_id = $1 AND c.id = $2",
            Self::select_from(kind)
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(item_id))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.hydrate(kind, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            kind,
            item_id,
            author_id,
            content,
            created_at,
        } = comment;

        let sql = format!(
            "INSERT INTO {} (item_id, author_id, content, created_at, updated_at)
             SELECT $1, $2, $3, $4, $4 WHERE EXISTS (SELECT 1 FROM {} WHERE id = $1)
             RETURNING id",
            comment_table(kind),
            item_table(kind)
        );
        let id: Option<i64> = sqlx::query_scalar(&sql)
            .bind(i64::from(item_id))
            .bind(i64::from(author_id))
            .bind(content.as_str())
            .bind(created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let id = id.ok_or_else(|| DomainError::NotFound(kind.not_found_message()))?;
        self.find_in_item(kind, item_id, CommentId::new(id)?)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted comment vanished".into()))
    }

    async fn add_like(&self, kind: ItemKind, id: CommentId, user: UserId) -> DomainResult<bool> {
        let sql = format!(
            "INSERT INTO {} (comment_id, user_id) VALUES ($1, $2)
             ON CONFLICT (comment_id, user_id) DO NOTHING",
            like_table(kind)
        );
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_like(
        &self,
        kind: ItemKind,
        id: CommentId,
        user: UserId,
    ) -> DomainResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE comment_id = $1 AND user_id = $2",
            like_table(kind)
        );
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
