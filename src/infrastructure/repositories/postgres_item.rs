// src/infrastructure/repositories/postgres_item.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{
    Item, ItemContent, ItemId, ItemKind, ItemListing, ItemOrdering, ItemReadRepository, ItemTitle,
    ItemUpdate, ItemWriteRepository, NewItem,
};
use crate::domain::media::MediaRef;
use crate::domain::user::{AuthorRef, Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Articles and products live in sibling tables with identical shape.
pub(super) fn item_table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Article => "articles",
        ItemKind::Product => "products",
    }
}

/// `ORDER BY` body over the `i` alias used by listing queries.
fn order_by(ordering: ItemOrdering) -> &'static str {
    match ordering {
        ItemOrdering::Newest => "i.id DESC",
        ItemOrdering::CreatedAtAsc => "i.created_at ASC, i.id ASC",
        ItemOrdering::CreatedAtDesc => "i.created_at DESC, i.id ASC",
        ItemOrdering::ViewCountAsc => "i.view_count ASC, i.id ASC",
        ItemOrdering::ViewCountDesc => "i.view_count DESC, i.id ASC",
    }
}

#[derive(Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_from(kind: ItemKind) -> String {
        format!(
            "SELECT i.id, i.author_id, u.email AS author_email, i.title, i.content, i.media,
                    i.view_count, i.created_at, i.updated_at
             FROM {} i JOIN users u ON u.id = i.author_id",
            item_table(kind)
        )
    }

    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, listing: &ItemListing) {
        if let Some(term) = &listing.search {
            let pattern = term.like_pattern();
            builder.push(" WHERE (i.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR i.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn fetch(&self, kind: ItemKind, id: ItemId) -> DomainResult<Option<Item>> {
        let sql = format!("{} WHERE i.id = $1", Self::select_from(kind));
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_item(kind)).transpose()
    }
}

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    author_id: i64,
    author_email: String,
    title: String,
    content: String,
    media: Option<String>,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_item(self, kind: ItemKind) -> DomainResult<Item> {
        Ok(Item {
            id: ItemId::new(self.id)?,
            kind,
            author: AuthorRef {
                id: UserId::new(self.author_id)?,
                email: Email::new(self.author_email)?,
            },
            title: ItemTitle::new(self.title)?,
            content: ItemContent::new(self.content)?,
            media: self.media.map(MediaRef::new).transpose()?,
            view_count: counter(self.view_count),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn counter(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or_default()
}

#[async_trait]
impl ItemReadRepository for PostgresItemRepository {
    async fn find_by_id(&self, kind: ItemKind, id: ItemId) -> DomainResult<Option<Item>> {
        self.fetch(kind, id).await
    }

    async fn count(&self, listing: &ItemListing) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT COUNT(1) FROM {} i",
            item_table(listing.kind)
        ));
        Self::push_filters(&mut builder, listing);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(counter)
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        listing: &ItemListing,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Item>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(Self::select_from(listing.kind));
        Self::push_filters(&mut builder, listing);

        builder.push(" ORDER BY ");
        builder.push(order_by(listing.ordering));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| row.into_item(listing.kind))
            .collect()
    }
}

#[async_trait]
impl ItemWriteRepository for PostgresItemRepository {
    async fn insert(&self, item: NewItem) -> DomainResult<Item> {
        let NewItem {
            kind,
            author_id,
            title,
            content,
            media,
            created_at,
        } = item;

        let sql = format!(
            "INSERT INTO {} (author_id, title, content, media, view_count, created_at, updated_at)
             VALUES ($1, $2, $3, $4, 0, $5, $5)
             RETURNING id",
            item_table(kind)
        );
        let id: i64 = sqlx::query_scalar(&sql)
            .bind(i64::from(author_id))
            .bind(title.into_inner())
            .bind(content.into_inner())
            .bind(media.map(MediaRef::into_inner))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.fetch(kind, ItemId::new(id)?)
            .await?
            .ok_or_else(|| DomainError::Persistence(format!("inserted {kind} vanished")))
    }

    async fn update(&self, update: ItemUpdate) -> DomainResult<Item> {
        let ItemUpdate {
            kind,
            id,
            title,
            content,
            media,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("UPDATE {} SET updated_at = ", item_table(kind)));
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(media) = media {
            builder.push(", media = ");
            builder.push_bind(media.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(kind.not_found_message()));
        }

        self.fetch(kind, id)
            .await?
            .ok_or_else(|| DomainError::NotFound(kind.not_found_message()))
    }

    async fn delete(&self, kind: ItemKind, id: ItemId) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", item_table(kind));
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(kind.not_found_message()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, kind: ItemKind, id: ItemId) -> DomainResult<u64> {
        let sql = format!(
            "UPDATE {} SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
            item_table(kind)
        );
        let value: Option<i64> = sqlx::query_scalar(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        value
            .map(counter)
            .ok_or_else(|| DomainError::NotFound(kind.not_found_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_targets_the_listing_alias() {
        let inputs = [
            None,
            Some("created_at"),
            Some("-created_at"),
            Some("view_count"),
            Some("-view_count"),
        ];
        for raw in inputs {
            let clause = order_by(ItemOrdering::parse(raw));
            assert!(
                clause.split(", ").all(|part| part.starts_with("i.")),
                "unaliased column in {clause}"
            );
        }
        assert_eq!(order_by(ItemOrdering::Newest), "i.id DESC");
        assert_eq!(
            order_by(ItemOrdering::ViewCountDesc),
            "i.view_count DESC, i.id ASC"
        );
    }
}
