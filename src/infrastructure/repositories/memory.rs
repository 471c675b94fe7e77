// src/infrastructure/repositories/memory.rs
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{
    Item, ItemId, ItemKind, ItemListing, ItemReadRepository, ItemUpdate, ItemWriteRepository,
    NewItem,
};
use crate::domain::user::{
    AuthorRef, Email, FollowRepository, NewUser, User, UserId, UserRepository, UserUpdate,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct State {
    next_user_id: i64,
    next_item_id: HashMap<ItemKind, i64>,
    next_comment_id: HashMap<ItemKind, i64>,
    users: BTreeMap<UserId, User>,
    follows: BTreeMap<(UserId, UserId), DateTime<Utc>>,
    items: BTreeMap<(ItemKind, ItemId), StoredItem>,
    comments: BTreeMap<(ItemKind, CommentId), StoredComment>,
}

#[derive(Clone)]
struct StoredItem {
    item: Item,
    author_id: UserId,
}

#[derive(Clone)]
struct StoredComment {
    comment: Comment,
    author_id: UserId,
}

fn bump(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl State {
    fn author(&self, id: UserId) -> DomainResult<AuthorRef> {
        self.users
            .get(&id)
            .map(User::author_ref)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))
    }

    /// Author emails are resolved at read time so profile changes show up
    /// on existing items, as a join would.
    fn resolve_item(&self, stored: &StoredItem) -> DomainResult<Item> {
        let mut item = stored.item.clone();
        item.author = self.author(stored.author_id)?;
        Ok(item)
    }

    fn resolve_comment(&self, stored: &StoredComment) -> DomainResult<Comment> {
        let mut comment = stored.comment.clone();
        comment.author = self.author(stored.author_id)?;
        Ok(comment)
    }

    fn items_of(&self, listing: &ItemListing) -> DomainResult<Vec<Item>> {
        self.items
            .values()
            .filter(|stored| listing.matches(&stored.item))
            .map(|stored| self.resolve_item(stored))
            .collect()
    }

    fn remove_item(&mut self, kind: ItemKind, id: ItemId) {
        self.items.remove(&(kind, id));
        self.comments
            .retain(|(k, _), stored| !(*k == kind && stored.comment.item_id == id));
    }
}

/// Process-local backend implementing every storage port.
///
/// All state sits behind one mutex, so each operation is atomic with respect
/// to the others.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        Ok(self.state.lock()?)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let id = UserId::new(bump(&mut state.next_user_id))?;
        let user = User {
            id,
            email: new_user.email,
            username: new_user.username,
            name: new_user.name,
            birth_date: new_user.birth_date,
            gender: new_user.gender,
            bio: new_user.bio,
            profile_image: new_user.profile_image,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.lock()?;
        let user = state
            .users
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        update.apply_to(user);
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        // BTreeMap iterates by ascending id, so the first match is the oldest.
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn follow(
        &self,
        follower: UserId,
        following: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        if follower == following {
            return Err(DomainError::Validation("you cannot follow yourself".into()));
        }
        let mut state = self.lock()?;
        if !state.users.contains_key(&follower) || !state.users.contains_key(&following) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        if state.follows.contains_key(&(follower, following)) {
            return Ok(false);
        }
        state.follows.insert((follower, following), at);
        Ok(true)
    }

    async fn unfollow(&self, follower: UserId, following: UserId) -> DomainResult<bool> {
        Ok(self
            .lock()?
            .follows
            .remove(&(follower, following))
            .is_some())
    }

    async fn followers(&self, user: UserId) -> DomainResult<Vec<User>> {
        let state = self.lock()?;
        let mut edges: Vec<_> = state
            .follows
            .iter()
            .filter(|((_, following), _)| *following == user)
            .map(|((follower, _), at)| (*at, *follower))
            .collect();
        edges.sort();
        Ok(edges
            .into_iter()
            .filter_map(|(_, id)| state.users.get(&id).cloned())
            .collect())
    }

    async fn followings(&self, user: UserId) -> DomainResult<Vec<User>> {
        let state = self.lock()?;
        let mut edges: Vec<_> = state
            .follows
            .iter()
            .filter(|((follower, _), _)| *follower == user)
            .map(|((_, following), at)| (*at, *following))
            .collect();
        edges.sort();
        Ok(edges
            .into_iter()
            .filter_map(|(_, id)| state.users.get(&id).cloned())
            .collect())
    }
}

#[async_trait]
impl ItemReadRepository for InMemoryStore {
    async fn find_by_id(&self, kind: ItemKind, id: ItemId) -> DomainResult<Option<Item>> {
        let state = self.lock()?;
        state
            .items
            .get(&(kind, id))
            .map(|stored| state.resolve_item(stored))
            .transpose()
    }

    async fn count(&self, listing: &ItemListing) -> DomainResult<u64> {
        let state = self.lock()?;
        Ok(state
            .items
            .values()
            .filter(|stored| listing.matches(&stored.item))
            .count() as u64)
    }

    async fn list_page(
        &self,
        listing: &ItemListing,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Item>> {
        let mut items = self.lock()?.items_of(listing)?;
        items.sort_by(|a, b| listing.ordering.compare(a, b));
        Ok(items
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl ItemWriteRepository for InMemoryStore {
    async fn insert(&self, item: NewItem) -> DomainResult<Item> {
        let mut state = self.lock()?;
        let author = state.author(item.author_id)?;
        let id = ItemId::new(bump(state.next_item_id.entry(item.kind).or_default()))?;

        let created = Item {
            id,
            kind: item.kind,
            author,
            title: item.title,
            content: item.content,
            media: item.media,
            view_count: 0,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        state.items.insert(
            (item.kind, id),
            StoredItem {
                item: created.clone(),
                author_id: item.author_id,
            },
        );
        Ok(created)
    }

    async fn update(&self, update: ItemUpdate) -> DomainResult<Item> {
        let mut state = self.lock()?;
        let stored = state
            .items
            .get_mut(&(update.kind, update.id))
            .ok_or_else(|| DomainError::NotFound(update.kind.not_found_message()))?;
        update.apply_to(&mut stored.item);
        let stored = stored.clone();
        state.resolve_item(&stored)
    }

    async fn delete(&self, kind: ItemKind, id: ItemId) -> DomainResult<()> {
        let mut state = self.lock()?;
        if !state.items.contains_key(&(kind, id)) {
            return Err(DomainError::NotFound(kind.not_found_message()));
        }
        state.remove_item(kind, id);
        Ok(())
    }

    async fn increment_view_count(&self, kind: ItemKind, id: ItemId) -> DomainResult<u64> {
        let mut state = self.lock()?;
        let stored = state
            .items
            .get_mut(&(kind, id))
            .ok_or_else(|| DomainError::NotFound(kind.not_found_message()))?;
        stored.item.view_count += 1;
        Ok(stored.item.view_count)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_item(&self, kind: ItemKind, item_id: ItemId) -> DomainResult<Vec<Comment>> {
        let state = self.lock()?;
        let mut comments = state
            .comments
            .iter()
            .filter(|((k, _), stored)| *k == kind && stored.comment.item_id == item_id)
            .map(|(_, stored)| state.resolve_comment(stored))
            .collect::<DomainResult<Vec<_>>>()?;
        comments.sort_by_key(|comment| comment.id);
        Ok(comments)
    }

    async fn find_in_item(
        &self,
        kind: ItemKind,
        item_id: ItemId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let state = self.lock()?;
        state
            .comments
            .get(&(kind, id))
            .filter(|stored| stored.comment.item_id == item_id)
            .map(|stored| state.resolve_comment(stored))
            .transpose()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.lock()?;
        if !state.items.contains_key(&(comment.kind, comment.item_id)) {
            return Err(DomainError::NotFound(comment.kind.not_found_message()));
        }
        let author = state.author(comment.author_id)?;
        let id = CommentId::new(bump(state.next_comment_id.entry(comment.kind).or_default()))?;

        let created = Comment {
            id,
            kind: comment.kind,
            item_id: comment.item_id,
            author,
            content: comment.content,
            liked_by: BTreeSet::new(),
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(
            (comment.kind, id),
            StoredComment {
                comment: created.clone(),
                author_id: comment.author_id,
            },
        );
        Ok(created)
    }

    async fn add_like(&self, kind: ItemKind, id: CommentId, user: UserId) -> DomainResult<bool> {
        let mut state = self.lock()?;
        let stored = state
            .comments
            .get_mut(&(kind, id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Ok(stored.comment.liked_by.insert(user))
    }

    async fn remove_like(
        &self,
        kind: ItemKind,
        id: CommentId,
        user: UserId,
    ) -> DomainResult<bool> {
        let mut state = self.lock()?;
        let stored = state
            .comments
            .get_mut(&(kind, id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Ok(stored.comment.liked_by.remove(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{ItemContent, ItemOrdering, ItemTitle, SearchTerm};
    use crate::domain::user::{PasswordHash, PersonName};
    use chrono::NaiveDate;

    async fn seed_user(store: &InMemoryStore, email: &str, nickname: &str) -> User {
        UserRepository::insert(
            store,
            NewUser {
                email: Email::new(email).unwrap(),
                username: Username::new(nickname).unwrap(),
                name: PersonName::new("Test User").unwrap(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                gender: None,
                bio: None,
                profile_image: None,
                password_hash: PasswordHash::new("hash").unwrap(),
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap()
    }

    async fn seed_item(store: &InMemoryStore, author: UserId, title: &str) -> Item {
        ItemWriteRepository::insert(
            store,
            NewItem {
                kind: ItemKind::Article,
                author_id: author,
                title: ItemTitle::new(title).unwrap(),
                content: ItemContent::new("body").unwrap(),
                media: None,
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = InMemoryStore::new();
        seed_user(&store, "a@example.com", "a").await;
        let err = UserRepository::insert(
            &store,
            NewUser {
                email: Email::new("a@example.com").unwrap(),
                username: Username::new("b").unwrap(),
                name: PersonName::new("B").unwrap(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                gender: None,
                bio: None,
                profile_image: None,
                password_hash: PasswordHash::new("hash").unwrap(),
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn username_lookup_prefers_lowest_id() {
        let store = InMemoryStore::new();
        let first = seed_user(&store, "a@example.com", "twin").await;
        seed_user(&store, "b@example.com", "twin").await;

        let found = store
            .find_by_username(&Username::new("twin").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn listing_filters_and_orders() {
        let store = InMemoryStore::new();
        let user = seed_user(&store, "a@example.com", "a").await;
        seed_item(&store, user.id, "Rust tips").await;
        seed_item(&store, user.id, "Cooking").await;
        seed_item(&store, user.id, "more rust").await;

        let listing = ItemListing::new(ItemKind::Article)
            .with_search(SearchTerm::parse(Some("RUST")))
            .with_ordering(ItemOrdering::Newest);
        assert_eq!(store.count(&listing).await.unwrap(), 2);

        let page = store.list_page(&listing, 0, 10).await.unwrap();
        let titles: Vec<_> = page.iter().map(|i| i.title.as_str().to_string()).collect();
        assert_eq!(titles, vec!["more rust", "Rust tips"]);
    }

    #[tokio::test]
    async fn deleting_an_item_drops_its_comments() {
        let store = InMemoryStore::new();
        let user = seed_user(&store, "a@example.com", "a").await;
        let item = seed_item(&store, user.id, "Post").await;
        CommentRepository::insert(
            &store,
            NewComment {
                kind: ItemKind::Article,
                item_id: item.id,
                author_id: user.id,
                content: crate::domain::comment::CommentContent::new("hi").unwrap(),
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap();

        ItemWriteRepository::delete(&store, ItemKind::Article, item.id)
            .await
            .unwrap();
        let comments = store
            .list_for_item(ItemKind::Article, item.id)
            .await
            .unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn like_set_membership_is_idempotent() {
        let store = InMemoryStore::new();
        let user = seed_user(&store, "a@example.com", "a").await;
        let item = seed_item(&store, user.id, "Post").await;
        let comment = CommentRepository::insert(
            &store,
            NewComment {
                kind: ItemKind::Article,
                item_id: item.id,
                author_id: user.id,
                content: crate::domain::comment::CommentContent::new("hi").unwrap(),
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap();

        assert!(store.add_like(ItemKind::Article, comment.id, user.id).await.unwrap());
        assert!(!store.add_like(ItemKind::Article, comment.id, user.id).await.unwrap());
        assert!(store.remove_like(ItemKind::Article, comment.id, user.id).await.unwrap());
        assert!(!store.remove_like(ItemKind::Article, comment.id, user.id).await.unwrap());
    }
}
