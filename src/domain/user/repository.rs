use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Usernames are not unique; returns the lowest id among matches.
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
}

/// Directed follow edges between users. Each (follower, following) pair
/// exists at most once.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Returns `false` when the edge already existed.
    async fn follow(
        &self,
        follower: UserId,
        following: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool>;

    /// Returns `false` when there was no edge to remove.
    async fn unfollow(&self, follower: UserId, following: UserId) -> DomainResult<bool>;

    async fn followers(&self, user: UserId) -> DomainResult<Vec<User>>;

    async fn followings(&self, user: UserId) -> DomainResult<Vec<User>>;
}
