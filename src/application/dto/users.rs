use crate::domain::user::{Gender, User};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            username: user.username.into(),
            name: user.name.into(),
            birth_date: user.birth_date,
            gender: user.gender,
            bio: user.bio,
            profile_image: user.profile_image.map(|image| image.into_inner()),
            created_at: user.created_at,
        }
    }
}

/// Compact user entry used in follower/following lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub profile_image: Option<String>,
}

impl From<User> for FollowDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            username: user.username.into(),
            profile_image: user.profile_image.map(|image| image.into_inner()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub followings: Vec<FollowDto>,
    pub followers: Vec<FollowDto>,
    pub follower_count: u64,
    pub following_count: u64,
}

impl UserProfileDto {
    pub fn from_parts(user: User, followers: Vec<User>, followings: Vec<User>) -> Self {
        let follower_count = followers.len() as u64;
        let following_count = followings.len() as u64;
        Self {
            id: user.id.into(),
            email: user.email.into(),
            username: user.username.into(),
            name: user.name.into(),
            birth_date: user.birth_date,
            gender: user.gender,
            bio: user.bio,
            profile_image: user.profile_image.map(|image| image.into_inner()),
            followings: followings.into_iter().map(FollowDto::from).collect(),
            followers: followers.into_iter().map(FollowDto::from).collect(),
            follower_count,
            following_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowToggleDto {
    pub message: String,
    pub is_following: bool,
    pub follower_count: u64,
    pub following_count: u64,
}
