use std::sync::Arc;

use crate::domain::user::{FollowRepository, User, UserRepository};
use crate::application::{ApplicationResult, dto::UserProfileDto};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    pub(super) async fn build_profile(&self, user: User) -> ApplicationResult<UserProfileDto> {
        let followers = self.follow_repo.followers(user.id).await?;
        let followings = self.follow_repo.followings(user.id).await?;
        Ok(UserProfileDto::from_parts(user, followers, followings))
    }
}
