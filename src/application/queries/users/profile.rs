use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct GetProfileByUsernameQuery {
    pub username: String,
}

impl UserQueryService {
    pub async fn get_own_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.build_profile(user).await
    }

    pub async fn get_profile_by_username(
        &self,
        query: GetProfileByUsernameQuery,
    ) -> ApplicationResult<UserProfileDto> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::not_found("user not found"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.build_profile(user).await
    }
}
