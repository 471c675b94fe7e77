use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FollowToggleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct ToggleFollowCommand {
    pub target_id: i64,
}

impl UserCommandService {
    /// Follow `target_id`, or unfollow when already following.
    ///
    /// Counts in the response describe the target user.
    pub async fn toggle_follow(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleFollowCommand,
    ) -> ApplicationResult<FollowToggleDto> {
        let not_found = || ApplicationError::not_found("user not found");
        let target_id = UserId::new(command.target_id).map_err(|_| not_found())?;

        if target_id == actor.id {
            return Err(ApplicationError::validation("you cannot follow yourself"));
        }

        let target = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(not_found)?;

        let is_following = if self.follow_repo.unfollow(actor.id, target.id).await? {
            false
        } else {
            self.follow_repo
                .follow(actor.id, target.id, self.clock.now())
                .await?;
            true
        };

        let follower_count = self.follow_repo.followers(target.id).await?.len() as u64;
        let following_count = self.follow_repo.followings(target.id).await?.len() as u64;

        let message = if is_following {
            format!("you are now following {}", target.username)
        } else {
            format!("you unfollowed {}", target.username)
        };

        Ok(FollowToggleDto {
            message,
            is_following,
            follower_count,
            following_count,
        })
    }
}
