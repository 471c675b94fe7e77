use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        media::MediaRef,
        user::{Gender, PersonName, UserUpdate, Username},
    },
};
use chrono::NaiveDate;

#[derive(Default)]
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(username) = command.username {
            update = update.with_username(
                Username::new(username).map_err(|e| ApplicationError::field("username", e))?,
            );
        }
        if let Some(name) = command.name {
            update =
                update.with_name(PersonName::new(name).map_err(|e| ApplicationError::field("name", e))?);
        }
        if let Some(birth_date) = command.birth_date {
            update = update.with_birth_date(birth_date);
        }
        if let Some(gender) = command.gender {
            update = update.with_gender(gender);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(image) = command.profile_image {
            update = update.with_profile_image(
                MediaRef::new(image).map_err(|e| ApplicationError::field("profile_image", e))?,
            );
        }

        let user = if update.is_empty() {
            self.user_repo
                .find_by_id(actor.id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("user not found"))?
        } else {
            self.user_repo.update(update).await?
        };

        Ok(user.into())
    }
}
