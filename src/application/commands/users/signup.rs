// src/application/commands/users/signup.rs
use super::{
    UserCommandService,
    password::{ensure_confirmation, validate_password},
};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        media::MediaRef,
        user::{Email, Gender, NewUser, PasswordHash, PersonName, Username},
    },
};
use chrono::NaiveDate;

pub struct SignupCommand {
    pub email: String,
    pub username: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
    pub password2: String,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

impl UserCommandService {
    pub async fn signup(&self, command: SignupCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email).map_err(|e| ApplicationError::field("email", e))?;
        let username =
            Username::new(command.username).map_err(|e| ApplicationError::field("username", e))?;
        let name = PersonName::new(command.name).map_err(|e| ApplicationError::field("name", e))?;
        let birth_date = command
            .birth_date
            .ok_or_else(|| ApplicationError::validation("birth_date: this field is required"))?;
        let profile_image = command
            .profile_image
            .map(MediaRef::new)
            .transpose()
            .map_err(|e| ApplicationError::field("profile_image", e))?;

        ensure_confirmation(&command.password, &command.password2)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .user_repo
            .insert(NewUser {
                email,
                username,
                name,
                birth_date,
                gender: command.gender,
                bio: command.bio,
                profile_image,
                password_hash,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = user.id.0, "account created");
        Ok(user.into())
    }
}
