use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};
use uuid::Uuid;

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.email, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
            username: user.username.to_string(),
            session_id: Some(Uuid::new_v4().to_string()),
        };
        let token = self.token_manager.issue(subject).await?;

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: String,
        password: &str,
    ) -> ApplicationResult<User> {
        // Malformed and unknown emails fail the same way as a bad password.
        let email = Email::new(email).map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
