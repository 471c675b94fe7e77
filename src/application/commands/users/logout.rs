use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl UserCommandService {
    /// End the caller's session. Tokens without a session id cannot be
    /// revoked individually and are refused.
    pub async fn logout(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        let session_id = user
            .session_id
            .as_deref()
            .ok_or_else(|| ApplicationError::validation("token carries no session"))?;

        self.session_store
            .revoke(session_id, user.expires_at)
            .await?;
        tracing::info!(user_id = user.id.0, "session revoked");
        Ok(())
    }
}
