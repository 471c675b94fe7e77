use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    session_revocation::SessionRevocationStore,
    time::Clock,
};
use crate::domain::user::{FollowRepository, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) session_store: Arc<dyn SessionRevocationStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            password_hasher,
            token_manager,
            session_store,
            clock,
        }
    }
}
