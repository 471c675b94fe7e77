// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use plaza_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use plaza_core::domain::user::UserId;

use super::time::fixed_now;

/// Bearer token the dummy manager accepts for `user_id`.
pub fn token_for(user_id: UserId) -> String {
    format!("user-{}", user_id.0)
}

/// Tokens are `user-<id>` and belong to session `session-<id>`; anything
/// else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix("user-")
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;

        let now = fixed_now();
        Ok(AuthenticatedUser {
            id,
            email: format!("user{}@example.com", id.0),
            username: format!("user{}", id.0),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            session_id: Some(format!("session-{}", id.0)),
        })
    }
}

/// Hashes by prefixing, verifies by comparison. Fast and deterministic.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
