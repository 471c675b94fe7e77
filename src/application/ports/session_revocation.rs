// src/application/ports/session_revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Sessions ended by logout. An entry only has to outlive the tokens that
/// carry its session id.
#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke `session_id` until `until`, normally the token's expiry.
    async fn revoke(&self, session_id: &str, until: DateTime<Utc>) -> ApplicationResult<()>;
}
