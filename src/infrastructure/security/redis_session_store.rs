// src/infrastructure/security/redis_session_store.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::session_revocation::SessionRevocationStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

/// Revocation list shared across processes. Keys expire with the token.
#[derive(Clone)]
pub struct RedisSessionRevocationStore {
    pool: Pool,
}

impl RedisSessionRevocationStore {
    pub fn from_url(url: &str) -> ApplicationResult<Self> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn revoked_key(session_id: &str) -> String {
    format!("revoked:session:{session_id}")
}

#[async_trait]
impl SessionRevocationStore for RedisSessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        conn.exists(revoked_key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn revoke(&self, session_id: &str, until: DateTime<Utc>) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("SET")
            .arg(revoked_key(session_id))
            .arg(1)
            .arg("EXAT")
            .arg(until.timestamp().max(1))
            .query_async::<()>(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
