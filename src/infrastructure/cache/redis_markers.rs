// src/infrastructure/cache/redis_markers.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::view_markers::ViewMarkerStore,
};
use crate::domain::item::ViewKey;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use std::time::Duration;

/// Marker store shared across processes. Redis owns the expiry.
#[derive(Clone)]
pub struct RedisViewMarkerStore {
    pool: Pool,
}

impl RedisViewMarkerStore {
    /// Build a pool from a redis URL (e.g. `redis://:password@host:6379/0`).
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

#[async_trait]
impl ViewMarkerStore for RedisViewMarkerStore {
    async fn mark_if_absent(&self, key: &ViewKey, ttl: Duration) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;

        // SET NX replies OK when the key was created and nil otherwise.
        let reply: Option<String> = redis::cmd("SET")
            .arg(key.as_str())
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(reply.is_some())
    }
}
