// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

/// Revocation markers shared across instances. Each marker expires together
/// with the longest-lived token it could apply to.
#[derive(Clone)]
pub struct RedisSessionRevocationStore {
    pool: Pool,
    marker_ttl: Duration,
}

impl RedisSessionRevocationStore {
    /// `url` is a redis URL such as `redis://:password@host:6379/0`.
    pub fn from_url(url: &str, marker_ttl: Duration) -> ApplicationResult<Self> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool, marker_ttl })
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

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(revoked_key(session_id), 1, self.marker_ttl.as_secs().max(1))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
