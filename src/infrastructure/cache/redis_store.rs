// src/infrastructure/cache/redis_store.rs
use crate::application::error::ApplicationError;
use crate::application::ports::cache::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Create a Redis backed cache from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> Pool {
        self.pool.clone()
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, ApplicationError> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let mut conn = self.conn().await?;
        conn.get(key)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), ApplicationError> {
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ApplicationError> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<(), ApplicationError> {
        let mut conn = self.conn().await?;
        let keys: Vec<String> = conn
            .keys(pattern)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        if keys.is_empty() {
            return Ok(());
        }
        conn.del::<_, ()>(keys)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
