use redis::aio::ConnectionManager;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::UserProfile;

/// Errors that can occur with profile store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// Key-value profile store
///
/// Redis holds the durable record; a moka read-through layer absorbs the
/// repeated reads every generation endpoint does. Profiles are replaced
/// wholesale on submission, so there is no partial-update path.
pub struct ProfileStore {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
}

impl ProfileStore {
    pub async fn new(redis_url: &str, l1_size: u64, l1_ttl_secs: u64) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let redis = redis::aio::ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(l1_ttl_secs))
            .build();

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            l1_cache,
        })
    }

    fn key(user_id: &str) -> String {
        format!("profile:{}", user_id)
    }

    /// Fetch a profile (L1 first, then Redis)
    pub async fn get(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        let key = Self::key(user_id);

        if let Some(bytes) = self.l1_cache.get(&key).await {
            tracing::trace!("L1 hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let mut conn = self.redis.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(&key)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        match value {
            Some(json) => {
                self.l1_cache
                    .insert(key.clone(), json.as_bytes().to_vec())
                    .await;
                Ok(serde_json::from_str(&json)?)
            }
            None => Err(StoreError::NotFound(user_id.to_string())),
        }
    }

    /// Replace a profile wholesale
    ///
    /// The durable tier carries no TTL; profiles live until deleted.
    pub async fn put(&self, user_id: &str, profile: &UserProfile) -> Result<(), StoreError> {
        let key = Self::key(user_id);
        let json = serde_json::to_string(profile)?;

        self.l1_cache
            .insert(key.clone(), json.as_bytes().to_vec())
            .await;

        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("SET")
            .arg(&key)
            .arg(json)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        tracing::debug!("Stored profile: {}", user_id);
        Ok(())
    }

    /// Delete a profile from both tiers
    pub async fn delete(&self, user_id: &str) -> Result<(), StoreError> {
        let key = Self::key(user_id);
        self.l1_cache.invalidate(&key).await;
        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("DEL")
            .arg(&key)
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }
}
