//! Persisted profile: a single serialized `StudentProfile` under one fixed key,
//! overwritten wholesale on every validated submission (last write wins).

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::profile::StudentProfile;

pub const DEFAULT_PROFILE_KEY: &str = "userProfile";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Profile serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn save(&self, profile: &StudentProfile) -> Result<(), StoreError>;
    async fn load(&self) -> Result<Option<StudentProfile>, StoreError>;
}

/// Redis-backed store used in production.
pub struct RedisProfileStore {
    client: redis::Client,
    key: String,
}

impl RedisProfileStore {
    pub fn open(redis_url: &str, key: String) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        info!("Redis profile store initialized (key: {key})");
        Ok(Self { client, key })
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn save(&self, profile: &StudentProfile) -> Result<(), StoreError> {
        let payload = serde_json::to_string(profile)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(&self.key, payload).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<StudentProfile>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(&self.key).await?;
        payload
            .map(|p| serde_json::from_str(&p))
            .transpose()
            .map_err(StoreError::from)
    }
}

/// Process-local store. Keeps the serialized form so it round-trips the same
/// way the Redis store does.
#[derive(Default)]
pub struct MemoryProfileStore {
    slot: RwLock<Option<String>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn save(&self, profile: &StudentProfile) -> Result<(), StoreError> {
        let payload = serde_json::to_string(profile)?;
        *self.slot.write().await = Some(payload);
        Ok(())
    }

    async fn load(&self) -> Result<Option<StudentProfile>, StoreError> {
        let slot = self.slot.read().await;
        slot.as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StoreError::from)
    }
}
