//! Redis-backed link store.

use crate::domain::StoreError;
use crate::domain::repositories::LinkStore;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Link store on top of Redis string keys with `EX` expiry.
///
/// Uses a multiplexed `ConnectionManager` that reconnects on its own; cloning
/// it per call is cheap. Unlike a cache, every error is propagated: the store
/// is the source of truth.
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - Namespace prepended to every code (e.g., `"url:"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Backend(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            conn: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        conn.exists::<_, bool>(&key)
            .await
            .map_err(StoreError::backend)
    }

    async fn set_if_absent(
        &self,
        code: &str,
        url: &str,
        ttl_seconds: u64,
    ) -> Result<bool, StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        // SET replies OK when written and nil when NX rejected the write.
        let reply: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(url)
            .arg("NX")
            .arg("EX")
            .arg(ttl_seconds)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::backend)?;

        let written = reply.is_some();
        debug!(key = %key, ttl_seconds, written, "Redis SET NX EX");
        Ok(written)
    }

    async fn get(&self, code: &str) -> Result<String, StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => Ok(url),
            Ok(None) => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::backend(e)),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.map_err(StoreError::backend)
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
