use async_trait::async_trait;
use ::redis::AsyncCommands;
use snaplink_core::store::Result;
use snaplink_core::{LinkRecord, LinkStore, ShortCode, StoreError};
use tracing::{debug, trace, warn};

const DEFAULT_KEY_PREFIX: &str = "snaplink:link:";

/// A Redis-backed implementation of [`LinkStore`].
///
/// Records are stored as JSON strings under `<prefix><code>`. Commits use
/// `SET key value NX`, which Redis executes atomically, so exactly one of
/// several concurrent writers for the same code succeeds, across processes.
#[derive(Debug, Clone)]
pub struct RedisLinkStore {
    conn: ::redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: ::redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else if err.is_io_error() {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisLinkStore {
    /// Creates a new Redis link store on an existing connection.
    pub fn new(conn: ::redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a new Redis link store with a custom key prefix
    /// (e.g., "myapp:link:").
    pub fn with_prefix(
        conn: ::redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a multiplexed connection to `redis_url` and wraps it in a store.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = ::redis::Client::open(redis_url)
            .map_err(|e| StoreError::Unavailable(format!("invalid Redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::new(conn))
    }

    fn key(&self, code: &ShortCode) -> String {
        format!("{}{}", self.key_prefix, code.as_str())
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn try_insert(&self, code: &ShortCode, destination_url: &str) -> Result<bool> {
        let key = self.key(code);
        let record = LinkRecord::new(code.clone(), destination_url);
        let json = serde_json::to_string(&record)
            .map_err(|e| StoreError::InvalidData(format!("failed to serialize record: {e}")))?;

        let mut conn = self.conn.clone();
        let reply: Option<String> = ::redis::cmd("SET")
            .arg(&key)
            .arg(json)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(code = %code, error = %e, "Redis error on insert");
                map_redis_error("failed to write link to Redis", e)
            })?;

        let inserted = reply.is_some();
        if inserted {
            debug!(code = %code, "short code committed in Redis");
        } else {
            trace!(code = %code, "short code already taken in Redis");
        }
        Ok(inserted)
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        let key = self.key(code);
        trace!(code = %code, "fetching link record from Redis");

        let mut conn = self.conn.clone();
        let stored = conn.get::<_, Option<String>>(&key).await.map_err(|e| {
            warn!(code = %code, error = %e, "Redis error on lookup");
            map_redis_error("failed to read link from Redis", e)
        })?;

        let Some(stored) = stored else {
            return Ok(None);
        };

        serde_json::from_str::<LinkRecord>(&stored)
            .map(Some)
            .map_err(|e| {
                warn!(code = %code, error = %e, "failed to deserialize stored record");
                StoreError::InvalidData(format!("invalid value for key '{key}': {e}"))
            })
    }
}
