use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult};
use rihla_core::{CoreError, CoreResult, Language, SessionStore};
use tracing::{info, warn};

const LANGUAGE_FIELD: &str = "language";

/// Session store backed by one Redis hash per chat (`chat:{id}`).
#[derive(Clone)]
pub struct RedisSessionStore {
    client: redis::Client,
    ttl_seconds: Option<u64>,
}

impl RedisSessionStore {
    pub fn new(connection_string: &str, ttl_seconds: Option<u64>) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        info!("Redis session store configured (ttl: {:?})", ttl_seconds);
        Ok(Self { client, ttl_seconds })
    }

    fn chat_key(chat_id: i64) -> String {
        format!("chat:{}", chat_id)
    }

    async fn hget_chat_field(&self, chat_id: i64, field: &str) -> RedisResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.hget(Self::chat_key(chat_id), field).await
    }

    async fn hset_chat_field(&self, chat_id: i64, field: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = Self::chat_key(chat_id);
        conn.hset::<_, _, _, ()>(&key, field, value).await?;
        if let Some(ttl) = self.ttl_seconds {
            conn.expire::<_, ()>(&key, expiry_seconds(ttl)).await?;
        }
        Ok(())
    }
}

/// `EXPIRE` takes a signed count; oversized TTLs saturate instead of wrapping.
fn expiry_seconds(ttl: u64) -> i64 {
    i64::try_from(ttl).unwrap_or(i64::MAX)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn language(&self, chat_id: i64) -> CoreResult<Option<Language>> {
        let stored = self
            .hget_chat_field(chat_id, LANGUAGE_FIELD)
            .await
            .map_err(|e| CoreError::SessionError(e.to_string()))?;

        Ok(stored.and_then(|code| match code.parse::<Language>() {
            Ok(language) => Some(language),
            Err(e) => {
                // Treat a corrupt entry as "no language chosen yet"
                warn!("Ignoring stored language for chat {}: {}", chat_id, e);
                None
            }
        }))
    }

    async fn set_language(&self, chat_id: i64, language: Language) -> CoreResult<()> {
        self.hset_chat_field(chat_id, LANGUAGE_FIELD, language.code())
            .await
            .map_err(|e| CoreError::SessionError(e.to_string()))
    }
}
