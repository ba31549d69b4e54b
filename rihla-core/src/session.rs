use async_trait::async_trait;
use crate::{CoreResult, Language};

/// Per-chat session state: the language the chat selected.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn language(&self, chat_id: i64) -> CoreResult<Option<Language>>;

    async fn set_language(&self, chat_id: i64, language: Language) -> CoreResult<()>;
}
