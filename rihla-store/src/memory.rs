use async_trait::async_trait;
use rihla_core::{CoreResult, Language, SessionStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local session store.
#[derive(Default)]
pub struct InMemorySessionStore {
    languages: RwLock<HashMap<i64, Language>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn language(&self, chat_id: i64) -> CoreResult<Option<Language>> {
        Ok(self.languages.read().await.get(&chat_id).copied())
    }

    async fn set_language(&self, chat_id: i64, language: Language) -> CoreResult<()> {
        self.languages.write().await.insert(chat_id, language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_language_per_chat() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.language(1).await.unwrap(), None);

        store.set_language(1, Language::Ar).await.unwrap();
        store.set_language(2, Language::En).await.unwrap();
        assert_eq!(store.language(1).await.unwrap(), Some(Language::Ar));
        assert_eq!(store.language(2).await.unwrap(), Some(Language::En));

        store.set_language(1, Language::En).await.unwrap();
        assert_eq!(store.language(1).await.unwrap(), Some(Language::En));
    }
}
