use std::sync::Arc;
use rihla_core::QueryParser;
use crate::conversation::ConversationService;

#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConversationService>,
    pub parser: Arc<QueryParser>,
}
