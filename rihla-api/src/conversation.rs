use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rihla_core::{CoreResult, FlightSearch, Language, QueryParser, RawInput, SessionStore};
use rihla_offer::{rank_direct_first, SearchSummary};
use tracing::{debug, error, info};

use crate::messages::{self, ACTION_CHANGE_LANGUAGE, ACTION_NEW_SEARCH, ACTION_RESTART};
use crate::reply::Reply;

/// Button payloads the conversation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectLanguage(Language),
    ChangeLanguage,
    NewSearch,
}

impl Action {
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(code) = data.strip_prefix("lang_") {
            return code.parse().ok().map(Action::SelectLanguage);
        }
        match data {
            ACTION_CHANGE_LANGUAGE => Some(Action::ChangeLanguage),
            ACTION_NEW_SEARCH | ACTION_RESTART => Some(Action::NewSearch),
            _ => None,
        }
    }
}

/// Drives one chat: language selection, search parsing, result rendering.
pub struct ConversationService {
    sessions: Arc<dyn SessionStore>,
    parser: Arc<QueryParser>,
    flights: Arc<dyn FlightSearch>,
    chat_locks: ChatLocks,
}

type ChatLocks = Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>;

/// Holds a chat's lock entry; drops the entry from the map once nobody else holds it.
struct ChatLease<'a> {
    locks: &'a ChatLocks,
    chat_id: i64,
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl Drop for ChatLease<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Map entry plus this lease
        let idle = Arc::strong_count(&self.lock) == 2
            && locks.get(&self.chat_id).is_some_and(|entry| Arc::ptr_eq(entry, &self.lock));
        if idle {
            locks.remove(&self.chat_id);
        }
    }
}

impl ConversationService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        parser: Arc<QueryParser>,
        flights: Arc<dyn FlightSearch>,
    ) -> Self {
        Self {
            sessions,
            parser,
            flights,
            chat_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Handle an inbound text message. Never fails: faults become a restart prompt.
    pub async fn handle_message(&self, chat_id: i64, text: &str) -> Vec<Reply> {
        let lease = self.chat_lock(chat_id);
        let _guard = lease.lock.lock().await;

        match self.on_message(chat_id, text.trim()).await {
            Ok(replies) => replies,
            Err(e) => self.recover(chat_id, e).await,
        }
    }

    /// Handle a button press.
    pub async fn handle_action(&self, chat_id: i64, data: &str) -> Vec<Reply> {
        let lease = self.chat_lock(chat_id);
        let _guard = lease.lock.lock().await;

        match self.on_action(chat_id, data).await {
            Ok(replies) => replies,
            Err(e) => self.recover(chat_id, e).await,
        }
    }

    async fn on_message(&self, chat_id: i64, text: &str) -> CoreResult<Vec<Reply>> {
        let session_lang = self.sessions.language(chat_id).await?;

        if text == "/start" || text.eq_ignore_ascii_case("restart") {
            return Ok(vec![welcome(session_lang.unwrap_or_default())]);
        }

        let Some(lang) = session_lang else {
            return Ok(vec![Reply::plain(messages::SELECT_LANGUAGE_FIRST)
                .with_keyboard(messages::language_keyboard(Language::En))]);
        };

        let input = RawInput::detect(text);
        let query = match self.parser.parse(&input).await {
            Ok(query) => query,
            Err(failure) => {
                info!("Chat {} search rejected: {}", chat_id, failure.kind());
                return Ok(vec![Reply::plain(messages::failure(lang, failure))]);
            }
        };

        let mut replies = vec![Reply::plain(messages::searching(lang, &query))];

        let mut offers = self.flights.search(&query).await;
        if offers.is_empty() {
            replies.push(Reply::plain(messages::no_flights(lang)).with_keyboard(messages::action_keyboard(lang)));
            return Ok(replies);
        }

        rank_direct_first(&mut offers);
        replies.push(Reply::plain(messages::summary(lang, &SearchSummary::of(&offers))));
        replies.extend(offers.iter().map(|offer| Reply::markdown(messages::flight_card(lang, offer))));
        replies.push(Reply::plain(messages::choose_next_action(lang)).with_keyboard(messages::action_keyboard(lang)));

        Ok(replies)
    }

    async fn on_action(&self, chat_id: i64, data: &str) -> CoreResult<Vec<Reply>> {
        let Some(action) = Action::parse(data) else {
            debug!("Ignoring unknown action {:?} from chat {}", data, chat_id);
            return Ok(Vec::new());
        };

        let replies = match action {
            Action::SelectLanguage(lang) => {
                self.sessions.set_language(chat_id, lang).await?;
                info!("Chat {} selected language {}", chat_id, lang);
                vec![Reply::plain(messages::language_selected(lang))]
            }
            Action::ChangeLanguage => {
                let lang = self.sessions.language(chat_id).await?.unwrap_or_default();
                vec![welcome(lang)]
            }
            Action::NewSearch => {
                let lang = self.sessions.language(chat_id).await?.unwrap_or_default();
                vec![Reply::plain(messages::new_search_prompt(lang))]
            }
        };

        Ok(replies)
    }

    async fn recover(&self, chat_id: i64, err: rihla_core::CoreError) -> Vec<Reply> {
        error!("Chat {} error: {}", chat_id, err);
        // The store may be the thing that failed
        let lang = self.sessions.language(chat_id).await.ok().flatten().unwrap_or_default();
        vec![Reply::plain(messages::unexpected_error(lang)), welcome(lang)]
    }

    /// Current session language, if one was chosen.
    pub async fn language(&self, chat_id: i64) -> CoreResult<Option<Language>> {
        self.sessions.language(chat_id).await
    }

    fn chat_lock(&self, chat_id: i64) -> ChatLease<'_> {
        let mut locks = self.chat_locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let lock = locks.entry(chat_id).or_default().clone();
        ChatLease { locks: &self.chat_locks, chat_id, lock }
    }

    #[cfg(test)]
    fn tracked_chats(&self) -> usize {
        self.chat_locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }
}

fn welcome(lang: Language) -> Reply {
    Reply::plain(messages::welcome(lang)).with_keyboard(messages::language_keyboard(lang))
}
