use std::sync::Arc;

use cite_history::{HistoryLog, HistoryStore};
use cite_lookup::{BookLookup, normalize_identifier};
use cite_types::{BookRecord, HistoryEntry, Language};
use tokio::sync::RwLock;

/// Everything the terminal surface displays
#[derive(Debug, Clone)]
pub struct SessionState {
    pub query: String,
    pub language: Language,
    pub result: Option<BookRecord>,
    pub error: Option<String>,
    pub history: HistoryLog,
    in_flight: usize,
}

impl SessionState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Identifier was empty after trimming
    Ignored,
    Found(BookRecord),
    Failed(String),
}

/// Owns the displayed state and the history, and drives lookups.
///
/// `submit` takes `&self`: overlapping submissions are independent and the
/// last one to finish decides what is displayed.
pub struct Session {
    lookup: Arc<dyn BookLookup>,
    store: Arc<dyn HistoryStore>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(
        lookup: Arc<dyn BookLookup>,
        store: Arc<dyn HistoryStore>,
        language: Language,
    ) -> Self {
        let history = HistoryLog::load(store.as_ref());

        Self {
            lookup,
            store,
            state: RwLock::new(SessionState {
                query: String::new(),
                language,
                result: None,
                error: None,
                history,
                in_flight: 0,
            }),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn select_language(&self, language: Language) {
        self.state.write().await.language = language;
    }

    pub async fn submit(&self, identifier: &str) -> SubmitOutcome {
        let identifier = normalize_identifier(identifier);
        if identifier.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let language = {
            let mut state = self.state.write().await;
            state.query = identifier.clone();
            state.in_flight += 1;
            state.error = None;
            state.result = None;
            state.language
        };

        tracing::info!("Looking up {} ({})", identifier, language);
        let result = self.lookup.lookup(&identifier, language).await;

        let mut state = self.state.write().await;
        state.in_flight -= 1;

        match result {
            Ok(record) => {
                let entry = HistoryEntry::new(
                    uuid::Uuid::new_v4().to_string(),
                    chrono::Utc::now().timestamp_millis(),
                    record.clone(),
                    language,
                );
                state.history.push(entry);
                state.result = Some(record.clone());

                if let Err(e) = state.history.save(self.store.as_ref()) {
                    tracing::error!("Failed to persist history: {:#}", e);
                }

                SubmitOutcome::Found(record)
            }
            Err(e) => {
                tracing::error!("Lookup for {} failed: {}", identifier, e);
                let message = e.user_message().to_string();
                state.error = Some(message.clone());

                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Display a past entry without a new lookup
    pub async fn select_history_entry(&self, id: &str) -> Option<HistoryEntry> {
        let mut state = self.state.write().await;
        let entry = state.history.get(id)?.clone();

        state.query = entry.record().isbn().to_string();
        state.result = Some(entry.record().clone());
        state.language = entry.language();
        state.error = None;

        Some(entry)
    }

    /// Find an entry by 1-based position or by id
    pub async fn find_history_entry(&self, selector: &str) -> Option<HistoryEntry> {
        let state = self.state.read().await;
        let selector = selector.trim();

        let by_index = selector
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| state.history.nth(i));

        by_index.or_else(|| state.history.get(selector)).cloned()
    }

    pub async fn clear_history(&self) {
        let mut state = self.state.write().await;
        state.history.clear();

        if let Err(e) = self.store.remove() {
            tracing::error!("Failed to remove persisted history: {:#}", e);
        }
    }
}
