//! Scripted lookup used by the session and command tests

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cite_history::MemoryStore;
use cite_lookup::{BookLookup, LookupError, parse_reply};
use cite_types::{BookRecord, Language};
use tokio::sync::Notify;

use crate::session::Session;

/// Answers from canned model replies keyed by identifier.
///
/// Unknown identifiers get a reply with no JSON in it. The identifier
/// `"slow"` waits for `gate` before answering.
#[derive(Default)]
pub struct ScriptedLookup {
    replies: Mutex<Vec<(String, String)>>,
    calls: AtomicUsize,
    languages: Mutex<Vec<Language>>,
    pub gate: Notify,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, identifier: &str, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push((identifier.to_string(), text.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn languages(&self) -> Vec<Language> {
        self.languages.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookLookup for ScriptedLookup {
    async fn lookup(
        &self,
        identifier: &str,
        language: Language,
    ) -> Result<BookRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.languages.lock().unwrap().push(language);

        if identifier == "slow" {
            self.gate.notified().await;
        }

        if identifier == "offline" {
            return Err(LookupError::Api("HTTP 503 Service Unavailable".to_string()));
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, text)| text.clone())
            .unwrap_or_else(|| "I couldn't find this book.".to_string());

        let fields = parse_reply(&reply).map_err(LookupError::from)?;
        Ok(BookRecord::new(identifier, fields))
    }
}

pub fn book_reply(title: &str) -> String {
    format!(
        r#"Here you go: {{"author":"张三","title":"{title}","publisher":"示例出版社","location":"北京","year":"2020"}}"#
    )
}

pub fn session_with(
    lookup: ScriptedLookup,
    store: Arc<MemoryStore>,
) -> (Session, Arc<ScriptedLookup>) {
    let lookup = Arc::new(lookup);
    let session = Session::new(lookup.clone(), store, Language::SimplifiedChinese);
    (session, lookup)
}
