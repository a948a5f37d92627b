pub mod preprocess;
pub mod prompt;
pub mod reply;
pub mod service;

pub use preprocess::normalize_identifier;
pub use prompt::build_prompt;
pub use reply::{ReplyError, extract_json_object, parse_reply};
pub use service::ModelLookup;

use cite_types::{BookRecord, Language};

/// Message shown to the user for every failed lookup
pub const LOOKUP_FAILED_MESSAGE: &str =
    "无法获取图书信息，请检查 ISBN。 (Unable to retrieve book info. Please check the ISBN.)";

/// Generative text model with web search grounding
#[async_trait::async_trait]
pub trait TextModel: Send + Sync {
    /// Send a single prompt and return the reply text
    async fn generate(&self, prompt: &str) -> Result<String, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Book metadata lookup by identifier
#[async_trait::async_trait]
pub trait BookLookup: Send + Sync {
    async fn lookup(&self, identifier: &str, language: Language)
    -> Result<BookRecord, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub search_grounding: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Could not parse book information: {0}")]
    Reply(#[from] ReplyError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error")]
    Authentication,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Model returned no text")]
    EmptyResponse,
}

impl LookupError {
    /// The same message for every variant; the detail only goes to the log
    pub fn user_message(&self) -> &'static str {
        LOOKUP_FAILED_MESSAGE
    }
}
