use async_trait::async_trait;
use cite_types::{BookRecord, Language};

use crate::prompt::build_prompt;
use crate::reply::parse_reply;
use crate::{BookLookup, LookupError, ProviderMetadata, TextModel};

/// Lookup backed by a search-grounded text model.
///
/// One prompt, one model call, no retries.
pub struct ModelLookup<M> {
    model: M,
}

impl<M: TextModel> ModelLookup<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        self.model.metadata()
    }
}

#[async_trait]
impl<M: TextModel> BookLookup for ModelLookup<M> {
    async fn lookup(
        &self,
        identifier: &str,
        language: Language,
    ) -> Result<BookRecord, LookupError> {
        let prompt = build_prompt(identifier, language);
        tracing::debug!("Prompt for {}: {} chars", identifier, prompt.len());

        let reply = self.model.generate(&prompt).await?;
        tracing::debug!("Model reply: {}", reply);

        let fields = parse_reply(&reply).map_err(|e| {
            tracing::warn!("Failed to parse reply for {}: {}", identifier, e);
            e
        })?;

        Ok(BookRecord::new(identifier, fields))
    }
}
