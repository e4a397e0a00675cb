//! Single-turn smalltalk responses.
//!
//! Formats a user utterance into a `User: …\nBot:` prompt and returns the
//! model's completion. Deliberately stateless: each call is one exchange,
//! with no conversation history.

use crate::error::Result;
use crate::llm::gateway::{CompletionConfig, LlmGateway};
use std::sync::Arc;
use tracing::debug;

/// A conversational responder for casual, single-turn exchanges.
pub struct Smalltalk {
    model: String,
    gateway: Arc<dyn LlmGateway>,
}

impl Smalltalk {
    pub fn new(model: impl Into<String>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            model: model.into(),
            gateway,
        }
    }

    /// Generate a smalltalk response to the user's query.
    pub async fn respond(&self, query: &str) -> Result<String> {
        let prompt = format!("User: {}\nBot:", query);
        debug!("Generating smalltalk response");

        let config = CompletionConfig {
            maximum_tokens: 100,
            temperature: 0.7,
            stop_sequences: vec!["\n".to_string()],
        };

        self.gateway.complete(&self.model, &prompt, &config).await
    }
}
