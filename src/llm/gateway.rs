use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Embedding representation mode.
///
/// Hosted semantic embedding models distinguish how a text will be used:
/// `Symmetric` embeddings compare items of the same kind to each other, while
/// the asymmetric `Query`/`Document` pair embeds a short query and a longer
/// reference text differently but into the same comparable space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRepresentation {
    Symmetric,
    Query,
    Document,
}

/// Configuration for LLM completion
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub maximum_tokens: usize,
    pub temperature: f32,
    pub stop_sequences: Vec<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            maximum_tokens: 64,
            temperature: 0.0,
            stop_sequences: vec![],
        }
    }
}

/// Abstract interface for hosted LLM providers
///
/// Implementations own the transport concerns (endpoints, auth, timeouts);
/// callers inject a gateway wherever embeddings or completions are needed,
/// which keeps the retrieval core provider-agnostic and testable with a stub.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Calculate a semantic embedding for text under the given representation
    async fn semantic_embed(
        &self,
        model: &str,
        text: &str,
        representation: SemanticRepresentation,
    ) -> Result<Vec<f32>>;

    /// Complete a text prompt
    async fn complete(&self, model: &str, prompt: &str, config: &CompletionConfig)
        -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_config_default() {
        let config = CompletionConfig::default();

        assert_eq!(config.maximum_tokens, 64);
        assert_eq!(config.temperature, 0.0);
        assert!(config.stop_sequences.is_empty());
    }

    #[test]
    fn test_completion_config_custom() {
        let config = CompletionConfig {
            maximum_tokens: 32,
            temperature: 0.2,
            stop_sequences: vec!["\n".to_string()],
        };

        assert_eq!(config.maximum_tokens, 32);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.stop_sequences, vec!["\n".to_string()]);
    }

    #[test]
    fn test_completion_config_clone() {
        let config1 = CompletionConfig {
            maximum_tokens: 100,
            temperature: 0.7,
            stop_sequences: vec!["\n".to_string()],
        };

        let config2 = config1.clone();

        assert_eq!(config1.maximum_tokens, config2.maximum_tokens);
        assert_eq!(config1.temperature, config2.temperature);
        assert_eq!(config1.stop_sequences, config2.stop_sequences);
    }

    #[test]
    fn test_representation_serialization() {
        assert_eq!(
            serde_json::to_string(&SemanticRepresentation::Symmetric).unwrap(),
            "\"symmetric\""
        );
        assert_eq!(serde_json::to_string(&SemanticRepresentation::Query).unwrap(), "\"query\"");
        assert_eq!(
            serde_json::to_string(&SemanticRepresentation::Document).unwrap(),
            "\"document\""
        );
    }

    #[test]
    fn test_representation_deserialization() {
        assert_eq!(
            serde_json::from_str::<SemanticRepresentation>("\"symmetric\"").unwrap(),
            SemanticRepresentation::Symmetric
        );
        assert_eq!(
            serde_json::from_str::<SemanticRepresentation>("\"query\"").unwrap(),
            SemanticRepresentation::Query
        );
        assert_eq!(
            serde_json::from_str::<SemanticRepresentation>("\"document\"").unwrap(),
            SemanticRepresentation::Document
        );
    }
}
