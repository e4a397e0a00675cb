//! Corpus construction and query search against a hosted embedding provider.

use crate::error::Result;
use crate::llm::gateway::{LlmGateway, SemanticRepresentation};
use crate::retrieval::corpus::{Corpus, Document, SearchHit};
use std::sync::Arc;
use tracing::{debug, info};

/// How the two sides of a search are embedded.
///
/// `Asymmetric` embeds reference texts in `Document` mode and queries in
/// `Query` mode, which suits short questions against longer references.
/// `Symmetric` embeds both sides the same way, for comparing like with like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationScheme {
    Asymmetric,
    Symmetric,
}

impl RepresentationScheme {
    fn document_representation(&self) -> SemanticRepresentation {
        match self {
            Self::Asymmetric => SemanticRepresentation::Document,
            Self::Symmetric => SemanticRepresentation::Symmetric,
        }
    }

    fn query_representation(&self) -> SemanticRepresentation {
        match self {
            Self::Asymmetric => SemanticRepresentation::Query,
            Self::Symmetric => SemanticRepresentation::Symmetric,
        }
    }
}

/// Main interface for similarity-based retrieval.
///
/// Holds the embedding model name and the provider gateway together, so a
/// corpus built through a retriever is always queried with embeddings from
/// the same model and representation scheme.
pub struct Retriever {
    model: String,
    gateway: Arc<dyn LlmGateway>,
    scheme: RepresentationScheme,
}

impl Retriever {
    /// Create a retriever using the asymmetric query/document scheme.
    pub fn new(model: impl Into<String>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self::with_scheme(model, gateway, RepresentationScheme::Asymmetric)
    }

    /// Create a retriever with an explicit representation scheme.
    pub fn with_scheme(
        model: impl Into<String>,
        gateway: Arc<dyn LlmGateway>,
        scheme: RepresentationScheme,
    ) -> Self {
        Self {
            model: model.into(),
            gateway,
            scheme,
        }
    }

    /// Embed each text and build a corpus, preserving input order.
    ///
    /// Construction is atomic: if the provider fails for any text, the error
    /// propagates unchanged and no partial corpus is exposed.
    pub async fn build_corpus<S: AsRef<str>>(&self, texts: &[S]) -> Result<Corpus> {
        info!("Building corpus of {} documents", texts.len());

        let mut documents = Vec::with_capacity(texts.len());

        for text in texts {
            let text = text.as_ref();
            let embedding = self
                .gateway
                .semantic_embed(&self.model, text, self.scheme.document_representation())
                .await?;
            documents.push(Document::new(text, embedding));
        }

        Corpus::new(documents)
    }

    /// Embed the query and return the most similar document in the corpus.
    ///
    /// The query vector is ephemeral: it is computed per call and discarded
    /// once the scan completes.
    pub async fn search<'a>(&self, corpus: &'a Corpus, query: &str) -> Result<SearchHit<'a>> {
        debug!("Searching corpus of {} documents", corpus.len());

        let query_embedding = self
            .gateway
            .semantic_embed(&self.model, query, self.scheme.query_representation())
            .await?;

        let hit = corpus.nearest(&query_embedding)?;
        debug!("Best match at index {} with score {:.4}", hit.index, hit.score);

        Ok(hit)
    }
}
