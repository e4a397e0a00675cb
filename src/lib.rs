pub mod error;
pub mod llm;
pub mod retrieval;

pub use error::{Result, SemblanceError};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Result, SemblanceError};
    pub use crate::llm::gateways::LuminousGateway;
    pub use crate::llm::{CompletionConfig, LlmGateway, SemanticRepresentation, Smalltalk};
    pub use crate::retrieval::{
        cosine_similarity, Corpus, Document, RepresentationScheme, Retriever, SearchHit,
    };
}
