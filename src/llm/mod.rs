pub mod gateway;
pub mod gateways;
pub mod smalltalk;

pub use gateway::{CompletionConfig, LlmGateway, SemanticRepresentation};
pub use smalltalk::Smalltalk;
