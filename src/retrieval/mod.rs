pub mod corpus;
pub mod retriever;
pub mod similarity;

pub use corpus::{Corpus, Document, SearchHit};
pub use retriever::{RepresentationScheme, Retriever};
pub use similarity::cosine_similarity;
