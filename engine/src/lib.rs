pub mod analysis_service;
pub mod charts;
pub mod embedding_service;
pub mod extractor;
pub mod gemini_service;
pub mod knowledge;
pub mod models;
pub mod vector_index;

pub use analysis_service::AnalysisService;
pub use embedding_service::EmbeddingService;
pub use extractor::extract_swot_components;
pub use gemini_service::GeminiService;
pub use models::*;
pub use vector_index::{VectorIndex, DEFAULT_RETRIEVAL_DEPTH};
