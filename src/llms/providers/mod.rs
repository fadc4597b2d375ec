//! Bundled model-backend implementations.

pub mod openai;

pub use openai::OpenAiClient;
