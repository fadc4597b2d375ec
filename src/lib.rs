//! # Postsmith
//!
//! Generation-and-humanization core for brand social content. Turns a
//! persona kernel and a raw topic into post text via an LLM backend while
//! enforcing that the output reads as human-written: a layered prompt
//! composer, a heuristic humanness validator, and a bounded
//! retry-with-feedback loop that re-drives the model until the text passes
//! or the budget runs out.
//!
//! The surrounding application (brand records, calendars, UI) lives
//! elsewhere; this crate only needs a [`ModelClient`] implementation and a
//! caller-owned [`PersonaKernel`].

pub mod archetypes;
pub mod errors;
pub mod lexicon;
pub mod llms;
pub mod locales;
pub mod normalizer;
pub mod orchestrator;
pub mod prompts;
pub mod types;
pub mod validator;

pub use errors::{ConfigError, PostsmithError};
pub use llms::providers::OpenAiClient;
pub use llms::{ModelClient, ProviderError};
pub use orchestrator::{GenerationOptions, GenerationOrchestrator, GenerationOutcome};
pub use prompts::PromptComposer;
pub use types::{
    Archetype, Locale, Message, PersonaKernel, Platform, PostFormat, Role, ToolType,
};
pub use validator::{validate, ValidationResult};
