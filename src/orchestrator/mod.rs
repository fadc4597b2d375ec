//! End-to-end generation driver.
//!
//! One orchestrator call owns one conversation: it prepares the system
//! message (synthesizing or wrapping), invokes the model backend, normalizes
//! the reply, and when validation is on, loops with accumulated corrective
//! feedback until the text passes or the retry budget runs out. Validation
//! failure is a quality signal, never an error — after the last attempt the
//! best-effort text is returned anyway. Only transport failures propagate.
//!
//! The loop is written over an owned, growing message list with an explicit
//! attempt counter rather than recursion, so attempt count, history growth
//! and termination are auditable in isolation from the network call.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::PostsmithError;
use crate::llms::ModelClient;
use crate::locales;
use crate::normalizer;
use crate::prompts::PromptComposer;
use crate::types::{Archetype, Locale, Message, PersonaKernel, Platform, PostFormat, Role, ToolType};
use crate::validator;

/// Default number of validation-driven retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Per-call knobs for a generation request.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Which narrow content feature is asking; selects the auxiliary rule
    /// fragment appended to the system prompt.
    pub tool_type: ToolType,
    /// Language/market variant for prompt text and validation lexicon.
    pub locale: Locale,
    /// When false, the first normalized reply is returned untouched by the
    /// validator.
    pub include_validation: bool,
    /// Upper bound on re-issued model calls after the first; total backend
    /// invocations are at most `max_retries + 1`.
    pub max_retries: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            tool_type: ToolType::default(),
            locale: Locale::default(),
            include_validation: true,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl GenerationOptions {
    pub fn new(tool_type: ToolType, locale: Locale) -> Self {
        Self {
            tool_type,
            locale,
            ..Self::default()
        }
    }

    pub fn without_validation(mut self) -> Self {
        self.include_validation = false;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Result of a generation call, with the quality signal attached.
///
/// [`GenerationOrchestrator::generate`] drops everything but the text;
/// callers that want to warn on degraded output use
/// [`GenerationOrchestrator::generate_detailed`].
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The final normalized text, whether or not it passed.
    pub text: String,
    /// False only when the retry budget ran out with a failing score.
    pub passed: bool,
    /// Score of the last validation run; `None` when validation was off.
    pub final_score: Option<u8>,
    /// Backend invocations actually made (at most `max_retries + 1`).
    pub attempts: u32,
}

/// Drives prompt composition, backend calls, normalization and the
/// validation retry loop for one request at a time.
pub struct GenerationOrchestrator {
    client: Arc<dyn ModelClient>,
}

impl GenerationOrchestrator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate text and return it, best-effort.
    pub async fn generate(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<String, PostsmithError> {
        self.generate_detailed(messages, options)
            .await
            .map(|outcome| outcome.text)
    }

    /// Generate text, keeping the validation verdict and attempt count.
    pub async fn generate_detailed(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<GenerationOutcome, PostsmithError> {
        let request_id = Uuid::new_v4();
        let composer = PromptComposer::new(options.locale);
        let mut conversation = self.prepare_conversation(messages, &composer, options)?;
        debug!(
            %request_id,
            locale = %options.locale,
            tool = %options.tool_type,
            messages = conversation.len(),
            "prepared generation conversation"
        );

        let reply = self.client.call(&conversation).await?;
        let mut text = normalizer::normalize(&reply);
        let mut attempts: u32 = 1;

        if !options.include_validation {
            return Ok(GenerationOutcome {
                text,
                passed: true,
                final_score: None,
                attempts,
            });
        }

        loop {
            let verdict = validator::validate(&text, options.locale);
            if verdict.passed {
                debug!(%request_id, attempts, score = verdict.score, "text passed humanness validation");
                return Ok(GenerationOutcome {
                    text,
                    passed: true,
                    final_score: Some(verdict.score),
                    attempts,
                });
            }
            if attempts > options.max_retries {
                warn!(
                    %request_id,
                    attempts,
                    score = verdict.score,
                    issues = ?verdict.issues,
                    "retry budget exhausted; returning best-effort text"
                );
                return Ok(GenerationOutcome {
                    text,
                    passed: false,
                    final_score: Some(verdict.score),
                    attempts,
                });
            }

            warn!(
                %request_id,
                attempt = attempts,
                score = verdict.score,
                issues = ?verdict.issues,
                "text failed humanness validation; re-issuing with feedback"
            );
            conversation.push(Message::assistant(text));
            conversation.push(Message::user(retry_instruction(
                options.locale,
                &verdict.issues,
            )));

            let reply = self.client.call(&conversation).await?;
            text = normalizer::normalize(&reply);
            attempts += 1;
        }
    }

    /// Ensure the conversation opens with a system message: wrap a provided
    /// one with humanizer and tool rules, or synthesize one from the
    /// locale's default persona.
    fn prepare_conversation(
        &self,
        mut messages: Vec<Message>,
        composer: &PromptComposer,
        options: &GenerationOptions,
    ) -> Result<Vec<Message>, PostsmithError> {
        let has_system = matches!(messages.first(), Some(first) if first.role == Role::System);
        if has_system {
            let wrapped = composer.wrap_system_prompt(&messages[0].content, options.tool_type);
            messages[0].content = wrapped;
        } else {
            let resources = locales::get(options.locale);
            let persona = PersonaKernel::new(
                resources.default_persona.name.clone(),
                Archetype::Expert,
                resources.default_persona.core_belief.clone(),
                resources.default_persona.voice_signature.clone(),
            );
            let base = composer.build_system_prompt(
                &persona,
                Platform::default(),
                PostFormat::default(),
                &resources.default_goal,
                None,
            )?;
            let system = composer.wrap_system_prompt(&base, options.tool_type);
            messages.insert(0, Message::system(system));
        }
        Ok(messages)
    }
}

/// Render the locale's corrective turn, listing the validator's findings.
fn retry_instruction(locale: Locale, issues: &[String]) -> String {
    let listed = issues
        .iter()
        .map(|issue| format!("- {issue}"))
        .collect::<Vec<_>>()
        .join("\n");
    locales::get(locale)
        .retry_instruction
        .replace("{issues}", &listed)
}
