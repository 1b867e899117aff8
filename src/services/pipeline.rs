//! The generation pipeline: prompt → backend → sanitize → shorten → validate.

use tracing::{debug, warn};

use crate::models::description::ValidationResult;
use crate::models::part::ProductAttributes;
use crate::services::llm::{GenerationBackend, GenerationError};
use crate::services::{catalog, prompt, sanitize, validation};

/// Shortening attempts made before giving up and keeping the best text.
pub const DEFAULT_SHORTEN_RETRIES: u32 = 5;

/// Sanitized text plus the validation verdict the caller branches on.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub description_text: String,
    pub validation: ValidationResult,
}

/// Run one description through the full pipeline.
///
/// The initial backend call is the only fallible step: once text exists,
/// everything after it is best effort. The returned text may still be
/// non-compliant; the bundled [`ValidationResult`] says so and the caller
/// decides whether to accept, edit, or regenerate.
pub async fn generate_compliant_description<B: GenerationBackend>(
    backend: &B,
    attributes: &ProductAttributes,
    description_code: &str,
    language_code: &str,
    max_retries: u32,
) -> Result<PipelineResult, GenerationError> {
    let request = prompt::build_generation_prompt(attributes, description_code, language_code);
    debug!(
        description_code,
        adjusted_max_length = request.adjusted_max_length,
        prompt_chars = request.prompt_text.chars().count(),
        "Built generation prompt"
    );

    let raw = backend.generate(&request.prompt_text).await?;
    let sanitized = sanitize::sanitize(&raw);

    let description_text =
        ensure_within_limit(sanitized, description_code, backend, max_retries).await;
    let validation = validation::validate(description_code, &description_text);

    if !validation.is_valid {
        warn!(
            description_code,
            issues = validation.issues.len(),
            "Description still non-compliant after shortening"
        );
    }

    Ok(PipelineResult {
        description_text,
        validation,
    })
}

/// Shorten `text` until it fits the code's hard character limit, asking
/// the backend for a rewrite up to `max_retries` times.
///
/// Best effort by design: a backend error or empty rewrite ends the loop
/// with the last good text, and exhausting the retries returns the final
/// text even if it is still over the limit. The caller re-validates; this
/// function never fails.
pub async fn ensure_within_limit<B: GenerationBackend>(
    text: String,
    description_code: &str,
    backend: &B,
    max_retries: u32,
) -> String {
    let limit = catalog::max_length(description_code);
    let mut current = text;

    for attempt in 1..=max_retries {
        if current.chars().count() <= limit {
            return current;
        }

        let shorten_prompt = prompt::build_shorten_prompt(&current, description_code);
        debug!(
            description_code,
            attempt,
            current_chars = current.chars().count(),
            limit,
            "Requesting shorter rewrite"
        );
        metrics::counter!("description_shorten_attempts_total").increment(1);

        match backend.generate(&shorten_prompt).await {
            Ok(rewrite) => {
                if rewrite.trim().is_empty() {
                    warn!(
                        description_code,
                        attempt, "Backend returned empty rewrite, keeping previous text"
                    );
                    return current;
                }
                current = sanitize::sanitize(&rewrite);
            }
            Err(error) => {
                warn!(
                    description_code,
                    attempt,
                    error = %error,
                    "Backend error during shortening, keeping previous text"
                );
                return current;
            }
        }
    }

    if current.chars().count() > limit {
        warn!(
            description_code,
            max_retries,
            final_chars = current.chars().count(),
            limit,
            "Retries exhausted, returning over-length text"
        );
    }
    current
}
