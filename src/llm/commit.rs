//! Commit-message generation for the Git unit's interactive tool

use crate::core::error::{Result, RoadmapError};
use crate::llm::client::TextGenerator;
use tracing::debug;

/// Error message for an empty change description.
pub const EMPTY_DESCRIPTION_MSG: &str = "Please describe your changes.";

/// Build the generation prompt for a change description.
fn build_prompt(change_description: &str) -> String {
    format!(
        "Generate a concise and descriptive conventional commit message for the following changes:\n\n{}\n\nFormat the output as a single-line commit message. For example: \"feat: add user authentication feature\"",
        change_description
    )
}

/// Generate a conventional commit message for a described change.
///
/// A blank description is rejected up front; the generator is never
/// called for it. Generator failures are wrapped so the caller can show
/// the underlying reason.
pub async fn generate_commit_message<G: TextGenerator>(
    generator: &G,
    change_description: &str,
) -> Result<String> {
    let change_description = change_description.trim();
    if change_description.is_empty() {
        return Err(RoadmapError::Generation(EMPTY_DESCRIPTION_MSG.into()));
    }

    let prompt = build_prompt(change_description);
    debug!(chars = change_description.len(), "generating commit message");

    match generator.generate(&prompt).await {
        Ok(message) => Ok(message.trim().to_string()),
        Err(e) => {
            let cause = match e {
                RoadmapError::Generation(msg) => msg,
                other => other.to_string(),
            };
            Err(RoadmapError::Generation(format!(
                "Failed to generate commit message: {}",
                cause
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedGenerator {
        response: Result<String>,
        calls: AtomicUsize,
    }

    impl CannedGenerator {
        fn ok(message: &str) -> Self {
            Self {
                response: Ok(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                response: Err(RoadmapError::Generation(reason.to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(s) => Ok(s.clone()),
                Err(RoadmapError::Generation(msg)) => Err(RoadmapError::Generation(msg.clone())),
                Err(_) => unreachable!(),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_description_rejected_without_generator_call() {
        let generator = CannedGenerator::ok("feat: add thing");
        let err = generate_commit_message(&generator, "   ").await.unwrap_err();
        assert!(matches!(
            err,
            RoadmapError::Generation(ref msg) if msg == EMPTY_DESCRIPTION_MSG
        ));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_generation_is_trimmed() {
        let generator = CannedGenerator::ok("  feat: add login page\n");
        let message = generate_commit_message(&generator, "added a login page")
            .await
            .unwrap();
        assert_eq!(message, "feat: add login page");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_includes_underlying_reason() {
        let generator = CannedGenerator::failing("API error: 429");
        let err = generate_commit_message(&generator, "refactored the parser")
            .await
            .unwrap_err();
        match err {
            RoadmapError::Generation(msg) => {
                assert!(msg.starts_with("Failed to generate commit message:"));
                assert!(msg.contains("API error: 429"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_prompt_carries_the_description() {
        let prompt = build_prompt("fixed the off-by-one in pagination");
        assert!(prompt.contains("fixed the off-by-one in pagination"));
        assert!(prompt.starts_with("Generate a concise and descriptive conventional commit message"));
    }
}
