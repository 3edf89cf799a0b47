//! # TemplateRenderer Strategy
//!
//! This module provides the `TemplateRenderer` strategy for the feedback system.
//! It implements the [`MessageRenderer`] trait to produce deterministic, template-based
//! message text for each feedback category.
//!
//! ## Overview
//!
//! - Execution errors (time limit, stack, memory, server) render a fixed explanation.
//! - Syntax and runtime errors embed the raised error text, and append a
//!   language-unfamiliarity hint with a documentation link when the flag is set.
//! - Known-bug and suite-level failures render the test message selected by the
//!   evaluation engine.
//! - Incorrect-output failures show the failing input, the expected output, and what the
//!   submission produced instead.
//!
//! This strategy is useful for immediate, objective feedback with no external calls.

use crate::FeedbackDetails;
use crate::error::FeedbackError;
use crate::traits::renderer::{MessageRenderer, RenderedFeedback};
use async_trait::async_trait;
use serde_json::Value;

/// Template-based rendering strategy: deterministic message text per category.
#[derive(Debug)]
pub struct TemplateRenderer;

/// Renders an opaque test value the way a student would have printed it:
/// bare strings stay unquoted, everything else is compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn unfamiliarity_hint(details: &FeedbackDetails) -> Result<String, FeedbackError> {
    let language = details.language()?;
    Ok(format!(
        " It looks like you are still getting used to {}; the official guide may help: {}",
        language.display_name(),
        language.documentation_url()
    ))
}

#[async_trait]
impl MessageRenderer for TemplateRenderer {
    async fn render_feedback(
        &self,
        details: &FeedbackDetails,
    ) -> Result<RenderedFeedback, FeedbackError> {
        let message = match details {
            FeedbackDetails::TimeLimitError => {
                "Your program took too long to finish. Try simplifying the work it does on each step.".to_string()
            }
            FeedbackDetails::StackExceededError => {
                "Your program ran out of stack space. Check that your recursive calls always reach a base case.".to_string()
            }
            FeedbackDetails::MemoryLimitError => {
                "Your program used more memory than this exercise allows. Try holding less data in memory at once.".to_string()
            }
            FeedbackDetails::ServerError => {
                "We hit a problem on our side while evaluating your code. Please submit again in a moment.".to_string()
            }
            FeedbackDetails::RuntimeError { .. } => {
                let mut message = format!(
                    "Your {} code raised an error when run on the input {}: {}",
                    details.language()?.display_name(),
                    display_value(&details.error_input()?),
                    details.error_string()?
                );
                if details.is_language_unfamiliarity_feedback_needed() {
                    message.push_str(&unfamiliarity_hint(details)?);
                }
                message
            }
            FeedbackDetails::SyntaxError { .. } => {
                let mut message = format!(
                    "Your {} code could not be run because of a syntax error: {}",
                    details.language()?.display_name(),
                    details.error_string()?
                );
                if details.is_language_unfamiliarity_feedback_needed() {
                    message.push_str(&unfamiliarity_hint(details)?);
                }
                message
            }
            FeedbackDetails::KnownBugFailure { .. } | FeedbackDetails::SuiteLevelFailure { .. } => {
                details.message()?.to_string()
            }
            FeedbackDetails::IncorrectOutputFailure { .. } => {
                let test_case = details.test_case()?;
                let expected = test_case
                    .allowed_outputs
                    .first()
                    .map(display_value)
                    .unwrap_or_default();
                format!(
                    "Your code ran on the input {} and produced {}, but the expected output was {}.",
                    display_value(&test_case.input),
                    display_value(&details.observed_output()?),
                    expected
                )
            }
            FeedbackDetails::PerformanceTestFailure { .. } => {
                format!(
                    "Your code produces the correct output, but it is not fast enough. Aim for a solution that scales as {} time.",
                    details.expected_performance()?
                )
            }
            FeedbackDetails::Successful => "All test cases passed. Well done!".to_string(),
        };

        Ok(RenderedFeedback {
            category: details.category(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use util::languages::Language;
    use util::test_suite::TestCase;

    async fn render(details: &FeedbackDetails) -> RenderedFeedback {
        TemplateRenderer.render_feedback(details).await.unwrap()
    }

    #[tokio::test]
    async fn test_every_category_renders_nonempty_text() {
        let all = vec![
            FeedbackDetails::time_limit_error(),
            FeedbackDetails::stack_exceeded_error(),
            FeedbackDetails::memory_limit_error(),
            FeedbackDetails::server_error(),
            FeedbackDetails::runtime_error(
                "IndexError".to_string(),
                Language::Python,
                json!([1]),
                false,
            ),
            FeedbackDetails::syntax_error("missing semicolon".to_string(), Language::Java, false),
            FeedbackDetails::buggy_output_failure(0, 0, vec!["Check bounds".to_string()], 0),
            FeedbackDetails::suite_level_failure(0, 0, vec!["Edge cases failed".to_string()], 0),
            FeedbackDetails::incorrect_output_failure(
                TestCase {
                    input: json!("abc"),
                    allowed_outputs: vec![json!("cba")],
                    tag: None,
                },
                "GENERAL_CASE".to_string(),
                0,
                json!("abc"),
            ),
            FeedbackDetails::performance_test_failure("linear".to_string()),
            FeedbackDetails::success(),
        ];

        for details in all {
            let rendered = render(&details).await;
            assert_eq!(rendered.category, details.category());
            assert!(!rendered.message.is_empty(), "{}", rendered.category);
        }
    }

    #[tokio::test]
    async fn test_runtime_error_message_contents() {
        let details = FeedbackDetails::runtime_error(
            "ZeroDivisionError: division by zero".to_string(),
            Language::Python,
            json!([1, 0]),
            false,
        );
        let rendered = render(&details).await;
        assert_eq!(
            rendered.message,
            "Your Python code raised an error when run on the input [1,0]: \
             ZeroDivisionError: division by zero"
        );
    }

    #[tokio::test]
    async fn test_unfamiliarity_hint_only_when_flagged() {
        let without = FeedbackDetails::syntax_error(
            "missing semicolon".to_string(),
            Language::Python,
            false,
        );
        let with = FeedbackDetails::syntax_error(
            "missing semicolon".to_string(),
            Language::Python,
            true,
        );

        let plain = render(&without).await.message;
        let hinted = render(&with).await.message;

        assert!(!plain.contains("getting used to"));
        assert!(hinted.starts_with(&plain));
        assert!(hinted.contains("getting used to Python"));
        assert!(hinted.contains(Language::Python.documentation_url()));
    }

    #[tokio::test]
    async fn test_buggy_output_renders_selected_message() {
        let details = FeedbackDetails::buggy_output_failure(
            1,
            3,
            vec!["Off by one?".to_string(), "Check the last element".to_string()],
            1,
        );
        assert_eq!(render(&details).await.message, "Check the last element");
    }

    #[tokio::test]
    async fn test_out_of_range_message_index_propagates() {
        let details =
            FeedbackDetails::suite_level_failure(0, 0, vec!["only one".to_string()], 5);
        let err = TemplateRenderer.render_feedback(&details).await.unwrap_err();
        assert_eq!(err, FeedbackError::MessageIndexOutOfRange { index: 5, len: 1 });
    }

    #[tokio::test]
    async fn test_incorrect_output_shows_expected_and_observed() {
        let details = FeedbackDetails::incorrect_output_failure(
            TestCase {
                input: json!("racecar"),
                allowed_outputs: vec![json!(true), json!("true")],
                tag: None,
            },
            "GENERAL_CASE".to_string(),
            2,
            json!(false),
        );
        let rendered = render(&details).await;
        assert_eq!(
            rendered.message,
            "Your code ran on the input racecar and produced false, but the expected output was true."
        );
    }

    #[tokio::test]
    async fn test_performance_failure_names_expected_class() {
        let details = FeedbackDetails::performance_test_failure("linear".to_string());
        let rendered = render(&details).await;
        assert!(rendered.message.contains("scales as linear time"));
    }
}
