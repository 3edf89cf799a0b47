//! # Feedback Report Module
//!
//! This module defines the data structures and response envelope for returning evaluation
//! feedback from the feedback system. It provides a standardized, serializable format for
//! presenting the category, the rendered message, and the category-specific details to
//! clients.
//!
//! ## Overview
//!
//! The main types are:
//! - [`FeedbackReport`]: The flat projection of one feedback value, carrying only the
//!   fields populated for its category.
//! - [`FeedbackReportResponse`]: A response envelope that wraps a [`FeedbackReport`] with
//!   success and message fields for API responses.
//!
//! ## JSON Output Example
//!
//! When serialized, the response will look like:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Feedback ready.",
//!   "data": {
//!     "feedback_category": "SYNTAX_ERROR",
//!     "message": "Your Python code could not be run because of a syntax error: ...",
//!     "error_string": "missing semicolon",
//!     "language": "python",
//!     "language_unfamiliarity_feedback_is_needed": true,
//!     "created_at": "..."
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! - [`FeedbackReport`] is intended for API output. Fields not populated for the report's
//!   category are omitted from the JSON entirely.
//! - The [`From<FeedbackReport> for FeedbackReportResponse`] implementation provides
//!   ergonomic conversion for API handlers.

use crate::FeedbackDetails;
use crate::category::FeedbackCategory;
use crate::error::FeedbackError;
use crate::traits::renderer::MessageRenderer;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use util::languages::Language;
use util::test_suite::TestCase;

/// The flat, client-facing projection of one feedback value.
///
/// `feedback_category`, `message`, and `created_at` are always present; every other field
/// is populated only when it is meaningful for the report's category.
#[derive(Debug, Serialize)]
pub struct FeedbackReport {
    /// The category the evaluation engine assigned to the submission.
    pub feedback_category: FeedbackCategory,
    /// The rendered, student-facing message text.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_unfamiliarity_feedback_is_needed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_test_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_suite_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case: Option<TestCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_performance: Option<String>,
    /// RFC 3339 timestamp of when the report was assembled.
    pub created_at: String,
}

impl FeedbackReport {
    /// Builds the flat projection of `details` around an already-rendered message.
    pub fn from_details(details: &FeedbackDetails, message: String) -> Self {
        let category = details.category();
        let flag_is_meaningful = matches!(
            category,
            FeedbackCategory::SyntaxError | FeedbackCategory::RuntimeError
        );

        FeedbackReport {
            feedback_category: category,
            message,
            error_string: details.error_string().ok().map(str::to_string),
            language: details.language().ok(),
            error_input: details.error_input().ok(),
            language_unfamiliarity_feedback_is_needed: flag_is_meaningful
                .then(|| details.is_language_unfamiliarity_feedback_needed()),
            task_index: details.task_index().ok(),
            specific_test_index: details.specific_test_index().ok(),
            test_suite_id: details.test_suite_id().ok().map(str::to_string),
            test_case: details.test_case().ok().cloned(),
            test_case_index: details.test_case_index().ok(),
            observed_output: details.observed_output().ok(),
            expected_performance: details.expected_performance().ok(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// The API response envelope for evaluation feedback.
///
/// This struct wraps a [`FeedbackReport`] and adds top-level `success` and `message`
/// fields for consistency with other API responses.
///
/// - `success`: Always true for an assembled report.
/// - `message`: A human-readable message (e.g., "Feedback ready.").
/// - `data`: The [`FeedbackReport`] containing all feedback details.
#[derive(Debug, Serialize)]
pub struct FeedbackReportResponse {
    /// Indicates the feedback was assembled successfully.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed feedback report.
    data: FeedbackReport,
}

/// Enables ergonomic conversion from [`FeedbackReport`] to [`FeedbackReportResponse`].
impl From<FeedbackReport> for FeedbackReportResponse {
    fn from(report: FeedbackReport) -> Self {
        FeedbackReportResponse {
            success: true,
            message: "Feedback ready.".to_string(),
            data: report,
        }
    }
}

/// Renders `details` with the given strategy and wraps the result in the response
/// envelope.
///
/// # Returns
/// * `Ok(FeedbackReportResponse)` on success, containing the full report.
/// * `Err(FeedbackError)` if rendering fails (e.g., an out-of-range message selection).
pub async fn assemble_report(
    details: &FeedbackDetails,
    renderer: &(dyn MessageRenderer + Send + Sync),
) -> Result<FeedbackReportResponse, FeedbackError> {
    let rendered = renderer.render_feedback(details).await?;
    Ok(FeedbackReport::from_details(details, rendered.message).into())
}
