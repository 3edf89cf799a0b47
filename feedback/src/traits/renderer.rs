//!
//! # MessageRenderer Trait
//!
//! This module defines the [`MessageRenderer`] trait and the [`RenderedFeedback`] struct,
//! which are used to implement pluggable message-rendering strategies for the feedback system.
//!
//! Each strategy turns one [`FeedbackDetails`] value into the student-facing message text,
//! allowing for flexible presentation (e.g., template-based or LLM-assisted rendering).
//!

use crate::FeedbackDetails;
use crate::category::FeedbackCategory;
use crate::error::FeedbackError;
use async_trait::async_trait;
use serde::Serialize;

/// The rendered, student-facing form of one feedback value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFeedback {
    pub category: FeedbackCategory,
    pub message: String,
}

/// A trait for pluggable message-rendering strategies.
///
/// Implement this trait to define how the message text shown to a student is produced
/// from the feedback details. Each strategy can render differently (e.g., fixed templates
/// or AI-generated hints).
///
/// # Arguments
/// - `details`: The feedback value to render.
///
/// # Returns
/// - `Ok(RenderedFeedback)`: The message for the submission.
/// - `Err(FeedbackError)`: If rendering fails, e.g. a contract violation in the details.
#[async_trait]
pub trait MessageRenderer {
    async fn render_feedback(
        &self,
        details: &FeedbackDetails,
    ) -> Result<RenderedFeedback, FeedbackError>;
}
