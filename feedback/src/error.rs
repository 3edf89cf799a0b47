//! Feedback Error Types
//!
//! This module defines the [`FeedbackError`] enum, which encapsulates all error types that can
//! occur while constructing feedback details or projecting category-specific fields out of them.
//! Every variant signals a programming-contract violation surfaced synchronously to the caller;
//! there are no retries and no degraded modes.

use crate::category::FeedbackCategory;
use thiserror::Error;

/// Represents all error types that can occur in the feedback system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    /// A category string outside the recognized feedback category set.
    #[error("unrecognized feedback category `{0}`")]
    UnknownCategory(String),
    /// An accessor was called on feedback of a category it is not defined for.
    #[error("`{accessor}` is not defined for feedback category {category}")]
    CategoryMismatch {
        accessor: &'static str,
        category: FeedbackCategory,
    },
    /// The selected test message index does not point into the message list.
    #[error("test message index {index} out of range for {len} message(s)")]
    MessageIndexOutOfRange { index: usize, len: usize },
    /// The external hint service failed or returned an unusable response.
    #[error("hint generation failed: {0}")]
    HintGeneration(String),
}
