//! # Feedback Categories
//!
//! This module defines [`FeedbackCategory`], the fixed classification of why a student
//! submission failed or succeeded. The evaluation engine decides which category applies;
//! this crate only validates membership and routes category-specific data.
//!
//! Categories cross the wire as `SCREAMING_SNAKE_CASE` strings (e.g. `"TIME_LIMIT_ERROR"`).
//! Parsing any string outside the recognized set fails with
//! [`FeedbackError::UnknownCategory`] — this is the construction-failure contract for
//! feedback arriving from outside the process.

use crate::error::FeedbackError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// The recognized set of feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackCategory {
    /// The submission exceeded the exercise time limit.
    TimeLimitError,
    /// The submission exhausted the call stack, usually via unbounded recursion.
    StackExceededError,
    /// The submission exceeded the exercise memory limit.
    MemoryLimitError,
    /// The evaluation engine itself failed.
    ServerError,
    /// The submission raised an error while running on a test input.
    RuntimeError,
    /// The submission could not be parsed in its declared language.
    SyntaxError,
    /// The submission reproduced a known buggy implementation.
    KnownBugFailure,
    /// An entire test suite failed with a suite-level message.
    SuiteLevelFailure,
    /// The submission ran but produced wrong output for a test case.
    IncorrectOutputFailure,
    /// The submission is correct but does not meet the performance requirement.
    PerformanceTestFailure,
    /// The submission passed all checks.
    Successful,
}

impl FeedbackCategory {
    /// Every recognized category, in wire order.
    pub const ALL: [FeedbackCategory; 11] = [
        FeedbackCategory::TimeLimitError,
        FeedbackCategory::StackExceededError,
        FeedbackCategory::MemoryLimitError,
        FeedbackCategory::ServerError,
        FeedbackCategory::RuntimeError,
        FeedbackCategory::SyntaxError,
        FeedbackCategory::KnownBugFailure,
        FeedbackCategory::SuiteLevelFailure,
        FeedbackCategory::IncorrectOutputFailure,
        FeedbackCategory::PerformanceTestFailure,
        FeedbackCategory::Successful,
    ];

    /// The wire identifier for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackCategory::TimeLimitError => "TIME_LIMIT_ERROR",
            FeedbackCategory::StackExceededError => "STACK_EXCEEDED_ERROR",
            FeedbackCategory::MemoryLimitError => "MEMORY_LIMIT_ERROR",
            FeedbackCategory::ServerError => "SERVER_ERROR",
            FeedbackCategory::RuntimeError => "RUNTIME_ERROR",
            FeedbackCategory::SyntaxError => "SYNTAX_ERROR",
            FeedbackCategory::KnownBugFailure => "KNOWN_BUG_FAILURE",
            FeedbackCategory::SuiteLevelFailure => "SUITE_LEVEL_FAILURE",
            FeedbackCategory::IncorrectOutputFailure => "INCORRECT_OUTPUT_FAILURE",
            FeedbackCategory::PerformanceTestFailure => "PERFORMANCE_TEST_FAILURE",
            FeedbackCategory::Successful => "SUCCESSFUL",
        }
    }

    /// Whether the submission never produced comparable output (execution or engine error).
    pub fn is_error(self) -> bool {
        matches!(
            self,
            FeedbackCategory::TimeLimitError
                | FeedbackCategory::StackExceededError
                | FeedbackCategory::MemoryLimitError
                | FeedbackCategory::ServerError
                | FeedbackCategory::RuntimeError
                | FeedbackCategory::SyntaxError
        )
    }

    /// Whether the submission ran but did not meet the exercise requirements.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            FeedbackCategory::KnownBugFailure
                | FeedbackCategory::SuiteLevelFailure
                | FeedbackCategory::IncorrectOutputFailure
                | FeedbackCategory::PerformanceTestFailure
        )
    }

    pub fn is_success(self) -> bool {
        matches!(self, FeedbackCategory::Successful)
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackCategory {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                warn!("Rejected unrecognized feedback category `{}`", s);
                FeedbackError::UnknownCategory(s.to_string())
            })
    }
}
