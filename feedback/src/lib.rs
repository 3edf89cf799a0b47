//! # Feedback Library
//!
//! This crate provides the core logic for representing the feedback shown to a student
//! after their code submission is evaluated. The evaluation engine classifies each
//! submission into a [`FeedbackCategory`](category::FeedbackCategory) and hands the
//! category-specific data to this crate, which carries it to the rendering frontend.
//!
//! ## Key Concepts
//! - **FeedbackDetails**: The central value, a tagged sum type with one variant per
//!   feedback category. Each variant carries only the fields meaningful for its category,
//!   so cross-category field access is impossible to construct and every guarded accessor
//!   failure is an explicit [`FeedbackError`](error::FeedbackError).
//! - **Renderers**: Pluggable strategies that turn a `FeedbackDetails` into the
//!   student-facing message text (template-based or LLM-assisted).
//! - **Reports**: Structured, serializable output wrapping the details and rendered
//!   message for the frontend.

pub mod category;
pub mod error;
pub mod renderers;
pub mod report;
pub mod traits;

use crate::category::FeedbackCategory;
use crate::error::FeedbackError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use util::languages::Language;
use util::test_suite::TestCase;

/// Feedback for one evaluated submission.
///
/// One variant per [`FeedbackCategory`], each carrying exactly the fields that are
/// meaningful for that category. Instances are immutable once constructed: there are no
/// update methods and no transitions between categories.
///
/// On the wire this serializes as a flat object tagged with `feedback_category`, e.g.:
///
/// ```json
/// {
///   "feedback_category": "SYNTAX_ERROR",
///   "error_string": "missing semicolon",
///   "language": "python",
///   "language_unfamiliarity_feedback_is_needed": true
/// }
/// ```
///
/// Deserializing an object whose `feedback_category` is outside the recognized set fails,
/// which is the construction-time validation contract for feedback built from external
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "feedback_category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackDetails {
    /// The submission exceeded the exercise time limit.
    TimeLimitError,
    /// The submission exhausted the call stack.
    StackExceededError,
    /// The submission exceeded the exercise memory limit.
    MemoryLimitError,
    /// The evaluation engine itself failed.
    ServerError,
    /// The submission raised an error while running.
    RuntimeError {
        /// Text of the error the submission raised.
        error_string: String,
        /// Language the student wrote the submission in.
        language: Language,
        /// The specific input value that triggered the failure.
        error_input: Value,
        /// Whether the student seems unfamiliar with the language and should get a hint.
        language_unfamiliarity_feedback_is_needed: bool,
    },
    /// The submission could not be parsed.
    SyntaxError {
        error_string: String,
        language: Language,
        language_unfamiliarity_feedback_is_needed: bool,
    },
    /// The submission reproduced a known buggy implementation.
    KnownBugFailure {
        /// Position of the failing task within the exercise.
        task_index: usize,
        /// Position of the failing test within the task.
        specific_test_index: usize,
        /// Ordered candidate messages authored for this bug.
        test_messages: Vec<String>,
        /// Index of the message selected for display.
        message_index: usize,
    },
    /// An entire test suite failed with a suite-level message.
    SuiteLevelFailure {
        task_index: usize,
        specific_test_index: usize,
        test_messages: Vec<String>,
        message_index: usize,
    },
    /// The submission produced wrong output for a test case.
    IncorrectOutputFailure {
        /// The first failing test case.
        test_case: TestCase,
        /// Id of the suite the failing case belongs to.
        test_suite_id: String,
        /// Position of the failing case within its suite.
        test_case_index: usize,
        /// The output the submission actually produced.
        observed_output: Value,
    },
    /// The submission is correct but too slow.
    PerformanceTestFailure {
        /// Textual performance-class description, e.g. "linear".
        expected_performance: String,
    },
    /// The submission passed all checks.
    Successful,
}

impl FeedbackDetails {
    // --- Category-specific constructors, one per recognized category ---

    pub fn time_limit_error() -> Self {
        FeedbackDetails::TimeLimitError
    }

    pub fn stack_exceeded_error() -> Self {
        FeedbackDetails::StackExceededError
    }

    pub fn memory_limit_error() -> Self {
        FeedbackDetails::MemoryLimitError
    }

    pub fn server_error() -> Self {
        FeedbackDetails::ServerError
    }

    pub fn runtime_error(
        error_string: String,
        language: Language,
        error_input: Value,
        language_unfamiliarity_feedback_is_needed: bool,
    ) -> Self {
        FeedbackDetails::RuntimeError {
            error_string,
            language,
            error_input,
            language_unfamiliarity_feedback_is_needed,
        }
    }

    pub fn syntax_error(
        error_string: String,
        language: Language,
        language_unfamiliarity_feedback_is_needed: bool,
    ) -> Self {
        FeedbackDetails::SyntaxError {
            error_string,
            language,
            language_unfamiliarity_feedback_is_needed,
        }
    }

    /// Feedback for a submission matching a known buggy implementation.
    pub fn buggy_output_failure(
        task_index: usize,
        specific_test_index: usize,
        test_messages: Vec<String>,
        message_index: usize,
    ) -> Self {
        FeedbackDetails::KnownBugFailure {
            task_index,
            specific_test_index,
            test_messages,
            message_index,
        }
    }

    pub fn suite_level_failure(
        task_index: usize,
        specific_test_index: usize,
        test_messages: Vec<String>,
        message_index: usize,
    ) -> Self {
        FeedbackDetails::SuiteLevelFailure {
            task_index,
            specific_test_index,
            test_messages,
            message_index,
        }
    }

    pub fn incorrect_output_failure(
        test_case: TestCase,
        test_suite_id: String,
        test_case_index: usize,
        observed_output: Value,
    ) -> Self {
        FeedbackDetails::IncorrectOutputFailure {
            test_case,
            test_suite_id,
            test_case_index,
            observed_output,
        }
    }

    pub fn performance_test_failure(expected_performance: String) -> Self {
        FeedbackDetails::PerformanceTestFailure {
            expected_performance,
        }
    }

    pub fn success() -> Self {
        FeedbackDetails::Successful
    }

    // --- Accessors ---

    /// The category this feedback belongs to. Never fails.
    pub fn category(&self) -> FeedbackCategory {
        match self {
            FeedbackDetails::TimeLimitError => FeedbackCategory::TimeLimitError,
            FeedbackDetails::StackExceededError => FeedbackCategory::StackExceededError,
            FeedbackDetails::MemoryLimitError => FeedbackCategory::MemoryLimitError,
            FeedbackDetails::ServerError => FeedbackCategory::ServerError,
            FeedbackDetails::RuntimeError { .. } => FeedbackCategory::RuntimeError,
            FeedbackDetails::SyntaxError { .. } => FeedbackCategory::SyntaxError,
            FeedbackDetails::KnownBugFailure { .. } => FeedbackCategory::KnownBugFailure,
            FeedbackDetails::SuiteLevelFailure { .. } => FeedbackCategory::SuiteLevelFailure,
            FeedbackDetails::IncorrectOutputFailure { .. } => {
                FeedbackCategory::IncorrectOutputFailure
            }
            FeedbackDetails::PerformanceTestFailure { .. } => {
                FeedbackCategory::PerformanceTestFailure
            }
            FeedbackDetails::Successful => FeedbackCategory::Successful,
        }
    }

    /// Text of the error raised by the submission.
    ///
    /// Defined for `SYNTAX_ERROR` and `RUNTIME_ERROR`.
    pub fn error_string(&self) -> Result<&str, FeedbackError> {
        match self {
            FeedbackDetails::RuntimeError { error_string, .. }
            | FeedbackDetails::SyntaxError { error_string, .. } => Ok(error_string),
            _ => Err(self.mismatch("error_string")),
        }
    }

    /// Language the submission was written in.
    ///
    /// Defined for `SYNTAX_ERROR` and `RUNTIME_ERROR`.
    pub fn language(&self) -> Result<Language, FeedbackError> {
        match self {
            FeedbackDetails::RuntimeError { language, .. }
            | FeedbackDetails::SyntaxError { language, .. } => Ok(*language),
            _ => Err(self.mismatch("language")),
        }
    }

    /// The input value that triggered the runtime failure, as an owned copy the caller
    /// may freely mutate.
    ///
    /// Defined for `RUNTIME_ERROR`.
    pub fn error_input(&self) -> Result<Value, FeedbackError> {
        match self {
            FeedbackDetails::RuntimeError { error_input, .. } => Ok(error_input.clone()),
            _ => Err(self.mismatch("error_input")),
        }
    }

    /// Whether a language unfamiliarity hint should accompany the message.
    ///
    /// Never fails: `false` for every category other than `SYNTAX_ERROR`/`RUNTIME_ERROR`.
    pub fn is_language_unfamiliarity_feedback_needed(&self) -> bool {
        match self {
            FeedbackDetails::RuntimeError {
                language_unfamiliarity_feedback_is_needed,
                ..
            }
            | FeedbackDetails::SyntaxError {
                language_unfamiliarity_feedback_is_needed,
                ..
            } => *language_unfamiliarity_feedback_is_needed,
            _ => false,
        }
    }

    /// Position of the failing task within the exercise.
    ///
    /// Defined for `KNOWN_BUG_FAILURE` and `SUITE_LEVEL_FAILURE`.
    pub fn task_index(&self) -> Result<usize, FeedbackError> {
        match self {
            FeedbackDetails::KnownBugFailure { task_index, .. }
            | FeedbackDetails::SuiteLevelFailure { task_index, .. } => Ok(*task_index),
            _ => Err(self.mismatch("task_index")),
        }
    }

    /// Position of the failing test within the task.
    ///
    /// Defined for `KNOWN_BUG_FAILURE` and `SUITE_LEVEL_FAILURE`.
    pub fn specific_test_index(&self) -> Result<usize, FeedbackError> {
        match self {
            FeedbackDetails::KnownBugFailure {
                specific_test_index, ..
            }
            | FeedbackDetails::SuiteLevelFailure {
                specific_test_index, ..
            } => Ok(*specific_test_index),
            _ => Err(self.mismatch("specific_test_index")),
        }
    }

    /// Index of the message selected from the candidate list.
    ///
    /// Defined for `KNOWN_BUG_FAILURE` and `SUITE_LEVEL_FAILURE`.
    pub fn message_index(&self) -> Result<usize, FeedbackError> {
        match self {
            FeedbackDetails::KnownBugFailure { message_index, .. }
            | FeedbackDetails::SuiteLevelFailure { message_index, .. } => Ok(*message_index),
            _ => Err(self.mismatch("message_index")),
        }
    }

    /// The selected candidate message, `test_messages[message_index]`.
    ///
    /// Defined for `KNOWN_BUG_FAILURE` and `SUITE_LEVEL_FAILURE`. An index outside the
    /// message list yields [`FeedbackError::MessageIndexOutOfRange`] rather than a panic.
    pub fn message(&self) -> Result<&str, FeedbackError> {
        match self {
            FeedbackDetails::KnownBugFailure {
                test_messages,
                message_index,
                ..
            }
            | FeedbackDetails::SuiteLevelFailure {
                test_messages,
                message_index,
                ..
            } => test_messages
                .get(*message_index)
                .map(String::as_str)
                .ok_or(FeedbackError::MessageIndexOutOfRange {
                    index: *message_index,
                    len: test_messages.len(),
                }),
            _ => Err(self.mismatch("message")),
        }
    }

    /// The first failing test case.
    ///
    /// Defined for `INCORRECT_OUTPUT_FAILURE`.
    pub fn test_case(&self) -> Result<&TestCase, FeedbackError> {
        match self {
            FeedbackDetails::IncorrectOutputFailure { test_case, .. } => Ok(test_case),
            _ => Err(self.mismatch("test_case")),
        }
    }

    /// Id of the suite containing the failing case.
    ///
    /// Defined for `INCORRECT_OUTPUT_FAILURE`.
    pub fn test_suite_id(&self) -> Result<&str, FeedbackError> {
        match self {
            FeedbackDetails::IncorrectOutputFailure { test_suite_id, .. } => Ok(test_suite_id),
            _ => Err(self.mismatch("test_suite_id")),
        }
    }

    /// Position of the failing case within its suite.
    ///
    /// Defined for `INCORRECT_OUTPUT_FAILURE`.
    pub fn test_case_index(&self) -> Result<usize, FeedbackError> {
        match self {
            FeedbackDetails::IncorrectOutputFailure {
                test_case_index, ..
            } => Ok(*test_case_index),
            _ => Err(self.mismatch("test_case_index")),
        }
    }

    /// The output the submission produced for the failing case, as an owned copy the
    /// caller may freely mutate.
    ///
    /// Defined for `INCORRECT_OUTPUT_FAILURE`.
    pub fn observed_output(&self) -> Result<Value, FeedbackError> {
        match self {
            FeedbackDetails::IncorrectOutputFailure {
                observed_output, ..
            } => Ok(observed_output.clone()),
            _ => Err(self.mismatch("observed_output")),
        }
    }

    /// The required performance class, as an owned copy.
    ///
    /// Defined for `PERFORMANCE_TEST_FAILURE`.
    pub fn expected_performance(&self) -> Result<String, FeedbackError> {
        match self {
            FeedbackDetails::PerformanceTestFailure {
                expected_performance,
            } => Ok(expected_performance.clone()),
            _ => Err(self.mismatch("expected_performance")),
        }
    }

    fn mismatch(&self, accessor: &'static str) -> FeedbackError {
        FeedbackError::CategoryMismatch {
            accessor,
            category: self.category(),
        }
    }
}
