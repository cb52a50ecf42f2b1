//! Assessment error types.
//!
//! Rejected navigation is reported through these variants rather than by
//! panicking, so a presentation layer can keep the session alive and show a
//! hint. A rejected transition never changes session state.

use thiserror::Error;

/// Errors produced by the assessment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// An answer value outside the seven-point scale.
    #[error("answer value {0} is outside the -3..=3 scale")]
    ValueOutOfRange(i64),

    /// Input that is not an integer answer value.
    #[error("not an answer value: {0:?}")]
    InvalidValue(String),

    /// A code string that does not spell one of the sixteen profiles.
    #[error("unknown personality code: {0:?}")]
    UnknownCode(String),

    /// A dimension identifier that is not one of the four axes.
    #[error("unknown dimension: {0:?}")]
    UnknownDimension(String),

    /// The session has no questions to present.
    #[error("question corpus is empty")]
    EmptyCorpus,

    /// The intent requires an assessment in progress.
    #[error("assessment has not been started")]
    NotStarted,

    /// The assessment is already running.
    #[error("assessment is already in progress")]
    AlreadyStarted,

    /// A completed session accepts no further answers or navigation.
    #[error("assessment is already completed")]
    AlreadyCompleted,

    /// Forward navigation past an unanswered question.
    #[error("question {number} must be answered before moving on", number = .index + 1)]
    Unanswered { index: usize },

    /// Backward navigation from the first question.
    #[error("already at the first question")]
    AtFirstQuestion,

    /// `advance` from the last question; use `finish` instead.
    #[error("already at the last question")]
    AtLastQuestion,

    /// `finish` before reaching the last question.
    #[error("question {number} is not the last question", number = .index + 1)]
    NotLastQuestion { index: usize },

    /// Random fill requested without debug mode enabled.
    #[error("random fill is disabled; enable debug mode to use it")]
    DebugDisabled,
}

impl AssessmentError {
    /// Returns `true` for the "must answer before advancing" rule.
    pub fn is_gating(&self) -> bool {
        matches!(self, AssessmentError::Unanswered { .. })
    }

    /// Returns `true` if this error is a disallowed transition rather than bad input.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            AssessmentError::NotStarted
                | AssessmentError::AlreadyStarted
                | AssessmentError::AlreadyCompleted
                | AssessmentError::Unanswered { .. }
                | AssessmentError::AtFirstQuestion
                | AssessmentError::AtLastQuestion
                | AssessmentError::NotLastQuestion { .. }
        )
    }
}
