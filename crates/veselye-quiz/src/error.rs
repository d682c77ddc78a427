use thiserror::Error;

/// Quiz call-order violations.
///
/// The presentation layer controls call order, so any of these means a
/// caller bug rather than a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz is complete, no question at index {index} (total {total})")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("Quiz is already complete")]
    AlreadyComplete,

    #[error("Quiz is not complete: {answered} of {total} answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Option {index} does not exist (question has {available})")]
    OptionOutOfRange { index: usize, available: usize },
}
