use thiserror::Error;

/// Input rejected before any signal runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("please enter some text to analyze")]
    Empty,

    #[error("text must be at least {min} characters (got {chars})")]
    TooShort { chars: usize, min: usize },
}

pub type DetectResult<T> = Result<T, DetectError>;
