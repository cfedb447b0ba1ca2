use crate::model::QuizPhase;
use thiserror::Error;

/// Why a quiz could not be loaded. The `Display` text is what the user sees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to fetch quiz")]
    FetchFailed(String),
    #[error("No results found")]
    NoResults { response_code: i64 },
}

impl FetchError {
    /// Detail for the logs; the user only gets the short message.
    pub fn detail(&self) -> String {
        match self {
            FetchError::FetchFailed(reason) => reason.clone(),
            FetchError::NoResults { response_code } => {
                format!("trivia API answered with response_code {response_code}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} while the quiz is {phase}")]
    NotAllowed {
        action: &'static str,
        phase: QuizPhase,
    },
    #[error("cannot finish before every question is answered")]
    Unanswered,
}
