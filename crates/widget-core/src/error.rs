//! Widget Errors
//!
//! Error types shared by the mutators, validators and the store layer.

use thiserror::Error;

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors a widget mutation can end in. Every variant leaves the document untouched.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("task text is empty")]
    EmptyTask,
    #[error("task {0} not found")]
    TaskNotFound(u64),
    #[error(transparent)]
    Vote(#[from] VoteError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Poll validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("no option selected")]
    NoSelection,
    #[error("unknown poll option `{0}`")]
    UnknownOption(String),
    #[error("suggestion shorter than {min} characters")]
    SuggestionTooShort { min: usize },
}

impl VoteError {
    /// Message shown inline under the poll form
    pub fn user_message(&self) -> String {
        match self {
            VoteError::NoSelection => "Selecione uma opção antes de votar.".to_string(),
            VoteError::UnknownOption(_) => "Opção inválida. Recarregue a página.".to_string(),
            VoteError::SuggestionTooShort { min } => {
                format!("Descreva sua sugestão (mínimo de {} caracteres).", min)
            }
        }
    }
}

/// Key-value store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_errors_carry_user_messages() {
        assert!(VoteError::NoSelection.user_message().contains("Selecione"));
        let short = VoteError::SuggestionTooShort { min: 3 };
        assert!(short.user_message().contains('3'));
    }

    #[test]
    fn vote_error_converts_into_widget_error() {
        let err: WidgetError = VoteError::NoSelection.into();
        assert!(matches!(err, WidgetError::Vote(VoteError::NoSelection)));
        assert_eq!(err.to_string(), "no option selected");
    }
}
