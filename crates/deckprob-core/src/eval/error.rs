use crate::model::symbol::Symbol;
use thiserror::Error;

/// Every way an evaluation can fail. All are recoverable by editing input;
/// the display text is meant to be shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Input R, B, and X to start.")]
    AwaitingInput,
    #[error("Input length cannot be greater than 17 characters.")]
    LengthExceeded,
    #[error("Input lengths must match. Use X as placeholder for unknowns.")]
    LengthMismatch,
    #[error("Invalid input: there are only 11 R cards in the deck.")]
    TooManyR,
    #[error("Invalid input: there are only 6 B cards in the deck.")]
    TooManyB,
    #[error("Impossible to be given {given} but see {observed} on index {index}.")]
    PositionalConflict {
        index: usize,
        given: Symbol,
        observed: Symbol,
    },
    #[error("Invalid input: more cards given than in the deck.")]
    DeckExhausted,
}

impl EvalError {
    /// Stable tag for machine-readable output.
    pub const fn kind(&self) -> &'static str {
        match self {
            EvalError::AwaitingInput => "awaiting_input",
            EvalError::LengthExceeded => "length_exceeded",
            EvalError::LengthMismatch => "length_mismatch",
            EvalError::TooManyR => "too_many_r",
            EvalError::TooManyB => "too_many_b",
            EvalError::PositionalConflict { .. } => "positional_conflict",
            EvalError::DeckExhausted => "deck_exhausted",
        }
    }

    pub const fn is_awaiting_input(&self) -> bool {
        matches!(self, EvalError::AwaitingInput)
    }
}

#[cfg(test)]
mod tests {
    use super::EvalError;
    use crate::model::symbol::Symbol;

    #[test]
    fn conflict_message_names_symbols_and_index() {
        let err = EvalError::PositionalConflict {
            index: 3,
            given: Symbol::Red,
            observed: Symbol::Black,
        };
        assert_eq!(err.to_string(), "Impossible to be given R but see B on index 3.");
        assert_eq!(err.kind(), "positional_conflict");
    }

    #[test]
    fn only_awaiting_input_is_soft() {
        assert!(EvalError::AwaitingInput.is_awaiting_input());
        assert!(!EvalError::TooManyB.is_awaiting_input());
    }
}
