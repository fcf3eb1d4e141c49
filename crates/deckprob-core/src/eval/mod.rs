//! Conditional probability over the fixed deck.
//!
//! - `validate`: precondition and positional-consistency checks.
//! - `probability`: ordering counts and the conditional ratio.
//! - `evaluator`: owns the two input fields and recomputes on every edit.
//! - `report`: serializable snapshot of an evaluator state.

mod error;
mod evaluator;
mod probability;
pub mod report;
mod validate;

pub use error::EvalError;
pub use evaluator::{Evaluation, Evaluator};
pub use probability::{Probability, ProbabilityRangeError, conditional_probability, orderings};
pub use validate::validate;

use crate::model::sequence::Sequence;

/// Probability of `observed` given that `given` holds.
pub fn evaluate(given: &Sequence, observed: &Sequence) -> Result<Probability, EvalError> {
    let outcome = validate(given, observed).and_then(|()| conditional_probability(given, observed));
    match &outcome {
        Ok(probability) => tracing::debug!(
            given = %given,
            observed = %observed,
            probability = probability.value(),
            "evaluated"
        ),
        Err(err) => tracing::debug!(
            given = %given,
            observed = %observed,
            kind = err.kind(),
            "evaluation rejected"
        ),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::{EvalError, evaluate};
    use crate::model::sequence::Sequence;
    use crate::model::symbol::Symbol;

    fn seq(text: &str) -> Sequence {
        Sequence::normalize(text)
    }

    #[test]
    fn first_card_red_matches_simple_fraction() {
        let p = evaluate(&seq("X"), &seq("R")).unwrap();
        assert!((p.value() - 11.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn identical_sequences_are_certain() {
        let p = evaluate(&seq("RBRB"), &seq("RBRB")).unwrap();
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn conflicting_single_position() {
        let err = evaluate(&seq("R"), &seq("B")).unwrap_err();
        assert_eq!(
            err,
            EvalError::PositionalConflict {
                index: 0,
                given: Symbol::Red,
                observed: Symbol::Black,
            }
        );
    }

    #[test]
    fn empty_inputs_await_input() {
        assert_eq!(
            evaluate(&seq(""), &seq("")).unwrap_err(),
            EvalError::AwaitingInput
        );
    }
}
