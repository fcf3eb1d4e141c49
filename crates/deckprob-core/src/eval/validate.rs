use super::error::EvalError;
use crate::model::deck::{DECK, MAX_SEQUENCE_LEN};
use crate::model::sequence::Sequence;

/// Checks run in a fixed order and stop at the first failure:
/// length bound, length match, empty input, R supply, B supply, then the
/// positional scan.
pub fn validate(given: &Sequence, observed: &Sequence) -> Result<(), EvalError> {
    if given.len() > MAX_SEQUENCE_LEN || observed.len() > MAX_SEQUENCE_LEN {
        return Err(EvalError::LengthExceeded);
    }
    if given.len() != observed.len() {
        return Err(EvalError::LengthMismatch);
    }
    if given.is_empty() && observed.is_empty() {
        return Err(EvalError::AwaitingInput);
    }

    let given_counts = given.counts();
    let observed_counts = observed.counts();
    let red_supply = usize::from(DECK.red);
    let black_supply = usize::from(DECK.black);
    if given_counts.red > red_supply || observed_counts.red > red_supply {
        return Err(EvalError::TooManyR);
    }
    if given_counts.black > black_supply || observed_counts.black > black_supply {
        return Err(EvalError::TooManyB);
    }

    first_conflict(given, observed).map_or(Ok(()), Err)
}

fn first_conflict(given: &Sequence, observed: &Sequence) -> Option<EvalError> {
    given
        .iter()
        .zip(observed.iter())
        .enumerate()
        .find(|(_, (g, o))| !g.compatible_with(*o))
        .map(|(index, (given, observed))| EvalError::PositionalConflict {
            index,
            given,
            observed,
        })
}
