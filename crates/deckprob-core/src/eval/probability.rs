use super::error::EvalError;
use crate::model::deck::DECK;
use crate::model::sequence::Sequence;
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A probability in `[0, 1]`.
///
/// `Display` honours the formatter precision and falls back to two decimals.
/// Deserialization rejects NaN and anything outside the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Probability(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("probability {0} is outside [0, 1]")]
pub struct ProbabilityRangeError(pub f64);

impl Probability {
    pub const CERTAIN: Probability = Probability(1.0);

    /// Clamps into `[0, 1]`; NaN maps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Probability(0.0);
        }
        Probability(value.clamp(0.0, 1.0))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityRangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(ProbabilityRangeError(value))
        }
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}", precision, self.0)
    }
}

/// Distinct arrangements of `red` R cards and `black` B cards, C(red + black, red).
///
/// Built up one factor at a time so every intermediate value is itself a
/// binomial coefficient and the division is exact. `None` when an
/// intermediate product no longer fits in a `u64`; never the case for
/// counts drawn from the 17-card deck.
pub fn orderings(red: u64, black: u64) -> Option<u64> {
    let n = red.checked_add(black)?;
    let k = red.min(black);
    let mut acc: u64 = 1;
    for i in 1..=k {
        acc = acc.checked_mul(n - k + i)? / i;
    }
    Some(acc)
}

/// Cards of each colour still unplaced once `seq` commits its fixed positions.
fn remaining(seq: &Sequence) -> Option<(u64, u64)> {
    let counts = seq.counts();
    let red = usize::from(DECK.red).checked_sub(counts.red)?;
    let black = usize::from(DECK.black).checked_sub(counts.black)?;
    Some((red as u64, black as u64))
}

/// Ratio of unfixed orderings left by `observed` to those left by `given`,
/// capped at one. Expects inputs that already passed validation but re-checks
/// deck supply on its own.
pub fn conditional_probability(
    given: &Sequence,
    observed: &Sequence,
) -> Result<Probability, EvalError> {
    let (given_red, given_black) = remaining(given).ok_or(EvalError::DeckExhausted)?;
    let (observed_red, observed_black) = remaining(observed).ok_or(EvalError::DeckExhausted)?;

    let orderings_given = orderings(given_red, given_black).ok_or(EvalError::DeckExhausted)?;
    let orderings_observed =
        orderings(observed_red, observed_black).ok_or(EvalError::DeckExhausted)?;
    let ratio = orderings_observed as f64 / orderings_given as f64;

    Ok(Probability::new(ratio.min(1.0)))
}
