use super::error::EvalError;
use super::evaluate;
use super::probability::Probability;
use crate::model::sequence::Sequence;

/// Outcome of evaluating the current pair of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    AwaitingInput,
    Error(EvalError),
    Result(Probability),
}

impl Evaluation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Evaluation::AwaitingInput => "awaiting_input",
            Evaluation::Error(_) => "error",
            Evaluation::Result(_) => "result",
        }
    }

    pub const fn probability(&self) -> Option<Probability> {
        match self {
            Evaluation::Result(p) => Some(*p),
            _ => None,
        }
    }

    /// The message to show in place of a result. Awaiting input carries its
    /// prompt here as well.
    pub const fn error(&self) -> Option<EvalError> {
        match self {
            Evaluation::AwaitingInput => Some(EvalError::AwaitingInput),
            Evaluation::Error(err) => Some(*err),
            Evaluation::Result(_) => None,
        }
    }
}

impl From<Result<Probability, EvalError>> for Evaluation {
    fn from(outcome: Result<Probability, EvalError>) -> Self {
        match outcome {
            Ok(p) => Evaluation::Result(p),
            Err(err) if err.is_awaiting_input() => Evaluation::AwaitingInput,
            Err(err) => Evaluation::Error(err),
        }
    }
}

/// Holds the two input fields. Every edit normalizes the raw text and
/// re-runs the whole evaluation; nothing is carried over between edits.
#[derive(Debug, Clone)]
pub struct Evaluator {
    given: Sequence,
    observed: Sequence,
    state: Evaluation,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            given: Sequence::new(),
            observed: Sequence::new(),
            state: Evaluation::AwaitingInput,
        }
    }

    pub fn with_inputs(given: &str, observed: &str) -> Self {
        let mut evaluator = Self {
            given: Sequence::normalize(given),
            observed: Sequence::normalize(observed),
            state: Evaluation::AwaitingInput,
        };
        evaluator.recompute();
        evaluator
    }

    pub fn set_given(&mut self, raw: &str) -> Evaluation {
        self.given = Sequence::normalize(raw);
        self.recompute()
    }

    pub fn set_observed(&mut self, raw: &str) -> Evaluation {
        self.observed = Sequence::normalize(raw);
        self.recompute()
    }

    pub fn given(&self) -> &Sequence {
        &self.given
    }

    pub fn observed(&self) -> &Sequence {
        &self.observed
    }

    pub fn state(&self) -> Evaluation {
        self.state
    }

    fn recompute(&mut self) -> Evaluation {
        let next = Evaluation::from(evaluate(&self.given, &self.observed));
        if next.as_str() != self.state.as_str() {
            tracing::debug!(from = self.state.as_str(), to = next.as_str(), "state transition");
        }
        self.state = next;
        next
    }
}
