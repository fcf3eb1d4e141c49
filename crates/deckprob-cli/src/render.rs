use deckprob_core::eval::report::EvaluationReport;
use deckprob_core::{EvalError, Evaluation, Evaluator};

use crate::config::{OutputConfig, OutputFormat};

/// One-line text form: the probability, or the message explaining why
/// there is none.
pub fn state_line(state: Evaluation, precision: usize) -> String {
    match state {
        Evaluation::Result(p) => format!("Probability: {p:.precision$}"),
        Evaluation::AwaitingInput => format!("Error: {}", EvalError::AwaitingInput),
        Evaluation::Error(err) => format!("Error: {err}"),
    }
}

/// Renders the evaluator in the configured format. JSON is pretty-printed
/// unless `compact` is set.
pub fn render(
    evaluator: &Evaluator,
    output: &OutputConfig,
    compact: bool,
) -> serde_json::Result<String> {
    match output.format {
        OutputFormat::Text => Ok(state_line(evaluator.state(), output.precision)),
        OutputFormat::Json if compact => {
            serde_json::to_string(&EvaluationReport::capture(evaluator))
        }
        OutputFormat::Json => EvaluationReport::to_json(evaluator),
    }
}
