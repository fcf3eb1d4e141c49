use super::evaluator::Evaluator;
use crate::model::sequence::Sequence;
use serde::{Deserialize, Serialize};

const RESULT_STATUS: &str = "result";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
}

/// Serializable view of an evaluator: both inputs plus whatever the last
/// recompute produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    pub given: Sequence,
    pub observed: Sequence,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl EvaluationReport {
    pub fn capture(evaluator: &Evaluator) -> Self {
        let state = evaluator.state();
        EvaluationReport {
            given: evaluator.given().clone(),
            observed: evaluator.observed().clone(),
            status: state.as_str().to_string(),
            probability: state.probability().map(|p| p.value()),
            error: state.error().map(|err| ErrorReport {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }

    pub fn is_result(&self) -> bool {
        self.status == RESULT_STATUS
    }

    pub fn to_json(evaluator: &Evaluator) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(evaluator))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
