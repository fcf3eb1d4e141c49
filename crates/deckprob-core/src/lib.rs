#![deny(warnings)]
pub mod eval;
pub mod model;

pub use eval::{EvalError, Evaluation, Evaluator, Probability, evaluate};
pub use model::sequence::Sequence;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "deckprob"
    }

    pub const fn codename() -> &'static str {
        "Order Matters"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
