pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::input::PromptedReader;
pub use adapters::output::ReportFormat;
pub use config::Settings;
pub use crate::core::{evaluator::Evaluator, session::EvaluationSession};
pub use domain::model::{Classification, Evaluation, ScoreRecord, PASS_THRESHOLD};
pub use domain::ports::MarksSource;
pub use utils::error::{EvalError, Result};
