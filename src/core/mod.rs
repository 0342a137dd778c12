pub mod evaluator;
pub mod session;
