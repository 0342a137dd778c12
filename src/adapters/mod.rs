// Adapters layer: concrete input and output for the terminal.

pub mod input;
pub mod output;
