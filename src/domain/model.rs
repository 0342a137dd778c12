use serde::Serialize;
use std::fmt;

/// Marks must be strictly greater than this to pass.
pub const PASS_THRESHOLD: i32 = 50;

/// A single subject score, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    marks: i32,
}

impl ScoreRecord {
    pub fn new(marks: i32) -> Self {
        Self { marks }
    }

    pub fn marks(&self) -> i32 {
        self.marks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Pass,
    Fail,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Pass => "PASS",
            Classification::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one run: the record that was read and how it classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub marks: i32,
    pub classification: Classification,
}
