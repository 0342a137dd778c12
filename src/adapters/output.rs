use crate::domain::model::Evaluation;
use crate::utils::error::{EvalError, Result};
use std::io::Write;
use std::str::FromStr;

pub const VALID_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(EvalError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", VALID_FORMATS.join(", ")),
            }),
        }
    }
}

pub fn render(evaluation: &Evaluation, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(evaluation.classification.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string(evaluation)?),
    }
}

pub fn write_report<W: Write>(writer: &mut W, evaluation: &Evaluation, format: ReportFormat) -> Result<()> {
    let report = render(evaluation, format)?;
    writeln!(writer, "{}", report)?;
    writer.flush()?;
    Ok(())
}
