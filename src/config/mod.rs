pub mod toml_config;

use crate::adapters::output::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "marks-eval")]
#[command(about = "Reads a score and reports PASS (above 50) or FAIL")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging file and command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: ReportFormat,
}

impl Settings {
    /// 命令列參數優先於設定檔
    pub fn resolve(file: Option<&TomlConfig>, format: Option<&str>) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let format = match format.or_else(|| file.and_then(TomlConfig::format)) {
            Some(f) => f.parse()?,
            None => ReportFormat::default(),
        };

        Ok(Self { format })
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("📁 Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Settings::resolve(file.as_ref(), self.format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, ReportFormat::Text);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();

        let from_file = Settings::resolve(Some(&file), None).unwrap();
        assert_eq!(from_file.format, ReportFormat::Json);

        let overridden = Settings::resolve(Some(&file), Some("text")).unwrap();
        assert_eq!(overridden.format, ReportFormat::Text);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Settings::resolve(None, Some("csv")).is_err());

        let file = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(Settings::resolve(Some(&file), Some("text")).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from(["marks-eval", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
        assert_eq!(cli.settings().unwrap().format, ReportFormat::Json);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_has_no_prompt_flag() {
        assert!(CliConfig::try_parse_from(["marks-eval", "--prompt", "Score? "]).is_err());
    }
}
