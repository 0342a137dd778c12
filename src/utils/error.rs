use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Input is not a valid integer: '{token}'")]
    InputFormat { token: String },

    #[error("Input ended before any marks were entered")]
    InputExhausted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EvalError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EvalError::InputFormat { token } => {
                format!("'{}' is not a whole number, no result was produced", token)
            }
            EvalError::InputExhausted => "No marks were entered".to_string(),
            EvalError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            EvalError::SerializationError(e) => format!("Could not format the result: {}", e),
            EvalError::ConfigError { message } => format!("Configuration problem: {}", message),
            EvalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EvalError::InputFormat { .. } => "Enter marks as an integer, e.g. 75",
            EvalError::InputExhausted => "Pipe or type a score before closing the input stream",
            EvalError::IoError(_) => "Check that stdin and stdout are attached and writable",
            EvalError::SerializationError(_) => "Retry with --format text",
            EvalError::ConfigError { .. } | EvalError::InvalidConfigValueError { .. } => {
                "Check the config file and command line flags"
            }
        }
    }

    /// 根據錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            EvalError::InputFormat { .. } | EvalError::InputExhausted => 1,
            EvalError::ConfigError { .. } | EvalError::InvalidConfigValueError { .. } => 2,
            EvalError::IoError(_) | EvalError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        let format_err = EvalError::InputFormat {
            token: "abc".to_string(),
        };
        assert_eq!(format_err.exit_code(), 1);
        assert_eq!(EvalError::InputExhausted.exit_code(), 1);

        let config_err = EvalError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config_err.exit_code(), 2);

        let io_err = EvalError::from(std::io::Error::other("closed"));
        assert_eq!(io_err.exit_code(), 3);
    }

    #[test]
    fn test_input_format_message_names_token() {
        let err = EvalError::InputFormat {
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("abc"));
        assert!(err.user_friendly_message().contains("abc"));
    }
}
