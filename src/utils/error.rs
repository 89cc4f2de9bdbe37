use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Date parse error: '{value}' ({reason})")]
    DateParseError { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// 錯誤分類，CLI 用來決定提示與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    State,
    Access,
    Input,
    Configuration,
    System,
}

impl SolidError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SolidError::InvalidState {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SolidError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::InvalidState { .. } => ErrorCategory::State,
            SolidError::AccessDenied { .. } => ErrorCategory::Access,
            SolidError::DateParseError { .. } | SolidError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            SolidError::TomlError(_)
            | SolidError::ConfigError { .. }
            | SolidError::MissingConfigError { .. }
            | SolidError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SolidError::IoError(_)
            | SolidError::SerializationError(_)
            | SolidError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::State => "Connect before issuing queries",
            ErrorCategory::Access => "Pass --user to run as an authenticated session",
            ErrorCategory::Input => "Check the command arguments and try again",
            ErrorCategory::Configuration => "Check the configuration file and environment variables",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::Access => 4,
            ErrorCategory::State | ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message() {
        let err = SolidError::invalid_state("not connected to mysql");
        assert_eq!(err.to_string(), "Invalid state: not connected to mysql");
        assert_eq!(err.category(), ErrorCategory::State);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_categories_map_to_exit_codes() {
        let denied = SolidError::AccessDenied {
            message: "anonymous".to_string(),
        };
        assert_eq!(denied.exit_code(), 4);

        let missing = SolidError::MissingConfigError {
            field: "database.host".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.exit_code(), 3);

        let bad_input = SolidError::validation("start after end");
        assert_eq!(bad_input.exit_code(), 2);
    }
}
