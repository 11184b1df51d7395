//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid syllable pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Dictionary could not be loaded
    DictionaryError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::DictionaryError(msg) => write!(f, "Dictionary error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("poems.txt".to_string());
        assert_eq!(error.to_string(), "File not found: poems.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("5-x-5".to_string());
        assert_eq!(error.to_string(), "Invalid pattern: 5-x-5");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("no syllable counter configured".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: no syllable counter configured"
        );
    }

    #[test]
    fn test_dictionary_error_display() {
        let error = CliError::DictionaryError("line 3".to_string());
        assert_eq!(error.to_string(), "Dictionary error: line 3");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::InvalidPattern("0".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(p)) if p == "0"
        ));
    }
}
