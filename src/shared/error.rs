use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the evaluation stream was applied and the snapshot printed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed input, configuration error, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph aggregation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CrossDepsError {
    #[error("Invalid item spec in evaluation data: the item identifier is empty\n\n💡 Hint: Every evaluation item must carry a non-empty identifier, conventionally '<target>/<name>'")]
    InvalidItemSpec,

    #[error("Cannot release aggregate view {view_id}: it is not registered with this registry\n\n💡 Hint: The view was already released, or release_view was called twice")]
    ViewNotRegistered { view_id: uuid::Uuid },

    #[error("Cannot release aggregate view {view_id}: it belongs to a different registry instance\n\n💡 Hint: Views must be released by the registry that created them")]
    ForeignView { view_id: uuid::Uuid },

    #[error("Failed to read evaluation input: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    InputReadError { path: PathBuf, details: String },

    #[error("Failed to parse evaluation input: {path}\nDetails: {details}\n\n💡 Hint: The input must be a JSON scenario with 'project' and 'evaluations' sections")]
    InputParseError { path: PathBuf, details: String },

    #[error("No configuration properties available for configured project '{project}'\n\n💡 Hint: Every configured project needs a 'targetPath' and, for empty configuration keys, a 'targetFramework' property")]
    MissingConfiguration { project: String },

    /// Validation error for config files and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write output: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_item_spec_display() {
        let error = CrossDepsError::InvalidItemSpec;
        let display = format!("{}", error);
        assert!(display.contains("item identifier is empty"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_view_not_registered_display() {
        let id = uuid::Uuid::new_v4();
        let error = CrossDepsError::ViewNotRegistered { view_id: id };
        let display = format!("{}", error);
        assert!(display.contains("not registered"));
        assert!(display.contains(&id.to_string()));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_foreign_view_display() {
        let id = uuid::Uuid::new_v4();
        let error = CrossDepsError::ForeignView { view_id: id };
        let display = format!("{}", error);
        assert!(display.contains("different registry instance"));
        assert!(display.contains(&id.to_string()));
    }

    #[test]
    fn test_input_parse_error_display() {
        let error = CrossDepsError::InputParseError {
            path: PathBuf::from("/test/scenario.json"),
            details: "missing field `project`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse evaluation input"));
        assert!(display.contains("/test/scenario.json"));
        assert!(display.contains("missing field `project`"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_configuration_display() {
        let error = CrossDepsError::MissingConfiguration {
            project: "App:net472".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("App:net472"));
        assert!(display.contains("targetPath"));
    }
}
