// CLI error types and user-facing messages

use roster_domain::RosterError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Could not parse {field} from '{input}'")]
    Parse { field: &'static str, input: String },

    #[error("Invalid menu choice: {input}")]
    InvalidChoice { input: String },

    #[error("Invalid student type: {input}")]
    InvalidVariant { input: String },

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line editor error: {0}")]
    Readline(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CliError::Roster(RosterError::DuplicateId { id }) => {
                format!("Error: Student with ID {} already exists.", id)
            }
            CliError::Roster(RosterError::NotFound { id }) => {
                format!("Error: Student with ID {} not found.", id)
            }
            CliError::Roster(e @ RosterError::VariantMismatch { .. }) => {
                format!("Error: {}. Edit cancelled.", e)
            }
            CliError::Parse { field, .. } => {
                format!("Invalid input. Please enter a valid {}.", field)
            }
            CliError::InvalidChoice { .. } => {
                "Invalid choice. Please enter a number between 1 and 5.".to_string()
            }
            CliError::InvalidVariant { .. } => {
                "Invalid student type. Addition cancelled.".to_string()
            }
            CliError::InputClosed => "Input closed.".to_string(),
            CliError::Io(e) => format!("Console I/O failed: {}", e),
            CliError::Readline(msg) => format!("Line editor failed: {}", msg),
            CliError::Config(e) => {
                format!("{}\n\nCheck the file passed with --config.", e)
            }
        }
    }

    /// Whether the command loop can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CliError::Roster(_)
                | CliError::Parse { .. }
                | CliError::InvalidChoice { .. }
                | CliError::InvalidVariant { .. }
        )
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_errors_render_like_console_messages() {
        let err: CliError = RosterError::DuplicateId {
            id: "U001".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Error: Student with ID U001 already exists.");

        let err: CliError = RosterError::NotFound {
            id: "Z9".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Error: Student with ID Z9 not found.");
    }

    #[test]
    fn test_parse_error_message() {
        let err = CliError::Parse {
            field: "number",
            input: "abc".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Invalid input. Please enter a valid number."
        );
    }

    #[test]
    fn test_recoverable_split() {
        assert!(CliError::InvalidChoice {
            input: "9".to_string()
        }
        .is_recoverable());
        assert!(CliError::Parse {
            field: "age",
            input: "x".to_string()
        }
        .is_recoverable());
        assert!(!CliError::InputClosed.is_recoverable());
        assert!(!CliError::Io(std::io::Error::other("broken pipe")).is_recoverable());
    }
}
