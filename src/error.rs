use std::path::PathBuf;

use thiserror::Error;

/// Process-level outcome of a run.
///
/// `Invalid` and `NotImplemented` are reserved; no current path produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitStatus {
    Success = 0,
    Error = 1,
    #[allow(dead_code)]
    Invalid = 2,
    #[allow(dead_code)]
    NotImplemented = 3,
}

impl ExitStatus {
    /// Exit code handed to the OS. Every failure collapses to 1.
    pub(crate) fn process_code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error | ExitStatus::Invalid | ExitStatus::NotImplemented => 1,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid verbosity level name: '{input}'")]
    InvalidLevel { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid template pattern '{input}': {reason}")]
    InvalidPattern { input: String, reason: String },

    #[error("Failed to read config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Playbooks directory '{}' does not exist or is empty", path.display())]
    PlaybooksUnavailable { path: PathBuf },

    #[error("Directory '{}' does not point to a valid directory", path.display())]
    TemplatesRootMissing { path: PathBuf },

    #[error("No templates found in '{}'", path.display())]
    NoTemplates { path: PathBuf },

    #[error("Cannot determine notebook name and folder for '{}'", path.display())]
    TemplateName { path: PathBuf },

    #[error("Invalid case ID reference: '{input}'")]
    InvalidCaseRef { input: String },

    #[error("Investigations directory '{}' does not exist", path.display())]
    InvestigationsRootMissing { path: PathBuf },

    #[error("Invalid directory name: '{name}'")]
    InvalidDirName { name: String },

    #[error("Directory '{}' already exists", path.display())]
    InvestigationExists { path: PathBuf },

    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{}'", path.display())]
    DirNotVerified { path: PathBuf },

    #[error("Failed to copy the notebook to '{}': {source}", to.display())]
    Copy {
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy the notebook to '{}'", path.display())]
    CopyNotVerified { path: PathBuf },

    #[error("Input closed before a choice was made")]
    InputClosed,

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl AppError {
    pub(crate) fn exit_status(&self) -> ExitStatus {
        ExitStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_statuses_collapse_to_one() {
        assert_eq!(ExitStatus::Success.process_code(), 0);
        assert_eq!(ExitStatus::Error.process_code(), 1);
        assert_eq!(ExitStatus::Invalid.process_code(), 1);
        assert_eq!(ExitStatus::NotImplemented.process_code(), 1);
    }

    #[test]
    fn reserved_statuses_keep_their_values() {
        assert_eq!(ExitStatus::Invalid as i32, 2);
        assert_eq!(ExitStatus::NotImplemented as i32, 3);
    }

    #[test]
    fn app_error_display_exists() {
        let e = AppError::InvestigationExists {
            path: PathBuf::from("Investigations/2025-01-15T09.30 - a"),
        };
        assert_eq!(
            e.to_string(),
            "Directory 'Investigations/2025-01-15T09.30 - a' already exists"
        );
    }

    #[test]
    fn app_error_display_case_ref() {
        let e = AppError::InvalidCaseRef {
            input: "case!".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid case ID reference: 'case!'");
    }

    #[test]
    fn io_errors_carry_their_cause() {
        let e = AppError::CreateDir {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to create directory 'x': denied");
        assert!(std::error::Error::source(&e).is_some());
        assert_eq!(e.exit_status(), ExitStatus::Error);
    }
}
