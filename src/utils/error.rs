use std::fmt;
use thiserror::Error;

/// Which side of the pipeline touched the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl FileOperation {
    fn gerund(self) -> &'static str {
        match self {
            FileOperation::Read => "reading",
            FileOperation::Write => "writing to",
        }
    }
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOperation::Read => write!(f, "read"),
            FileOperation::Write => write!(f, "write to"),
        }
    }
}

/// Coarse classification used by the driver and the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    IoFailure,
    Configuration,
}

#[derive(Error, Debug)]
pub enum ModifierError {
    #[error("Error: The file '{path}' was not found.")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: You don't have permission to {operation} '{path}'.")]
    PermissionDenied {
        path: String,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Error {} the file '{path}': {source}", .operation.gerund())]
    IoFailure {
        path: String,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required option: {field}")]
    MissingConfig { field: String },
}

impl ModifierError {
    /// Maps an `std::io::Error` raised while touching `path` onto the file
    /// error taxonomy. Writes never report `NotFound`.
    pub fn from_io(path: &str, operation: FileOperation, source: std::io::Error) -> Self {
        let path = path.to_string();
        match (source.kind(), operation) {
            (std::io::ErrorKind::NotFound, FileOperation::Read) => {
                ModifierError::NotFound { path, source }
            }
            (std::io::ErrorKind::PermissionDenied, _) => ModifierError::PermissionDenied {
                path,
                operation,
                source,
            },
            _ => ModifierError::IoFailure {
                path,
                operation,
                source,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ModifierError::NotFound { .. } => ErrorKind::NotFound,
            ModifierError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            ModifierError::IoFailure { .. } => ErrorKind::IoFailure,
            ModifierError::InvalidConfigValue { .. } | ModifierError::MissingConfig { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    /// The path the failing operation was given, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ModifierError::NotFound { path, .. }
            | ModifierError::PermissionDenied { path, .. }
            | ModifierError::IoFailure { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ModifierError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid command-line option {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ModifierError::NotFound { .. } => "Check the file name and the working directory",
            ModifierError::PermissionDenied {
                operation: FileOperation::Read,
                ..
            } => "Choose a file you are allowed to read",
            ModifierError::PermissionDenied {
                operation: FileOperation::Write,
                ..
            } => "Choose an output location you are allowed to write to",
            ModifierError::IoFailure { .. } => {
                "Make sure the path names a UTF-8 text file in an existing directory"
            }
            ModifierError::InvalidConfigValue { .. } | ModifierError::MissingConfig { .. } => {
                "Run with --help to see the accepted options"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModifierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_error(path: &str, operation: FileOperation, kind: io::ErrorKind) -> ModifierError {
        ModifierError::from_io(path, operation, io::Error::new(kind, "boom"))
    }

    #[test]
    fn test_not_found_message() {
        let err = io_error("missing.txt", FileOperation::Read, io::ErrorKind::NotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Error: The file 'missing.txt' was not found.");
        assert_eq!(err.path(), Some("missing.txt"));
    }

    #[test]
    fn test_permission_messages_name_the_operation() {
        let read = io_error("a.txt", FileOperation::Read, io::ErrorKind::PermissionDenied);
        let write = io_error("b.txt", FileOperation::Write, io::ErrorKind::PermissionDenied);

        assert_eq!(read.kind(), ErrorKind::PermissionDenied);
        assert_eq!(
            read.to_string(),
            "Error: You don't have permission to read 'a.txt'."
        );
        assert_eq!(
            write.to_string(),
            "Error: You don't have permission to write to 'b.txt'."
        );
    }

    #[test]
    fn test_io_failure_message_includes_source() {
        let err = io_error("c.txt", FileOperation::Read, io::ErrorKind::InvalidData);
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(err.to_string(), "Error reading the file 'c.txt': boom");

        let err = io_error("d.txt", FileOperation::Write, io::ErrorKind::Other);
        assert_eq!(err.to_string(), "Error writing to the file 'd.txt': boom");
    }

    #[test]
    fn test_write_never_reports_not_found() {
        let err = io_error("no/dir/out.txt", FileOperation::Write, io::ErrorKind::NotFound);
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_exit_codes() {
        let file = io_error("x", FileOperation::Read, io::ErrorKind::NotFound);
        let config = ModifierError::MissingConfig {
            field: "output".to_string(),
        };

        assert_eq!(file.exit_code(), 1);
        assert_eq!(config.exit_code(), 2);
        assert_eq!(config.path(), None);
    }
}
