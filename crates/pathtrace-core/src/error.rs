//! Error types and exit codes for pathtrace
//!
//! The search engine itself never fails; these errors belong to the layers
//! around it (graph loading, configuration, CLI validation).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (invalid graph, missing start/goal node)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph, missing node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around a search run
#[derive(Error, Debug)]
pub enum PathtraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {name} (expected: BFS, DFS, Dijkstra, or IDA*)")]
    UnknownAlgorithm { name: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathtraceError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathtraceError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathtraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph document
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        PathtraceError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathtraceError::UnknownFormat(_)
            | PathtraceError::UnknownAlgorithm { .. }
            | PathtraceError::UsageError(_)
            | PathtraceError::InvalidValue { .. } => ExitCode::Usage,

            PathtraceError::NodeNotFound { .. } | PathtraceError::InvalidGraph { .. } => {
                ExitCode::Data
            }

            PathtraceError::Io(_)
            | PathtraceError::Json(_)
            | PathtraceError::Toml(_)
            | PathtraceError::FailedOperationWithTarget { .. }
            | PathtraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathtraceError::UnknownFormat(_) => "unknown_format",
            PathtraceError::UnknownAlgorithm { .. } => "unknown_algorithm",
            PathtraceError::UsageError(_) => "usage_error",
            PathtraceError::InvalidValue { .. } => "invalid_value",
            PathtraceError::NodeNotFound { .. } => "node_not_found",
            PathtraceError::InvalidGraph { .. } => "invalid_graph",
            PathtraceError::Io(_) => "io_error",
            PathtraceError::Json(_) => "json_error",
            PathtraceError::Toml(_) => "toml_error",
            PathtraceError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathtraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Result type alias for pathtrace operations
pub type Result<T> = std::result::Result<T, PathtraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PathtraceError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathtraceError::UnknownAlgorithm {
                name: "A*".to_string()
            }
            .exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathtraceError::NodeNotFound {
                id: "7".to_string()
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            PathtraceError::invalid_graph("negative weight").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            PathtraceError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = PathtraceError::NodeNotFound {
            id: "42".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["code"], 3);
        assert_eq!(json["type"], "node_not_found");
        assert_eq!(json["message"], "node not found: 42");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PathtraceError = io.into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert!(err.to_string().contains("missing"));
    }
}
