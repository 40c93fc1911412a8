//! Error types and exit codes for grapho
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (unreachable goal, graph violating a precondition)

mod macros;

use crate::graph::NodeId;
use thiserror::Error;

/// Exit codes used by the grapho CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreachable goal, malformed or unsuitable graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during grapho operations
#[derive(Error, Debug)]
pub enum GraphoError {
    // Usage errors (exit code 2)
    #[error("unknown {kind} algorithm: {value} (supported: {supported})")]
    UnknownAlgorithm {
        kind: String,
        value: String,
        supported: String,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("path not found from {start} to {goal}")]
    PathNotFound { start: NodeId, goal: NodeId },

    #[error("graph must be undirected")]
    GraphNotUndirected,

    #[error("graph must be connected ({reachable} of {total} nodes reachable)")]
    GraphNotConnected { reachable: usize, total: usize },

    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    // Generic failures (exit code 1)
    #[error("traversal interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphoError {
    /// Create an error for an algorithm name that does not parse
    pub fn unknown_algorithm(
        kind: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphoError::UnknownAlgorithm {
            kind: kind.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphoError::UnknownAlgorithm { .. }
            | GraphoError::InvalidValue { .. }
            | GraphoError::UsageError(_) => ExitCode::Usage,

            GraphoError::PathNotFound { .. }
            | GraphoError::GraphNotUndirected
            | GraphoError::GraphNotConnected { .. }
            | GraphoError::NodeNotFound { .. } => ExitCode::Data,

            GraphoError::Interrupted
            | GraphoError::Io(_)
            | GraphoError::Toml(_)
            | GraphoError::TomlSer(_)
            | GraphoError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphoError::UnknownAlgorithm { .. } => "unknown_algorithm",
            GraphoError::InvalidValue { .. } => "invalid_value",
            GraphoError::UsageError(_) => "usage_error",
            GraphoError::PathNotFound { .. } => "path_not_found",
            GraphoError::GraphNotUndirected => "graph_not_undirected",
            GraphoError::GraphNotConnected { .. } => "graph_not_connected",
            GraphoError::NodeNotFound { .. } => "node_not_found",
            GraphoError::Interrupted => "interrupted",
            GraphoError::Io(_) => "io_error",
            GraphoError::Toml(_) | GraphoError::TomlSer(_) => "toml_error",
            GraphoError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for grapho operations
pub type Result<T> = std::result::Result<T, GraphoError>;
