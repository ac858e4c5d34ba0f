//! Error types and exit codes for altpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph document, vertex out of range)

use std::fmt;
use thiserror::Error;

use crate::graph::types::Color;

/// Exit codes for the altpath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or precondition violation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Which end of an edge (or which query parameter) referenced a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    EdgeSource(Color),
    EdgeTarget(Color),
    QuerySource,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::EdgeSource(color) => write!(f, "{} edge source", color),
            VertexRole::EdgeTarget(color) => write!(f, "{} edge destination", color),
            VertexRole::QuerySource => write!(f, "query source"),
        }
    }
}

/// Errors that can occur during altpath operations
#[derive(Error, Debug)]
pub enum AltPathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("graph must have at least one vertex (got n = {n})")]
    EmptyGraph { n: i64 },

    #[error("{role} {vertex} out of range [0, {n})")]
    VertexOutOfRange { role: VertexRole, vertex: i64, n: usize },

    #[error("invalid graph document {path}: {reason}")]
    InvalidDocument { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

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

impl AltPathError {
    /// Create an error for a vertex index outside `[0, n)`
    pub fn out_of_range(role: VertexRole, vertex: i64, n: usize) -> Self {
        AltPathError::VertexOutOfRange { role, vertex, n }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl fmt::Display,
        error: impl fmt::Display,
    ) -> Self {
        AltPathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a graph document that parsed but is not usable
    pub fn invalid_document(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        AltPathError::InvalidDocument {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl fmt::Display,
        supported: impl fmt::Display,
    ) -> Self {
        AltPathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AltPathError::UnknownFormat(_)
            | AltPathError::UsageError(_)
            | AltPathError::Unsupported { .. } => ExitCode::Usage,

            AltPathError::EmptyGraph { .. }
            | AltPathError::VertexOutOfRange { .. }
            | AltPathError::InvalidDocument { .. } => ExitCode::Data,

            AltPathError::Io(_)
            | AltPathError::Yaml(_)
            | AltPathError::Json(_)
            | AltPathError::Toml(_)
            | AltPathError::FailedOperationWithTarget { .. }
            | AltPathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AltPathError::UnknownFormat(_) => "unknown_format",
            AltPathError::UsageError(_) => "usage_error",
            AltPathError::Unsupported { .. } => "unsupported",
            AltPathError::EmptyGraph { .. } => "empty_graph",
            AltPathError::VertexOutOfRange { .. } => "vertex_out_of_range",
            AltPathError::InvalidDocument { .. } => "invalid_document",
            AltPathError::Io(_) => "io_error",
            AltPathError::Yaml(_) => "yaml_error",
            AltPathError::Json(_) => "json_error",
            AltPathError::Toml(_) => "toml_error",
            AltPathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            AltPathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let AltPathError::VertexOutOfRange { role, vertex, n } = self {
            error_obj["vertex"] = serde_json::json!(vertex);
            error_obj["n"] = serde_json::json!(n);
            error_obj["role"] = serde_json::json!(role.to_string());
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for altpath operations
pub type Result<T> = std::result::Result<T, AltPathError>;
