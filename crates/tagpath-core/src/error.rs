//! Error types and exit codes for tagpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid threshold)
//! - 3: Data error (malformed record, duplicate id, unknown vertex)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tagpath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed catalog, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during tagpath operations
#[derive(Error, Debug)]
pub enum TagpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid tag threshold: {value} (must be at least 1)")]
    InvalidThreshold { value: u32 },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("catalog not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("malformed record #{index}: field `{field}` {reason}")]
    MalformedRecord {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("duplicate item id in catalog: {id}")]
    DuplicateId { id: u32 },

    /// Neighbor query against an id that has no vertex
    #[error("vertex not found: {id}")]
    VertexNotFound { id: u32 },

    /// Path query against an id that has no vertex
    #[error("unknown vertex: {id}")]
    UnknownVertex { id: u32 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TagpathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TagpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a malformed-record error naming the offending field
    pub fn malformed(index: usize, field: &str, reason: impl std::fmt::Display) -> Self {
        TagpathError::MalformedRecord {
            index,
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Re-tag a malformed-record error with its position in the input
    pub fn at_index(self, index: usize) -> Self {
        match self {
            TagpathError::MalformedRecord { field, reason, .. } => TagpathError::MalformedRecord {
                index,
                field,
                reason,
            },
            other => other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TagpathError::UnknownFormat(_)
            | TagpathError::UsageError(_)
            | TagpathError::InvalidThreshold { .. }
            | TagpathError::InvalidValue { .. } => ExitCode::Usage,

            TagpathError::CatalogNotFound { .. }
            | TagpathError::MalformedRecord { .. }
            | TagpathError::DuplicateId { .. }
            | TagpathError::VertexNotFound { .. }
            | TagpathError::UnknownVertex { .. } => ExitCode::Data,

            TagpathError::Io(_)
            | TagpathError::Json(_)
            | TagpathError::Toml(_)
            | TagpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TagpathError::UnknownFormat(_) => "unknown_format",
            TagpathError::UsageError(_) => "usage_error",
            TagpathError::InvalidThreshold { .. } => "invalid_threshold",
            TagpathError::InvalidValue { .. } => "invalid_value",
            TagpathError::CatalogNotFound { .. } => "catalog_not_found",
            TagpathError::MalformedRecord { .. } => "malformed_record",
            TagpathError::DuplicateId { .. } => "duplicate_id",
            TagpathError::VertexNotFound { .. } => "vertex_not_found",
            TagpathError::UnknownVertex { .. } => "unknown_vertex",
            TagpathError::Io(_) => "io_error",
            TagpathError::Json(_) => "json_error",
            TagpathError::Toml(_) => "toml_error",
            TagpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            TagpathError::MalformedRecord { index, field, .. } => {
                error_obj["index"] = serde_json::json!(index);
                error_obj["field"] = serde_json::json!(field);
            }
            TagpathError::DuplicateId { id }
            | TagpathError::VertexNotFound { id }
            | TagpathError::UnknownVertex { id } => {
                error_obj["id"] = serde_json::json!(id);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for tagpath operations
pub type Result<T> = std::result::Result<T, TagpathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TagpathError::InvalidThreshold { value: 0 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TagpathError::VertexNotFound { id: 7 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TagpathError::UnknownVertex { id: 7 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TagpathError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_not_found_and_unknown_are_distinct() {
        let a = TagpathError::VertexNotFound { id: 1 };
        let b = TagpathError::UnknownVertex { id: 1 };
        assert_ne!(a.error_type(), b.error_type());
    }

    #[test]
    fn test_malformed_message_names_field() {
        let err = TagpathError::malformed(4, "acRate", "is not a number");
        assert_eq!(
            err.to_string(),
            "malformed record #4: field `acRate` is not a number"
        );
    }

    #[test]
    fn test_at_index_retags_malformed_only() {
        let err = TagpathError::malformed(0, "title", "is empty").at_index(12);
        assert!(matches!(
            err,
            TagpathError::MalformedRecord { index: 12, .. }
        ));

        let other = TagpathError::DuplicateId { id: 3 }.at_index(12);
        assert!(matches!(other, TagpathError::DuplicateId { id: 3 }));
    }

    #[test]
    fn test_to_json_envelope() {
        let json = TagpathError::UnknownVertex { id: 42 }.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_vertex");
        assert_eq!(json["error"]["id"], 42);
    }
}
