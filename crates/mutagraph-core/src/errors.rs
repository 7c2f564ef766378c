//! Error types for mutagraph.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for all mutagraph operations.
///
/// Every error is fatal; the pipeline is single-pass batch with no transient
/// external dependencies, so nothing is retried.
#[derive(Error, Debug)]
pub enum MutagraphError {
    /// Parallel input columns for dataset construction disagree in length
    #[error("Shape mismatch in {context}: expected {expected} entries, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Input validation errors (out-of-range frequency, unknown category, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// An interaction-graph edge references a node missing from the node set
    #[error("Unknown node '{node}' referenced by edge ({a}, {b})")]
    UnknownNode { node: String, a: String, b: String },

    /// An output artifact could not be written
    #[error("Failed to export {}: {message}", path.display())]
    Export { path: PathBuf, message: String },

    /// I/O errors (directory creation, report writing)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MutagraphError {
    /// Creates a shape mismatch error for a named column set.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        MutagraphError::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        MutagraphError::Validation(message.into())
    }

    /// Creates an unknown node error for an edge endpoint lookup.
    pub fn unknown_node(
        node: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) -> Self {
        MutagraphError::UnknownNode {
            node: node.into(),
            a: a.into(),
            b: b.into(),
        }
    }

    /// Creates an export error with the failing path.
    pub fn export(path: &Path, message: impl Into<String>) -> Self {
        MutagraphError::Export {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = MutagraphError::shape_mismatch("frequency column", 14, 13);
        assert!(err.to_string().contains("frequency column"));
        assert!(err.to_string().contains("14"));
        assert!(err.to_string().contains("13"));

        let err = MutagraphError::unknown_node("XYZ", "BRCA1", "XYZ");
        assert!(err.to_string().contains("XYZ"));
        assert!(err.to_string().contains("BRCA1"));

        let err = MutagraphError::export(Path::new("/tmp/out.svg"), "permission denied");
        assert!(err.to_string().contains("/tmp/out.svg"));
    }
}
