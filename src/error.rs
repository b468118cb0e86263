use std::path::PathBuf;
use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Error)]
pub enum SettleError {
    #[error("invalid {kind} value '{raw}': {reason}")]
    Coerce {
        kind: Kind,
        raw: String,
        reason: String,
    },

    #[error("required setting not found (tried {tried})")]
    Required { tried: String },

    #[error("default value has kind {actual}, but the destination is {expected}")]
    DefaultKind { expected: Kind, actual: Kind },

    #[error("invalid document path '{path}': {reason}")]
    Path { path: String, reason: String },

    #[error("malformed document: {source}")]
    Document { source: serde_yaml::Error },

    #[error("document path '{path}' does not address a scalar value")]
    NotScalar { path: String },

    #[error("flag '--{flag}' expects a value")]
    FlagSyntax { flag: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
