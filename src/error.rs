use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ModelError {
    #[error("cannot provide both '{wire_key}' and '{alias}' for {model}.{field}")]
    ConflictingKeys {
        model: String,
        field: String,
        wire_key: String,
        alias: String,
    },

    #[error("invalid value '{value}' for {model}.{field}: must be one of [{allowed}]")]
    InvalidEnumValue {
        model: String,
        field: String,
        value: String,
        allowed: String,
    },

    #[error("invalid value for {model}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        model: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("{model}.{field} is pinned to {pinned}, cannot assign {value}")]
    PinnedAttribute {
        model: String,
        field: String,
        pinned: String,
        value: String,
    },

    #[error("unknown attribute '{attribute}' for {model}")]
    UnknownAttribute { model: String, attribute: String },

    #[error("invalid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err.to_string())
    }
}
