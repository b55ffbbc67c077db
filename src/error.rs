use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TemplateError {
    #[error("failed to decode template: {0}")]
    Decode(String),

    #[error("failed to decode properties of {kind}{}: {message}", field_suffix(.field))]
    Properties {
        kind: String,
        field: Option<String>,
        message: String,
    },

    #[error("unsupported shape for {field}: expected a string or an array of strings, found {found}")]
    UnsupportedShape { field: String, found: String },

    #[error("resource '{name}' of type {kind} not found")]
    NotFound { name: String, kind: String },

    #[error("failed to encode template: {0}")]
    Encode(String),

    #[error("intrinsic function processing failed: {0}")]
    Intrinsics(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Invalid resource type: {0}")]
    InvalidResourceType(String),
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(field) => format!(" (field '{field}')"),
        None => String::new(),
    }
}

impl TemplateError {
    /// True for both root level and `Properties` level decode failures.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            TemplateError::Decode(_)
                | TemplateError::Properties { .. }
                | TemplateError::UnsupportedShape { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TemplateError::NotFound { .. })
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Decode(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for TemplateError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        TemplateError::Yaml(err.to_string())
    }
}
