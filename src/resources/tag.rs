use serde::{Deserialize, Serialize};

use crate::property_type;
use crate::types::is_zero;

/// Key/value tag shared by most resource kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "is_zero")]
    pub key: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

property_type!(Tag => "Tag");
