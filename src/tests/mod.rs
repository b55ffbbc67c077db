//! Cross-module scenarios: whole templates decoded, queried and rendered.

mod render;

use serde::{Deserialize, Serialize};

use crate::{is_zero, resource_kind};

/// A kind defined outside the bundled catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct NsQueue {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
}

resource_kind!(NsQueue => "Ns::Service::Queue");
