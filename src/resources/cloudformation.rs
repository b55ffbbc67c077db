use serde::{Deserialize, Serialize};

use crate::resource_kind;
use crate::types::is_zero;

/// `AWS::CloudFormation::WaitCondition`
///
/// New templates usually express the wait through a `CreationPolicy`
/// instead of `Count`/`Handle`/`Timeout`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WaitCondition {
    #[serde(skip_serializing_if = "is_zero")]
    pub count: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub handle: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout: String,
}

resource_kind!(WaitCondition => "AWS::CloudFormation::WaitCondition", creation_policy);
