//! `CreationPolicy` resource attribute.

use serde::{Deserialize, Serialize};

use super::zero::is_zero;

/// Signals CloudFormation waits for before marking a resource created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreationPolicy {
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub resource_signal: Option<ResourceSignal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoScalingCreationPolicy {
    #[serde(skip_serializing_if = "is_zero")]
    pub min_successful_instances_percent: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResourceSignal {
    #[serde(skip_serializing_if = "is_zero")]
    pub count: Option<u32>,
    /// ISO 8601 duration, e.g. `PT15M`.
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout: Option<String>,
}

impl CreationPolicy {
    /// Wait for `count` success signals within `timeout`.
    pub fn signals(count: u32, timeout: impl Into<String>) -> Self {
        Self {
            resource_signal: Some(ResourceSignal {
                count: Some(count),
                timeout: Some(timeout.into()),
            }),
            ..Self::default()
        }
    }

    pub fn with_min_successful_instances_percent(mut self, percent: u8) -> Self {
        self.auto_scaling_creation_policy = Some(AutoScalingCreationPolicy {
            min_successful_instances_percent: Some(percent),
        });
        self
    }
}
