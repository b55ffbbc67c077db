//! `UpdatePolicy` resource attribute.

use serde::{Deserialize, Serialize};

use super::zero::is_zero;

/// How CloudFormation handles updates to AutoScaling groups, Lambda aliases,
/// and search or cache clusters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdatePolicy {
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_scaling_replacing_update: Option<AutoScalingReplacingUpdate>,
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_scaling_rolling_update: Option<AutoScalingRollingUpdate>,
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_scaling_scheduled_action: Option<AutoScalingScheduledAction>,
    #[serde(skip_serializing_if = "is_zero")]
    pub code_deploy_lambda_alias_update: Option<CodeDeployLambdaAliasUpdate>,
    #[serde(skip_serializing_if = "is_zero")]
    pub enable_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "is_zero")]
    pub use_online_resharding: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoScalingReplacingUpdate {
    #[serde(skip_serializing_if = "is_zero")]
    pub will_replace: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoScalingRollingUpdate {
    #[serde(skip_serializing_if = "is_zero")]
    pub max_batch_size: Option<u32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_active_instances_percent: Option<u8>,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_instances_in_service: Option<u32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_successful_instances_percent: Option<u8>,
    #[serde(skip_serializing_if = "is_zero")]
    pub pause_time: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub suspend_processes: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub wait_on_resource_signals: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoScalingScheduledAction {
    #[serde(skip_serializing_if = "is_zero")]
    pub ignore_unmodified_group_size_properties: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CodeDeployLambdaAliasUpdate {
    #[serde(skip_serializing_if = "is_zero")]
    pub after_allow_traffic_hook: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub before_allow_traffic_hook: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub deployment_group_name: Option<String>,
}

impl UpdatePolicy {
    pub fn rolling(update: AutoScalingRollingUpdate) -> Self {
        Self {
            auto_scaling_rolling_update: Some(update),
            ..Self::default()
        }
    }

    pub fn replacing(will_replace: bool) -> Self {
        Self {
            auto_scaling_replacing_update: Some(AutoScalingReplacingUpdate {
                will_replace: Some(will_replace),
            }),
            ..Self::default()
        }
    }
}
