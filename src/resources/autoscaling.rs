use serde::{Deserialize, Serialize};

use crate::types::is_zero;
use crate::{property_type, resource_kind};

/// `AWS::AutoScaling::AutoScalingGroup`
///
/// Sizes are strings on the wire so they can carry `Ref` values once the
/// intrinsic functions are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoScalingGroup {
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_scaling_group_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub availability_zones: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub desired_capacity: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub health_check_grace_period: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub health_check_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_size: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_size: String,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "is_zero")]
    pub vpc_zone_identifier: Vec<String>,
}

/// `AWS::AutoScaling::AutoScalingGroup.LaunchTemplateSpecification`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateSpecification {
    #[serde(skip_serializing_if = "is_zero")]
    pub launch_template_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub launch_template_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub version: String,
}

resource_kind!(AutoScalingGroup => "AWS::AutoScaling::AutoScalingGroup", creation_policy, update_policy);
property_type!(
    LaunchTemplateSpecification => "AWS::AutoScaling::AutoScalingGroup.LaunchTemplateSpecification"
);
