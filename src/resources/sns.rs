use serde::{Deserialize, Serialize};

use crate::types::is_zero;
use crate::{property_type, resource_kind};

use super::Tag;

/// `AWS::SNS::Topic`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Topic {
    #[serde(skip_serializing_if = "is_zero")]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub fifo_topic: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub kms_master_key_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub subscription: Vec<Subscription>,
    #[serde(skip_serializing_if = "is_zero")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "is_zero")]
    pub topic_name: String,
}

/// `AWS::SNS::Topic.Subscription`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "is_zero")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub protocol: String,
}

resource_kind!(Topic => "AWS::SNS::Topic");
property_type!(Subscription => "AWS::SNS::Topic.Subscription");
