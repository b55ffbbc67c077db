use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource_kind;
use crate::types::is_zero;

use super::Tag;

/// `AWS::SQS::Queue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Queue {
    #[serde(skip_serializing_if = "is_zero")]
    pub content_based_deduplication: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub delay_seconds: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub fifo_queue: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub kms_master_key_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub maximum_message_size: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_retention_period: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub queue_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub receive_message_wait_time_seconds: i64,
    /// Free-form redrive policy document.
    #[serde(skip_serializing_if = "is_zero")]
    pub redrive_policy: Value,
    #[serde(skip_serializing_if = "is_zero")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "is_zero")]
    pub visibility_timeout: Option<i64>,
}

resource_kind!(Queue => "AWS::SQS::Queue");
