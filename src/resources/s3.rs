use serde::{Deserialize, Serialize};

use crate::types::is_zero;
use crate::{property_type, resource_kind};

use super::Tag;

/// `AWS::S3::Bucket`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bucket {
    #[serde(skip_serializing_if = "is_zero")]
    pub access_control: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub bucket_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub object_lock_enabled: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "is_zero")]
    pub versioning_configuration: Option<VersioningConfiguration>,
}

/// `AWS::S3::Bucket.VersioningConfiguration`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VersioningConfiguration {
    /// `Enabled` or `Suspended`.
    #[serde(skip_serializing_if = "is_zero")]
    pub status: String,
}

resource_kind!(Bucket => "AWS::S3::Bucket");
property_type!(VersioningConfiguration => "AWS::S3::Bucket.VersioningConfiguration");
