use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::is_zero;
use crate::{property_type, resource_kind};

use super::Tag;

/// `AWS::Lambda::Function`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Function {
    #[serde(skip_serializing_if = "is_zero")]
    pub architectures: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub code: Option<Code>,
    #[serde(skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub environment: Option<Environment>,
    #[serde(skip_serializing_if = "is_zero")]
    pub function_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub handler: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub layers: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub memory_size: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub reserved_concurrent_executions: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub role: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub runtime: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout: i64,
}

/// `AWS::Lambda::Function.Code`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Code {
    #[serde(skip_serializing_if = "is_zero")]
    pub image_uri: String,
    #[serde(rename = "S3Bucket", skip_serializing_if = "is_zero")]
    pub s3_bucket: String,
    #[serde(rename = "S3Key", skip_serializing_if = "is_zero")]
    pub s3_key: String,
    #[serde(rename = "S3ObjectVersion", skip_serializing_if = "is_zero")]
    pub s3_object_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub zip_file: String,
}

/// `AWS::Lambda::Function.Environment`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Environment {
    #[serde(skip_serializing_if = "is_zero")]
    pub variables: IndexMap<String, String>,
}

resource_kind!(Function => "AWS::Lambda::Function");
property_type!(Code => "AWS::Lambda::Function.Code");
property_type!(Environment => "AWS::Lambda::Function.Environment");
