//! The resource envelope codec.
//!
//! A typed resource travels on the wire as
//!
//! ```json
//! {
//!   "Type": "AWS::SQS::Queue",
//!   "Properties": { "QueueName": "jobs" },
//!   "DeletionPolicy": "Retain"
//! }
//! ```
//!
//! Only `Properties` is projected into (and parsed from) the kind's own
//! fields; `Type` is derived from the kind and the attributes are siblings.

use std::any::Any;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TemplateError;
use crate::traits::{AnyResource, ResourceProperties, SupportsCreationPolicy, SupportsUpdatePolicy};

use super::attributes::{ResourceAttributes, keys};
use super::creation_policy::CreationPolicy;
use super::deletion_policy::{DeletionPolicy, UpdateReplacePolicy};
use super::string_or_list::{StringOrList, shape_name};
use super::update_policy::UpdatePolicy;

/// A typed resource of kind `P` together with its attributes.
///
/// Attributes are fixed at construction through the `with_*` builders;
/// `with_creation_policy` and `with_update_policy` are only available for
/// kinds that support them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource<P> {
    properties: P,
    attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn resource_type(&self) -> &'static str {
        P::resource_type()
    }

    pub fn properties(&self) -> &P {
        &self.properties
    }

    pub fn into_properties(self) -> P {
        self.properties
    }

    pub fn attributes(&self) -> &ResourceAttributes {
        &self.attributes
    }

    pub fn deletion_policy(&self) -> Option<DeletionPolicy> {
        self.attributes.deletion_policy
    }

    pub fn creation_policy(&self) -> Option<&CreationPolicy> {
        self.attributes.creation_policy.as_ref()
    }

    pub fn update_policy(&self) -> Option<&UpdatePolicy> {
        self.attributes.update_policy.as_ref()
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.attributes.update_replace_policy = Some(policy);
        self
    }

    pub fn with_depends_on(mut self, depends_on: impl Into<StringOrList>) -> Self {
        self.attributes.depends_on = Some(depends_on.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.metadata.insert(key.into(), value);
        self
    }

    /// Encode into the wire envelope.
    pub fn to_envelope(&self) -> Result<Value, TemplateError> {
        serde_json::to_value(self).map_err(|e| TemplateError::Encode(e.to_string()))
    }

    /// Decode a wire envelope believed to be of kind `P`.
    ///
    /// A missing or `null` `Properties` yields the kind's zero value. If the
    /// envelope carries a `Type`, it must be `P`'s discriminator.
    pub fn from_envelope(value: &Value) -> Result<Self, TemplateError> {
        let kind = P::resource_type();
        if !value.is_object() {
            return Err(TemplateError::Decode(format!(
                "resource envelope for {kind} must be an object, found {}",
                shape_name(value)
            )));
        }

        let raw = RawEnvelope::deserialize(value)
            .map_err(|e| TemplateError::Decode(format!("{kind}: {e}")))?;

        match &raw.resource_type {
            None => {}
            Some(Value::String(found)) if found == kind => {}
            Some(Value::String(found)) => {
                return Err(TemplateError::Decode(format!(
                    "expected resource type {kind}, found {found}"
                )));
            }
            Some(other) => {
                return Err(TemplateError::Decode(format!(
                    "{kind}: Type must be a string, found {}",
                    shape_name(other)
                )));
            }
        }

        let properties = match &raw.properties {
            None => P::default(),
            Some(properties) => P::deserialize(properties).map_err(|e| {
                let field = offending_field::<P>(properties);
                debug!(
                    event = "Decode",
                    phase = "Properties",
                    kind = kind,
                    field = ?field,
                    error = %e
                );
                TemplateError::Properties {
                    kind: kind.to_string(),
                    field,
                    message: e.to_string(),
                }
            })?,
        };

        let attributes = ResourceAttributes {
            deletion_policy: raw.deletion_policy,
            creation_policy: raw.creation_policy,
            update_policy: raw.update_policy,
            update_replace_policy: raw.update_replace_policy,
            depends_on: StringOrList::from_optional_value(
                raw.depends_on.as_ref(),
                keys::DEPENDS_ON,
            )?,
            condition: raw.condition,
            metadata: raw.metadata.unwrap_or_default(),
        };

        Ok(Self {
            properties,
            attributes,
        })
    }
}

impl<P: SupportsCreationPolicy> Resource<P> {
    pub fn with_creation_policy(mut self, policy: CreationPolicy) -> Self {
        self.attributes.creation_policy = Some(policy);
        self
    }
}

impl<P: SupportsUpdatePolicy> Resource<P> {
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.attributes.update_policy = Some(policy);
        self
    }
}

impl<P: ResourceProperties> From<P> for Resource<P> {
    fn from(properties: P) -> Self {
        Resource::new(properties)
    }
}

/// The envelope as it appears on the wire. Unknown keys are ignored.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "Type", default)]
    resource_type: Option<Value>,
    #[serde(rename = "Properties", default)]
    properties: Option<Value>,
    #[serde(rename = "DeletionPolicy", default)]
    deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "CreationPolicy", default)]
    creation_policy: Option<CreationPolicy>,
    #[serde(rename = "UpdatePolicy", default)]
    update_policy: Option<UpdatePolicy>,
    #[serde(rename = "UpdateReplacePolicy", default)]
    update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "DependsOn", default)]
    depends_on: Option<Value>,
    #[serde(rename = "Condition", default)]
    condition: Option<String>,
    #[serde(rename = "Metadata", default)]
    metadata: Option<IndexMap<String, Value>>,
}

/// Find the first top-level property that fails to decode on its own.
///
/// Every property set decodes from a partial object (all fields default),
/// so a key that fails in isolation is the one at fault.
fn offending_field<P: ResourceProperties>(properties: &Value) -> Option<String> {
    let object = properties.as_object()?;
    object
        .iter()
        .find(|(key, value)| {
            let mut single = Map::with_capacity(1);
            single.insert((*key).clone(), (*value).clone());
            P::deserialize(&Value::Object(single)).is_err()
        })
        .map(|(key, _)| key.clone())
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attrs = &self.attributes;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(keys::TYPE, P::resource_type())?;
        if self.properties != P::default() {
            map.serialize_entry(keys::PROPERTIES, &self.properties)?;
        }
        if attrs.is_empty() {
            return map.end();
        }
        if let Some(policy) = &attrs.deletion_policy {
            map.serialize_entry(keys::DELETION_POLICY, policy)?;
        }
        if let Some(policy) = &attrs.creation_policy {
            map.serialize_entry(keys::CREATION_POLICY, policy)?;
        }
        if let Some(policy) = &attrs.update_policy {
            map.serialize_entry(keys::UPDATE_POLICY, policy)?;
        }
        if let Some(policy) = &attrs.update_replace_policy {
            map.serialize_entry(keys::UPDATE_REPLACE_POLICY, policy)?;
        }
        if let Some(depends_on) = &attrs.depends_on {
            map.serialize_entry(keys::DEPENDS_ON, depends_on)?;
        }
        if let Some(condition) = &attrs.condition {
            map.serialize_entry(keys::CONDITION, condition)?;
        }
        if !attrs.metadata.is_empty() {
            map.serialize_entry(keys::METADATA, &attrs.metadata)?;
        }
        map.end()
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Resource::from_envelope(&value).map_err(de::Error::custom)
    }
}

impl<P: ResourceProperties> AnyResource for Resource<P> {
    fn resource_type(&self) -> &'static str {
        P::resource_type()
    }

    fn attributes(&self) -> &ResourceAttributes {
        &self.attributes
    }

    fn to_envelope(&self) -> Result<Value, TemplateError> {
        Resource::to_envelope(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn AnyResource> {
        Box::new(self.clone())
    }
}
