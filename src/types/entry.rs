//! One value of a template's Resources collection.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::TemplateError;
use crate::traits::{AnyResource, ResourceProperties};

use super::attributes::keys;
use super::resource::Resource;

/// A resource entry is either typed (inserted programmatically) or raw (as
/// decoded from the wire, kind not yet known).
///
/// Raw entries are promoted to typed values only by the template's
/// type-filtered lookups, which return copies and leave the entry as is.
#[derive(Debug, Clone)]
pub enum ResourceEntry {
    Typed(Box<dyn AnyResource>),
    Raw(Value),
}

impl ResourceEntry {
    /// The `Type` discriminator, if the entry carries one.
    pub fn resource_type(&self) -> Option<&str> {
        match self {
            ResourceEntry::Typed(resource) => Some(resource.resource_type()),
            ResourceEntry::Raw(value) => value.get(keys::TYPE).and_then(Value::as_str),
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, ResourceEntry::Typed(_))
    }

    /// The wire envelope of this entry.
    pub fn to_envelope(&self) -> Result<Value, TemplateError> {
        match self {
            ResourceEntry::Typed(resource) => resource.to_envelope(),
            ResourceEntry::Raw(value) => Ok(value.clone()),
        }
    }
}

impl<P: ResourceProperties> From<Resource<P>> for ResourceEntry {
    fn from(resource: Resource<P>) -> Self {
        ResourceEntry::Typed(Box::new(resource))
    }
}

impl From<Value> for ResourceEntry {
    fn from(value: Value) -> Self {
        ResourceEntry::Raw(value)
    }
}

impl Serialize for ResourceEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResourceEntry::Typed(resource) => resource
                .to_envelope()
                .map_err(serde::ser::Error::custom)?
                .serialize(serializer),
            ResourceEntry::Raw(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::sqs::Queue;
    use serde_json::json;

    #[test]
    fn test_typed_entry_type() {
        let entry: ResourceEntry = Resource::new(Queue::default()).into();
        assert!(entry.is_typed());
        assert_eq!(entry.resource_type(), Some("AWS::SQS::Queue"));
    }

    #[test]
    fn test_raw_entry_type() {
        let entry: ResourceEntry = json!({ "Type": "Ns::Service::Queue" }).into();
        assert!(!entry.is_typed());
        assert_eq!(entry.resource_type(), Some("Ns::Service::Queue"));

        let untyped: ResourceEntry = json!({ "Properties": {} }).into();
        assert_eq!(untyped.resource_type(), None);

        let numeric: ResourceEntry = json!({ "Type": 7 }).into();
        assert_eq!(numeric.resource_type(), None);
    }

    #[test]
    fn test_serialize_both_shapes_identically() {
        let typed: ResourceEntry = Resource::new(Queue {
            queue_name: "jobs".to_string(),
            ..Queue::default()
        })
        .into();
        let raw: ResourceEntry =
            json!({ "Type": "AWS::SQS::Queue", "Properties": { "QueueName": "jobs" } }).into();
        assert_eq!(
            serde_json::to_string(&typed).unwrap(),
            serde_json::to_string(&raw).unwrap()
        );
    }
}
