//! Resource attributes: directives that sit next to `Properties` in the
//! envelope rather than inside it.

use indexmap::IndexMap;
use serde_json::Value;

use super::creation_policy::CreationPolicy;
use super::deletion_policy::{DeletionPolicy, UpdateReplacePolicy};
use super::string_or_list::StringOrList;
use super::update_policy::UpdatePolicy;

/// Wire keys of the envelope, in emission order.
pub(crate) mod keys {
    pub const TYPE: &str = "Type";
    pub const PROPERTIES: &str = "Properties";
    pub const DELETION_POLICY: &str = "DeletionPolicy";
    pub const CREATION_POLICY: &str = "CreationPolicy";
    pub const UPDATE_POLICY: &str = "UpdatePolicy";
    pub const UPDATE_REPLACE_POLICY: &str = "UpdateReplacePolicy";
    pub const DEPENDS_ON: &str = "DependsOn";
    pub const CONDITION: &str = "Condition";
    pub const METADATA: &str = "Metadata";
}

/// Every attribute is optional; unset attributes are not emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceAttributes {
    pub deletion_policy: Option<DeletionPolicy>,
    pub creation_policy: Option<CreationPolicy>,
    pub update_policy: Option<UpdatePolicy>,
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    pub depends_on: Option<StringOrList>,
    pub condition: Option<String>,
    pub metadata: IndexMap<String, Value>,
}

impl ResourceAttributes {
    /// True when no attribute is set, so the envelope carries only `Type`
    /// and `Properties`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        assert!(ResourceAttributes::default().is_empty());
    }

    #[test]
    fn test_any_attribute_makes_non_empty() {
        let cases = [
            ResourceAttributes {
                deletion_policy: Some(DeletionPolicy::Retain),
                ..ResourceAttributes::default()
            },
            ResourceAttributes {
                update_policy: Some(UpdatePolicy::default()),
                ..ResourceAttributes::default()
            },
            ResourceAttributes {
                depends_on: Some(StringOrList::from("Queue1")),
                ..ResourceAttributes::default()
            },
            ResourceAttributes {
                condition: Some(String::new()),
                ..ResourceAttributes::default()
            },
            ResourceAttributes {
                metadata: IndexMap::from([("Note".to_string(), json!(null))]),
                ..ResourceAttributes::default()
            },
        ];
        for attributes in cases {
            assert!(!attributes.is_empty(), "{attributes:?}");
        }
    }
}
