//! Data model types for templates and resource envelopes.
//!
//! Wire forms:
//! - Resource envelope: `{"Type": ..., "Properties": {...}, <attributes>}`
//! - Polymorphic scalar: `"Foo"` or `["Foo", "Bar"]`
//! - Discriminator: `Namespace::Service::Kind` or `Namespace::Service::Kind.SubKind`

mod attributes;
mod creation_policy;
mod deletion_policy;
mod entry;
mod resource;
mod resource_type;
mod string_or_list;
mod update_policy;
mod zero;

pub use attributes::ResourceAttributes;
pub(crate) use attributes::keys;
pub use creation_policy::{AutoScalingCreationPolicy, CreationPolicy, ResourceSignal};
pub use deletion_policy::{DeletionPolicy, UpdateReplacePolicy};
pub use entry::ResourceEntry;
pub use resource::Resource;
pub use resource_type::ResourceType;
pub use string_or_list::{StringOrList, Transform};
pub(crate) use string_or_list::shape_name;
pub use update_policy::{
    AutoScalingReplacingUpdate, AutoScalingRollingUpdate, AutoScalingScheduledAction,
    CodeDeployLambdaAliasUpdate, UpdatePolicy,
};
pub use zero::{IsZero, is_zero};
