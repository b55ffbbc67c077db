// src/lib.rs
pub use error::TemplateError;
pub use render::{IntrinsicResolver, NoOpResolver, RenderOptions, Renderer};
pub use template::{DEFAULT_FORMAT_VERSION, Template};
pub use traits::{AnyResource, PropertyType, ResourceProperties, SupportsCreationPolicy, SupportsUpdatePolicy};
pub use types::{
    AutoScalingCreationPolicy, AutoScalingReplacingUpdate, AutoScalingRollingUpdate,
    AutoScalingScheduledAction, CodeDeployLambdaAliasUpdate, CreationPolicy, DeletionPolicy,
    IsZero, Resource, ResourceAttributes, ResourceEntry, ResourceSignal, ResourceType,
    StringOrList, Transform, UpdatePolicy, UpdateReplacePolicy, is_zero,
};

pub mod resources;

mod error;
mod registry;
mod render;
mod template;
mod traits;
mod types;

#[cfg(test)]
mod tests;
