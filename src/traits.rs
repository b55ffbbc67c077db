use std::any::Any;
use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TemplateError;
use crate::types::ResourceAttributes;

/// The property bag of one resource kind, e.g. the fields of an
/// `AWS::SQS::Queue`.
///
/// Implementors are plain serde structs whose fields carry
/// `#[serde(skip_serializing_if = "is_zero")]`; the envelope codec wraps them
/// in `Type`/`Properties` and attaches the attributes. The `Default` value is
/// the kind's zero value, which is what an envelope without `Properties`
/// decodes to.
pub trait ResourceProperties:
    Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// The wire discriminator (e.g. `AWS::Lambda::Function`). Constant per kind.
    fn resource_type() -> &'static str;
}

/// Kinds that accept a `CreationPolicy` attribute.
pub trait SupportsCreationPolicy: ResourceProperties {}

/// Kinds that accept an `UpdatePolicy` attribute.
pub trait SupportsUpdatePolicy: ResourceProperties {}

/// Nested property-only kinds (e.g. `AWS::Lambda::Function.Code`).
pub trait PropertyType {
    fn property_type() -> &'static str;
}

/// Type-erased typed resource, as stored in a template's Resources map.
pub trait AnyResource: Debug + Send + Sync {
    /// The discriminator of the concrete kind.
    fn resource_type(&self) -> &'static str;

    fn attributes(&self) -> &ResourceAttributes;

    /// Encode into the wire envelope.
    fn to_envelope(&self) -> Result<Value, TemplateError>;

    /// Downcast support, used to recover the concrete `Resource<P>`.
    fn as_any(&self) -> &dyn Any;

    fn clone_box(&self) -> Box<dyn AnyResource>;
}

impl Clone for Box<dyn AnyResource> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Declare the discriminator of a resource kind.
///
/// ```rust
/// use formwork_core::{resource_kind, is_zero};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// #[serde(default, rename_all = "PascalCase")]
/// pub struct Queue {
///     #[serde(skip_serializing_if = "is_zero")]
///     pub name: String,
/// }
///
/// resource_kind!(Queue => "Ns::Service::Queue");
/// ```
#[macro_export]
macro_rules! resource_kind {
    ($ty:ty => $resource_type:literal) => {
        impl $crate::ResourceProperties for $ty {
            fn resource_type() -> &'static str {
                $resource_type
            }
        }
    };
    ($ty:ty => $resource_type:literal, creation_policy) => {
        $crate::resource_kind!($ty => $resource_type);
        impl $crate::SupportsCreationPolicy for $ty {}
    };
    ($ty:ty => $resource_type:literal, update_policy) => {
        $crate::resource_kind!($ty => $resource_type);
        impl $crate::SupportsUpdatePolicy for $ty {}
    };
    ($ty:ty => $resource_type:literal, creation_policy, update_policy) => {
        $crate::resource_kind!($ty => $resource_type);
        impl $crate::SupportsCreationPolicy for $ty {}
        impl $crate::SupportsUpdatePolicy for $ty {}
    };
}

/// Declare the discriminator of a nested property type.
#[macro_export]
macro_rules! property_type {
    ($ty:ty => $property_type:literal) => {
        impl $crate::PropertyType for $ty {
            fn property_type() -> &'static str {
                $property_type
            }
        }
    };
}
