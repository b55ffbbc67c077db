//! A small catalog of resource kinds.
//!
//! Each kind is a plain property struct plus a `resource_kind!` declaration;
//! the envelope codec and the template lookups are generic over them. Kinds
//! outside this catalog are declared the same way in downstream crates.

pub mod autoscaling;
pub mod cloudformation;
pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;
mod tag;

pub use tag::Tag;
