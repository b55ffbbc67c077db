//! Deletion and replacement policy tokens.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// What happens to a resource when it is removed from the stack, or (as
/// `UpdateReplacePolicy`) when an update replaces it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `UpdateReplacePolicy` accepts the same tokens.
pub type UpdateReplacePolicy = DeletionPolicy;
