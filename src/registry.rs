//! Type-filtered lookups over a template's Resources collection.
//!
//! Typed entries match by their concrete Rust type; raw entries match by
//! their `Type` string and are decoded on demand. Neither lookup mutates the
//! template: raw entries stay raw and callers receive copies.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::error::TemplateError;
use crate::template::Template;
use crate::traits::ResourceProperties;
use crate::types::{Resource, ResourceEntry, keys};

/// Promote one entry to `Resource<P>`.
///
/// `Ok(None)` means the entry is of some other kind; `Err` means it claims
/// to be `P` but its envelope does not decode as one.
fn promote<P: ResourceProperties>(entry: &ResourceEntry) -> Result<Option<Resource<P>>, TemplateError> {
    match entry {
        ResourceEntry::Typed(resource) => Ok(resource.as_any().downcast_ref::<Resource<P>>().cloned()),
        ResourceEntry::Raw(value) => {
            if value.get(keys::TYPE).and_then(Value::as_str) != Some(P::resource_type()) {
                return Ok(None);
            }
            Resource::<P>::from_envelope(value).map(Some)
        }
    }
}

impl Template {
    /// Every resource whose effective kind is `P`, in collection order.
    ///
    /// Raw entries that carry `P`'s discriminator but fail to decode are
    /// skipped; one malformed entry never aborts the enumeration.
    pub fn get_all_of_kind<P: ResourceProperties>(&self) -> IndexMap<String, Resource<P>> {
        let mut found = IndexMap::new();
        for (name, entry) in &self.resources {
            match promote::<P>(entry) {
                Ok(Some(resource)) => {
                    found.insert(name.clone(), resource);
                }
                Ok(None) => {}
                Err(e) => {
                    debug!(
                        event = "Lookup",
                        phase = "Skip",
                        resource = name.as_str(),
                        kind = P::resource_type(),
                        error = %e
                    );
                }
            }
        }
        debug!(
            event = "Lookup",
            phase = "All",
            kind = P::resource_type(),
            matched = found.len(),
            total = self.resources.len()
        );
        found
    }

    /// The resource named `name`, if it is of kind `P`.
    ///
    /// An absent name, an entry of another kind and an entry that fails to
    /// decode all produce the same `NotFound` error.
    pub fn get_named_of_kind<P: ResourceProperties>(&self, name: &str) -> Result<Resource<P>, TemplateError> {
        let not_found = || TemplateError::NotFound {
            name: name.to_string(),
            kind: P::resource_type().to_string(),
        };

        let entry = self.resources.get(name).ok_or_else(not_found)?;
        match promote::<P>(entry) {
            Ok(Some(resource)) => Ok(resource),
            Ok(None) => Err(not_found()),
            Err(e) => {
                debug!(
                    event = "Lookup",
                    phase = "Named",
                    resource = name,
                    kind = P::resource_type(),
                    error = %e
                );
                Err(not_found())
            }
        }
    }
}
