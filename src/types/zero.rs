//! The "omit if empty" rule for property projection.
//!
//! Every field of a property set is annotated with
//! `#[serde(skip_serializing_if = "is_zero")]`, so a field is left out of the
//! encoded `Properties` object whenever it holds the zero value for its type:
//! empty string, zero number, `false`, `None`, or an empty collection.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::Value;

/// A value that has a distinguished "empty" state.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

/// Generic predicate for `skip_serializing_if`.
pub fn is_zero<T: IsZero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! impl_is_zero_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsZero for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0 as $ty
                }
            }
        )*
    };
}

impl_is_zero_for_numbers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for IndexMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// Free-form JSON (policy documents, intrinsic function nodes) is only empty
// when it is null; its contents are never pruned.
impl IsZero for Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}
