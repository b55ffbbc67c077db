//! A wire value accepted as either a single string or an array of strings.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::TemplateError;

/// Exactly one of a single string or a list of strings.
///
/// Absence is modelled by the holder as `Option<StringOrList>`; a present
/// value always carries one alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringOrList {
    Single(String),
    List(Vec<String>),
}

/// The template level `Transform` value.
pub type Transform = StringOrList;

impl StringOrList {
    /// Decode from a JSON node, naming `field` in the error when the node is
    /// neither a string nor an array of strings.
    pub fn from_value(value: &Value, field: &str) -> Result<Self, TemplateError> {
        let unsupported = || TemplateError::UnsupportedShape {
            field: field.to_string(),
            found: shape_name(value).to_string(),
        };
        match value {
            Value::String(s) => Ok(StringOrList::Single(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(StringOrList::List)
                .ok_or_else(unsupported),
            _ => Err(unsupported()),
        }
    }

    /// Decode an optional holder field, where `null` means absent.
    pub fn from_optional_value(
        value: Option<&Value>,
        field: &str,
    ) -> Result<Option<Self>, TemplateError> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::from_value(value, field).map(Some),
        }
    }

    /// All members, in order. A single string yields one member.
    pub fn values(&self) -> Vec<&str> {
        match self {
            StringOrList::Single(s) => vec![s.as_str()],
            StringOrList::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.values().contains(&needle)
    }
}

/// Human readable name of a JSON node's shape.
pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Display for StringOrList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StringOrList::Single(s) => write!(f, "{s}"),
            StringOrList::List(items) => write!(f, "{}", items.iter().join(", ")),
        }
    }
}

impl From<&str> for StringOrList {
    fn from(s: &str) -> Self {
        StringOrList::Single(s.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(s: String) -> Self {
        StringOrList::Single(s)
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(items: Vec<String>) -> Self {
        StringOrList::List(items)
    }
}

impl From<Vec<&str>> for StringOrList {
    fn from(items: Vec<&str>) -> Self {
        StringOrList::List(items.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for StringOrList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StringOrList::Single(s) => serializer.serialize_str(s),
            StringOrList::List(items) => items.serialize(serializer),
        }
    }
}

struct StringOrListVisitor;

impl<'de> Visitor<'de> for StringOrListVisitor {
    type Value = StringOrList;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an array of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringOrList::Single(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(StringOrList::Single(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<String>()? {
            items.push(item);
        }
        Ok(StringOrList::List(items))
    }
}

impl<'de> Deserialize<'de> for StringOrList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringOrListVisitor)
    }
}
