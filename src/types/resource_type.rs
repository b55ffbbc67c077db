//! Parsed resource discriminators.
//!
//! Canonical forms:
//! - Resource kind: `AWS::SQS::Queue`, `Custom::Provisioner`
//! - Nested property kind: `AWS::Lambda::Function.Code`
//!
//! Matching is exact and case-sensitive; parsing never normalizes.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TemplateError;

static RESOURCE_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:::[A-Za-z0-9_-]+)+(?:\.[A-Za-z0-9]+)?$")
        .expect("resource type pattern is valid")
});

/// A validated discriminator string split into its segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceType {
    segments: Vec<String>,
    property: Option<String>,
}

impl ResourceType {
    /// First segment, e.g. `AWS` or `Custom`.
    pub fn namespace(&self) -> &str {
        &self.segments[0]
    }

    /// Middle segment for three part names (`SQS` in `AWS::SQS::Queue`).
    pub fn service(&self) -> Option<&str> {
        if self.segments.len() >= 3 {
            Some(&self.segments[1])
        } else {
            None
        }
    }

    /// Last segment, e.g. `Queue`.
    pub fn kind(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// The sub-kind of a nested property type (`Code` in `...Function.Code`).
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn is_property_type(&self) -> bool {
        self.property.is_some()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for ResourceType {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !RESOURCE_TYPE_PATTERN.is_match(s) {
            return Err(TemplateError::InvalidResourceType(format!(
                "'{s}' (expected Namespace::Service::Kind or Namespace::Service::Kind.SubKind)"
            )));
        }

        let (path, property) = match s.split_once('.') {
            Some((path, property)) => (path, Some(property.to_string())),
            None => (s, None),
        };
        let segments = path.split("::").map(str::to_string).collect();

        Ok(ResourceType { segments, property })
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.segments.iter().join("::"))?;
        if let Some(property) = &self.property {
            write!(f, ".{property}")?;
        }
        Ok(())
    }
}
