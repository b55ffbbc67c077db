//! Template rendering: canonical JSON, intrinsic function processing and
//! optional YAML transcoding.
//!
//! The intrinsic function resolver is a pluggable collaborator. The library
//! ships only [`NoOpResolver`]; hosts that evaluate `Fn::*` and `Ref`
//! expressions supply their own implementation of [`IntrinsicResolver`]:
//!
//! ```
//! use std::sync::Arc;
//! use formwork_core::{IntrinsicResolver, RenderOptions, Renderer, Template, TemplateError};
//!
//! struct Uppercase;
//!
//! impl IntrinsicResolver for Uppercase {
//!     fn resolve(&self, input: &[u8], _options: &RenderOptions) -> Result<Vec<u8>, TemplateError> {
//!         Ok(input.to_ascii_uppercase())
//!     }
//! }
//!
//! let renderer = Renderer::new().with_resolver(Arc::new(Uppercase));
//! let out = renderer.render_json(&Template::new()).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"RESOURCES\""));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::TemplateError;
use crate::template::Template;

/// Post-processing step applied to canonical JSON.
///
/// Implementations must not mutate shared state; the same resolver may be
/// used by many renderers at once.
pub trait IntrinsicResolver: Send + Sync {
    fn resolve(&self, input: &[u8], options: &RenderOptions) -> Result<Vec<u8>, TemplateError>;
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpResolver;

impl IntrinsicResolver for NoOpResolver {
    fn resolve(&self, input: &[u8], _options: &RenderOptions) -> Result<Vec<u8>, TemplateError> {
        Ok(input.to_vec())
    }
}

/// Render settings. Missing keys take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Run the resolver over the canonical JSON.
    pub process_intrinsics: bool,
    /// Spaces per indentation level in the canonical JSON.
    pub indent: usize,
    /// Parameter values handed to the resolver.
    pub parameter_overrides: IndexMap<String, Value>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            process_intrinsics: true,
            indent: 2,
            parameter_overrides: IndexMap::new(),
        }
    }
}

#[derive(Clone)]
pub struct Renderer {
    resolver: Arc<dyn IntrinsicResolver>,
    options: RenderOptions,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            resolver: Arc::new(NoOpResolver),
            options: RenderOptions::default(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn IntrinsicResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Canonical JSON, then the resolver unless intrinsic processing is off.
    pub fn render_json(&self, template: &Template) -> Result<Vec<u8>, TemplateError> {
        let canonical = template.to_json_with_indent(self.options.indent)?;
        if !self.options.process_intrinsics {
            debug!(event = "Render", phase = "Intrinsics", skipped = true);
            return Ok(canonical);
        }

        let resolved = self.resolver.resolve(&canonical, &self.options)?;
        debug!(
            event = "Render",
            phase = "Intrinsics",
            input_bytes = canonical.len(),
            output_bytes = resolved.len()
        );
        Ok(resolved)
    }

    /// YAML transcoding of [`Renderer::render_json`]. Key order is kept.
    pub fn render_yaml(&self, template: &Template) -> Result<String, TemplateError> {
        let json = self.render_json(template)?;
        let value: Value = serde_json::from_slice(&json)
            .map_err(|e| TemplateError::Yaml(format!("resolver output is not JSON: {e}")))?;
        let yaml = serde_yaml_ng::to_string(&value)?;
        debug!(event = "Render", phase = "Yaml", bytes = yaml.len());
        Ok(yaml)
    }
}
