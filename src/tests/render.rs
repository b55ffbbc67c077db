use std::sync::Arc;

use insta::assert_snapshot;
use serde_json::{Value, json};

use crate::resources::sqs::Queue;
use crate::{IntrinsicResolver, RenderOptions, Renderer, Resource, Template, TemplateError};

/// Replaces `{"Ref": name}` with the matching parameter override.
struct RefSubstitution;

impl RefSubstitution {
    fn replacement(value: &Value, options: &RenderOptions) -> Option<Value> {
        let map = value.as_object()?;
        if map.len() != 1 {
            return None;
        }
        let name = map.get("Ref")?.as_str()?;
        options.parameter_overrides.get(name).cloned()
    }

    fn substitute(value: &mut Value, options: &RenderOptions) {
        if let Some(replacement) = Self::replacement(value, options) {
            *value = replacement;
            return;
        }
        match value {
            Value::Object(map) => map.values_mut().for_each(|v| Self::substitute(v, options)),
            Value::Array(items) => items.iter_mut().for_each(|v| Self::substitute(v, options)),
            _ => {}
        }
    }
}

impl IntrinsicResolver for RefSubstitution {
    fn resolve(&self, input: &[u8], options: &RenderOptions) -> Result<Vec<u8>, TemplateError> {
        let mut value: Value =
            serde_json::from_slice(input).map_err(|e| TemplateError::Intrinsics(e.to_string()))?;
        Self::substitute(&mut value, options);
        serde_json::to_vec_pretty(&value).map_err(|e| TemplateError::Intrinsics(e.to_string()))
    }
}

fn template() -> Template {
    let mut template = Template::new();
    template.add_resource(
        "Queue1",
        Resource::new(Queue {
            redrive_policy: json!({ "deadLetterTargetArn": { "Ref": "DlqArn" } }),
            ..Queue::default()
        }),
    );
    template
}

fn options() -> RenderOptions {
    let mut options = RenderOptions::default();
    options
        .parameter_overrides
        .insert("DlqArn".to_string(), json!("arn:aws:sqs:eu-west-1:1:dlq"));
    options
}

#[test]
fn test_resolver_sees_parameter_overrides() {
    let renderer = Renderer::new()
        .with_resolver(Arc::new(RefSubstitution))
        .with_options(options());
    let json = String::from_utf8(renderer.render_json(&template()).unwrap()).unwrap();
    assert_snapshot!(json, @r###"
    {
      "AWSTemplateFormatVersion": "2010-09-09",
      "Resources": {
        "Queue1": {
          "Type": "AWS::SQS::Queue",
          "Properties": {
            "RedrivePolicy": {
              "deadLetterTargetArn": "arn:aws:sqs:eu-west-1:1:dlq"
            }
          }
        }
      }
    }
    "###);
}

#[test]
fn test_unprocessed_output_keeps_intrinsics() {
    let renderer = Renderer::new()
        .with_resolver(Arc::new(RefSubstitution))
        .with_options(RenderOptions {
            process_intrinsics: false,
            ..options()
        });
    let rendered = renderer.render_json(&template()).unwrap();
    assert_eq!(rendered, template().to_canonical_json().unwrap());
}

#[test]
fn test_yaml_follows_resolved_json() {
    let renderer = Renderer::new()
        .with_resolver(Arc::new(RefSubstitution))
        .with_options(options());
    let yaml = renderer.render_yaml(&template()).unwrap();
    assert!(yaml.contains("deadLetterTargetArn"));
    assert!(yaml.contains("arn:aws:sqs:eu-west-1:1:dlq"));
    assert!(!yaml.contains("Ref"));
}

#[test]
fn test_options_load_from_yaml() {
    let options: RenderOptions = serde_yaml_ng::from_str(
        r#"
process_intrinsics: false
parameter_overrides:
  Stage: prod
"#,
    )
    .unwrap();
    assert!(!options.process_intrinsics);
    assert_eq!(options.indent, 2);
    assert_eq!(options.parameter_overrides["Stage"], json!("prod"));
}
