//! The template document: named collections plus the Resources map.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use serde_yaml_ng::value::TaggedValue;
use serde_yaml_ng::{Mapping, Value as YamlValue};
use tracing::{debug, warn};

use crate::error::TemplateError;
use crate::render::Renderer;
use crate::types::{
    ResourceEntry, ResourceType, StringOrList, Transform, is_zero, keys, shape_name,
};

/// Format version stamped on newly constructed templates.
pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

const TRANSFORM: &str = "Transform";

/// Root document.
///
/// Every collection is always present (possibly empty). Empty collections,
/// an empty description and an absent transform are left out of the encoded
/// output; `Resources` is always written.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion", skip_serializing_if = "is_zero")]
    pub aws_template_format_version: String,

    #[serde(rename = "Transform", skip_serializing_if = "is_zero")]
    pub transform: Option<Transform>,

    #[serde(rename = "Description", skip_serializing_if = "is_zero")]
    pub description: String,

    #[serde(rename = "Metadata", skip_serializing_if = "is_zero")]
    pub metadata: IndexMap<String, Value>,

    #[serde(rename = "Parameters", skip_serializing_if = "is_zero")]
    pub parameters: IndexMap<String, Value>,

    #[serde(rename = "Mappings", skip_serializing_if = "is_zero")]
    pub mappings: IndexMap<String, Value>,

    #[serde(rename = "Conditions", skip_serializing_if = "is_zero")]
    pub conditions: IndexMap<String, Value>,

    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, ResourceEntry>,

    #[serde(rename = "Outputs", skip_serializing_if = "is_zero")]
    pub outputs: IndexMap<String, Value>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// An empty template with the default format version.
    pub fn new() -> Self {
        Self {
            aws_template_format_version: DEFAULT_FORMAT_VERSION.to_string(),
            transform: None,
            description: String::new(),
            metadata: IndexMap::new(),
            parameters: IndexMap::new(),
            mappings: IndexMap::new(),
            conditions: IndexMap::new(),
            resources: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    /// Decode a JSON template. All resources are kept as raw entries.
    pub fn from_json(bytes: &[u8]) -> Result<Self, TemplateError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        Self::from_json(json.as_bytes())
    }

    pub fn from_value(value: Value) -> Result<Self, TemplateError> {
        if !value.is_object() {
            return Err(TemplateError::Decode(format!(
                "template root must be an object, found {}",
                shape_name(&value)
            )));
        }
        RawTemplate::deserialize(value)?.into_template()
    }

    /// Decode a YAML template by way of its JSON equivalent.
    ///
    /// Short-form intrinsic tags are expanded to their long form: `!Ref x`
    /// becomes `{"Ref": "x"}`, `!GetAtt a.b` becomes
    /// `{"Fn::GetAtt": ["a", "b"]}` and any other `!Name v` becomes
    /// `{"Fn::Name": v}`.
    pub fn from_yaml(yaml: &str) -> Result<Self, TemplateError> {
        let document: YamlValue = serde_yaml_ng::from_str(yaml)?;
        let value = serde_json::to_value(expand_short_form(document))
            .map_err(|e| TemplateError::Yaml(e.to_string()))?;
        Self::from_value(value)
    }

    /// Insert a typed resource or a raw envelope, returning any entry that
    /// was previously stored under `name`.
    pub fn add_resource(
        &mut self,
        name: impl Into<String>,
        entry: impl Into<ResourceEntry>,
    ) -> Option<ResourceEntry> {
        self.resources.insert(name.into(), entry.into())
    }

    pub fn add_raw_resource(&mut self, name: impl Into<String>, envelope: Value) -> Option<ResourceEntry> {
        self.add_resource(name, ResourceEntry::Raw(envelope))
    }

    /// The `Type` of the named entry, whatever its representation.
    pub fn resource_type_of(&self, name: &str) -> Option<&str> {
        self.resources.get(name).and_then(ResourceEntry::resource_type)
    }

    /// Pretty printed JSON with two space indentation, before any intrinsic
    /// function processing.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, TemplateError> {
        self.to_json_with_indent(2)
    }

    pub(crate) fn to_json_with_indent(&self, indent: usize) -> Result<Vec<u8>, TemplateError> {
        let indent = " ".repeat(indent);
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
        self.serialize(&mut serializer)
            .map_err(|e| TemplateError::Encode(e.to_string()))?;
        debug!(
            event = "Render",
            phase = "Canonical",
            resources = self.resources.len(),
            bytes = out.len()
        );
        Ok(out)
    }

    /// Canonical JSON passed through the default renderer.
    pub fn to_json(&self) -> Result<Vec<u8>, TemplateError> {
        Renderer::default().render_json(self)
    }

    /// YAML transcoding of [`Template::to_json`].
    pub fn to_yaml(&self) -> Result<String, TemplateError> {
        Renderer::default().render_yaml(self)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::from_json_str(s)
    }
}

/// The document as it appears on the wire. Unknown top-level keys are
/// ignored and `null` collections read as empty.
#[derive(Deserialize)]
struct RawTemplate {
    #[serde(rename = "AWSTemplateFormatVersion", default)]
    format_version: Option<String>,
    #[serde(rename = "Transform", default)]
    transform: Option<Value>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "Metadata", default)]
    metadata: Option<IndexMap<String, Value>>,
    #[serde(rename = "Parameters", default)]
    parameters: Option<IndexMap<String, Value>>,
    #[serde(rename = "Mappings", default)]
    mappings: Option<IndexMap<String, Value>>,
    #[serde(rename = "Conditions", default)]
    conditions: Option<IndexMap<String, Value>>,
    #[serde(rename = "Resources", default)]
    resources: Option<IndexMap<String, Value>>,
    #[serde(rename = "Outputs", default)]
    outputs: Option<IndexMap<String, Value>>,
}

impl RawTemplate {
    fn into_template(self) -> Result<Template, TemplateError> {
        let transform = StringOrList::from_optional_value(self.transform.as_ref(), TRANSFORM)?;

        let resources: IndexMap<String, ResourceEntry> = self
            .resources
            .unwrap_or_default()
            .into_iter()
            .map(|(name, envelope)| {
                check_discriminator(&name, &envelope);
                (name, ResourceEntry::Raw(envelope))
            })
            .collect();

        debug!(
            event = "Decode",
            phase = "Template",
            resources = resources.len()
        );

        Ok(Template {
            aws_template_format_version: self.format_version.unwrap_or_default(),
            transform,
            description: self.description.unwrap_or_default(),
            metadata: self.metadata.unwrap_or_default(),
            parameters: self.parameters.unwrap_or_default(),
            mappings: self.mappings.unwrap_or_default(),
            conditions: self.conditions.unwrap_or_default(),
            resources,
            outputs: self.outputs.unwrap_or_default(),
        })
    }
}

/// Raw entries are kept regardless; a missing or malformed `Type` only makes
/// them unreachable through the typed lookups.
fn check_discriminator(name: &str, envelope: &Value) {
    match envelope.get(keys::TYPE).and_then(Value::as_str) {
        Some(resource_type) => {
            if let Err(e) = ResourceType::from_str(resource_type) {
                warn!(event = "Decode", phase = "Resources", resource = name, error = %e);
            }
        }
        None => {
            warn!(
                event = "Decode",
                phase = "Resources",
                resource = name,
                "resource has no string Type"
            );
        }
    }
}

fn expand_short_form(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            let tag = tag.to_string();
            let name = tag.trim_start_matches('!');
            let argument = expand_short_form(value);
            let (key, argument) = match name {
                "Ref" | "Condition" => (name.to_string(), argument),
                "GetAtt" => ("Fn::GetAtt".to_string(), split_get_att(argument)),
                _ => (format!("Fn::{name}"), argument),
            };
            let mut long_form = Mapping::new();
            long_form.insert(YamlValue::String(key), argument);
            YamlValue::Mapping(long_form)
        }
        YamlValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(expand_short_form).collect())
        }
        YamlValue::Mapping(mapping) => YamlValue::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (key, expand_short_form(value)))
                .collect(),
        ),
        other => other,
    }
}

/// `Resource.Attribute` splits at the first dot; list arguments pass through.
fn split_get_att(argument: YamlValue) -> YamlValue {
    match argument {
        YamlValue::String(path) => match path.split_once('.') {
            Some((resource, attribute)) => YamlValue::Sequence(vec![
                YamlValue::String(resource.to_string()),
                YamlValue::String(attribute.to_string()),
            ]),
            None => YamlValue::String(path),
        },
        other => other,
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Template::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resource;
    use crate::resources::sqs::Queue;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_new_template_is_empty() {
        let template = Template::new();
        assert_eq!(template.aws_template_format_version, "2010-09-09");
        assert!(template.transform.is_none());
        assert!(template.description.is_empty());
        assert!(template.metadata.is_empty());
        assert!(template.parameters.is_empty());
        assert!(template.mappings.is_empty());
        assert!(template.conditions.is_empty());
        assert!(template.resources.is_empty());
        assert!(template.outputs.is_empty());
    }

    #[test]
    fn test_empty_template_encoding() {
        let json = String::from_utf8(Template::new().to_canonical_json().unwrap()).unwrap();
        assert_snapshot!(json, @r###"
        {
          "AWSTemplateFormatVersion": "2010-09-09",
          "Resources": {}
        }
        "###);
    }

    #[test]
    fn test_decode_keeps_resources_raw() {
        let template = Template::from_json_str(
            r#"{
                "AWSTemplateFormatVersion": "2010-09-09",
                "Description": "queues",
                "Resources": {
                    "Queue1": { "Type": "AWS::SQS::Queue", "Properties": { "QueueName": "q" } }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(template.description, "queues");
        assert!(!template.resources["Queue1"].is_typed());
        assert_eq!(template.resource_type_of("Queue1"), Some("AWS::SQS::Queue"));
        assert_eq!(template.resource_type_of("Missing"), None);
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_nulls() {
        let template = Template::from_value(json!({
            "Globals": { "Function": { "Timeout": 3 } },
            "Parameters": null,
            "Resources": null,
            "Transform": null
        }))
        .unwrap();
        assert!(template.parameters.is_empty());
        assert!(template.resources.is_empty());
        assert!(template.transform.is_none());
        assert_eq!(template.aws_template_format_version, "");
    }

    #[test]
    fn test_decode_transform_shapes() {
        let single = Template::from_value(json!({ "Transform": "Foo" })).unwrap();
        assert_eq!(single.transform, Some(StringOrList::Single("Foo".to_string())));

        let list = Template::from_value(json!({ "Transform": ["Foo", "Bar"] })).unwrap();
        assert_eq!(
            list.transform,
            Some(StringOrList::List(vec!["Foo".to_string(), "Bar".to_string()]))
        );

        let err = Template::from_value(json!({ "Transform": {} })).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnsupportedShape {
                field: "Transform".to_string(),
                found: "object".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let err = Template::from_json(b"{\"Resources\": [").unwrap_err();
        assert!(matches!(err, TemplateError::Decode(_)));

        let err = Template::from_json(b"[]").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Decode("template root must be an object, found array".to_string())
        );

        let err = Template::from_json_str(r#"{ "Description": 5 }"#).unwrap_err();
        assert!(matches!(err, TemplateError::Decode(_)));
    }

    #[test]
    fn test_decode_yaml() {
        let template = Template::from_yaml(
            r#"
AWSTemplateFormatVersion: "2010-09-09"
Transform: AWS::Serverless-2016-10-31
Resources:
  Queue1:
    Type: AWS::SQS::Queue
    Properties:
      QueueName: q
"#,
        )
        .unwrap();
        assert_eq!(
            template.transform,
            Some(StringOrList::from("AWS::Serverless-2016-10-31"))
        );
        assert_eq!(template.resource_type_of("Queue1"), Some("AWS::SQS::Queue"));
    }

    #[test]
    fn test_decode_yaml_short_form_tags() {
        let template = Template::from_yaml(
            r#"
Conditions:
  IsProd: !Equals [!Ref Stage, prod]
Resources:
  Queue1:
    Type: AWS::SQS::Queue
    Condition: IsProd
    Properties:
      QueueName: jobs
      RedrivePolicy:
        deadLetterTargetArn: !GetAtt Dlq.Arn
        maxReceiveCount: 3
Outputs:
  Name:
    Value: !Sub "${AWS::StackName}-jobs"
  Both:
    Value: !Join ["-", [!GetAtt [Queue1, QueueName], !Ref "AWS::Region"]]
"#,
        )
        .unwrap();

        assert_eq!(
            template.conditions["IsProd"],
            json!({ "Fn::Equals": [{ "Ref": "Stage" }, "prod"] })
        );
        let queue = template.get_named_of_kind::<Queue>("Queue1").unwrap();
        assert_eq!(
            queue.properties().redrive_policy,
            json!({ "deadLetterTargetArn": { "Fn::GetAtt": ["Dlq", "Arn"] }, "maxReceiveCount": 3 })
        );
        assert_eq!(queue.properties().queue_name, "jobs");
        assert_eq!(
            template.outputs["Name"],
            json!({ "Value": { "Fn::Sub": "${AWS::StackName}-jobs" } })
        );
        assert_eq!(
            template.outputs["Both"],
            json!({ "Value": { "Fn::Join": ["-", [
                { "Fn::GetAtt": ["Queue1", "QueueName"] },
                { "Ref": "AWS::Region" }
            ]] } })
        );
    }

    #[test]
    fn test_decode_yaml_short_form_stays_in_raw_entry() {
        let template = Template::from_yaml(
            r#"
Resources:
  Queue1:
    Type: AWS::SQS::Queue
    Properties:
      QueueName: !Ref Name
"#,
        )
        .unwrap();
        assert_eq!(
            template.resources["Queue1"].to_envelope().unwrap()["Properties"]["QueueName"],
            json!({ "Ref": "Name" })
        );
    }

    #[test]
    fn test_decode_invalid_yaml() {
        let err = Template::from_yaml("Resources: [unclosed").unwrap_err();
        assert!(matches!(err, TemplateError::Yaml(_)));
    }

    #[test]
    fn test_encode_omits_empty_collections_and_keeps_order() {
        let mut template = Template::new();
        template.description = "demo".to_string();
        template.transform = Some(StringOrList::from("AWS::Serverless-2016-10-31"));
        template
            .outputs
            .insert("QueueUrl".to_string(), json!({ "Value": { "Ref": "Queue1" } }));
        template.add_resource(
            "Queue1",
            Resource::new(Queue {
                queue_name: "q".to_string(),
                ..Queue::default()
            }),
        );
        let json = String::from_utf8(template.to_canonical_json().unwrap()).unwrap();
        assert_snapshot!(json, @r###"
        {
          "AWSTemplateFormatVersion": "2010-09-09",
          "Transform": "AWS::Serverless-2016-10-31",
          "Description": "demo",
          "Resources": {
            "Queue1": {
              "Type": "AWS::SQS::Queue",
              "Properties": {
                "QueueName": "q"
              }
            }
          },
          "Outputs": {
            "QueueUrl": {
              "Value": {
                "Ref": "Queue1"
              }
            }
          }
        }
        "###);
    }

    #[test]
    fn test_add_resource_replaces() {
        let mut template = Template::new();
        assert!(template.add_raw_resource("A", json!({ "Type": "AWS::SQS::Queue" })).is_none());
        let previous = template.add_resource("A", Resource::new(Queue::default()));
        assert!(matches!(previous, Some(ResourceEntry::Raw(_))));
        assert!(template.resources["A"].is_typed());
    }

    #[test]
    fn test_serde_deserialize_and_from_str() {
        let template: Template =
            serde_json::from_str(r#"{ "Resources": { "A": { "Type": "AWS::SQS::Queue" } } }"#)
                .unwrap();
        assert_eq!(template.resources.len(), 1);

        let parsed: Template = r#"{ "Resources": {} }"#.parse().unwrap();
        assert!(parsed.resources.is_empty());

        assert!(serde_json::from_str::<Template>(r#"{ "Transform": 1 }"#).is_err());
    }
}
