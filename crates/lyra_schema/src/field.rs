use crate::tags::{TypeTag, WidgetTag};
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

/// Ordered field-name -> descriptor mapping. Declaration order is
/// semantically meaningful and must survive deserialization.
pub type FieldMap = IndexMap<String, FieldDescriptor>;

/// One schema-tree node describing a single control or nesting point.
/// Immutable once loaded; unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Nested fields of a `group` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FieldMap>,
    /// Nested schema of a `toggle` node, built into its container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<SchemaNode>,
    /// Selector value -> nested schema for `multi_toggle` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_map: Option<IndexMap<String, SchemaNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

impl FieldDescriptor {
    pub fn widget_tag(&self) -> Option<WidgetTag> {
        self.widget.as_deref().and_then(WidgetTag::parse)
    }

    pub fn type_tag(&self) -> Option<TypeTag> {
        self.field_type.as_deref().and_then(TypeTag::parse)
    }

    /// Display title, falling back to the field name.
    pub fn title_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(name)
    }

    pub fn choice_list(&self) -> &[String] {
        self.choices.as_deref().unwrap_or(&[])
    }

    pub fn has_choices(&self) -> bool {
        !self.choice_list().is_empty()
    }

    /// Bounds for an integer stepper.
    pub fn spin_bounds(&self) -> (i64, i64) {
        (
            self.minimum.map(|v| v as i64).unwrap_or(0),
            self.maximum.map(|v| v as i64).unwrap_or(100),
        )
    }

    /// Bounds and step for a float stepper.
    pub fn double_spin_bounds(&self) -> (f64, f64, f64) {
        (
            self.minimum.unwrap_or(0.0),
            self.maximum.unwrap_or(100.0),
            self.step.unwrap_or(0.1),
        )
    }

    pub fn label_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn button_text(&self) -> &str {
        self.text.as_deref().unwrap_or("Submit")
    }

    /// Checkbox caption: `text`, else `title`, else the field name.
    pub fn caption<'a>(&'a self, name: &'a str) -> &'a str {
        self.text
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(name)
    }
}

/// A schema node that carries a field map. Accepts both the wrapped form
/// `{"properties": {...}}` and a bare field map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaNode {
    pub properties: FieldMap,
}

impl SchemaNode {
    pub fn new(properties: FieldMap) -> Self {
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Wrapped { properties: FieldMap },
            Bare(FieldMap),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Wrapped { properties } => SchemaNode { properties },
            Repr::Bare(properties) => SchemaNode { properties },
        })
    }
}
