use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Integer,
    Number,
    Boolean,
    Array,
}

impl SchemaType {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
        }
    }
}

/// Inline schema, `$ref`, named component schema or a single property.
///
/// Fields are declared in the order they appear in the written document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none", default)]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub properties: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none", default)]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<Value>,
}

impl Schema {
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    pub fn object() -> Self {
        Self::of_type(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::of_type(SchemaType::Integer)
    }

    pub fn number() -> Self {
        Self::of_type(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::of_type(SchemaType::Boolean)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type(SchemaType::Array)
        }
    }

    /// `{"$ref": "#/components/schemas/<name>"}`
    pub fn component(name: &str) -> Self {
        Self {
            reference: Some(format!("{COMPONENT_SCHEMA_PREFIX}{name}")),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn minimum(mut self, minimum: impl Into<Number>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    pub fn maximum(mut self, maximum: impl Into<Number>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    pub fn enum_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|name| name == field)
    }

    /// Name of the component this schema points at, if it is a `$ref`.
    pub fn component_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .and_then(|r| r.strip_prefix(COMPONENT_SCHEMA_PREFIX))
    }

    /// Required names with no matching property.
    pub fn missing_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Type label shown in the HTML page; references show the target name.
    pub fn type_label(&self) -> &str {
        match (self.schema_type, self.component_name()) {
            (Some(kind), _) => kind.as_str(),
            (None, Some(name)) => name,
            (None, None) => "any",
        }
    }
}
