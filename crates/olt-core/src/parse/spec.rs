use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::components::Components;
use super::operation::PathItem;
use super::schema::SchemaOrRef;

/// Info object describing the API.
///
/// Every field is optional: real-world documents routinely omit parts of
/// `info`, and the assembler substitutes display fallbacks instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub openapi: String,

    #[serde(default)]
    pub info: Info,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl OpenApiSpec {
    /// Look up a named schema under `components.schemas`.
    pub fn schema(&self, name: &str) -> Option<&SchemaOrRef> {
        self.components.as_ref()?.schemas.get(name)
    }

    /// Names of all schemas defined under `components.schemas`, in
    /// document order.
    pub fn schema_names(&self) -> impl Iterator<Item = &String> {
        self.components
            .iter()
            .flat_map(|c| c.schemas.keys())
    }
}
