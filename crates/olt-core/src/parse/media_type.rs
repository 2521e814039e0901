use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// A media type object, keyed by content type in request and response
/// `content` maps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}
