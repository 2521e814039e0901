//! Reference resolution and `$ref` collection.
//!
//! Resolution is deliberately lenient: a dangling or malformed reference
//! yields `None` ("no information") instead of an error, because source
//! documents are often incomplete or versioned independently of the
//! renderer.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::parse::schema::{Schema, SchemaOrRef};
use crate::parse::spec::OpenApiSpec;

/// Longest alias chain followed before a lookup gives up. Named schemas
/// that are themselves references can form cycles.
const MAX_ALIAS_HOPS: usize = 8;

/// The display name of a reference: the last `/`-separated segment of a
/// path like `#/components/schemas/Pet`.
pub fn ref_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Resolve a reference to the schema node it designates, by name lookup
/// into the document's schema map.
pub fn resolve<'a>(ref_path: &str, spec: &'a OpenApiSpec) -> Option<&'a Schema> {
    let mut name = ref_name(ref_path);
    for _ in 0..MAX_ALIAS_HOPS {
        match spec.schema(name)? {
            SchemaOrRef::Schema(schema) => return Some(schema.as_ref()),
            SchemaOrRef::Ref { ref_path } => name = ref_name(ref_path),
        }
    }
    None
}

/// Collect the name of every `$ref` found anywhere inside a JSON-like
/// value: one polymorphic walk dispatching on mapping, sequence, or
/// scalar.
pub fn collect_ref_names(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(path) = child.as_str() {
                        out.insert(ref_name(path).to_string());
                    }
                } else {
                    collect_ref_names(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ref_names(item, out);
            }
        }
        _ => {}
    }
}

/// Reference names found anywhere inside a typed node.
///
/// The node is serialized and walked; a node that fails to serialize
/// contributes nothing.
pub fn ref_names_of<T: Serialize>(node: &T) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    if let Ok(value) = serde_json::to_value(node) {
        collect_ref_names(&value, &mut names);
    }
    names
}
