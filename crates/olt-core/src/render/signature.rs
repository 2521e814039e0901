//! Single-line type signatures.
//!
//! Signatures name referenced types (`$Pet`) without expanding them;
//! the body renderer does the opposite. Summaries stay compact, bodies
//! show structure.

use crate::parse::schema::{Schema, SchemaOrRef, TypeSet};
use crate::parse::spec::OpenApiSpec;
use crate::refs::ref_name;

/// Recursion cutoff for signatures.
pub const MAX_SIGNATURE_DEPTH: usize = 3;

/// Render a schema node as a single-line type descriptor.
pub fn type_signature(node: &SchemaOrRef, spec: &OpenApiSpec, depth: usize) -> String {
    if depth > MAX_SIGNATURE_DEPTH {
        return "...".to_string();
    }
    match node {
        SchemaOrRef::Ref { ref_path } => format!("${}", ref_name(ref_path)),
        SchemaOrRef::Schema(schema) => schema_signature(schema, spec, depth),
    }
}

fn schema_signature(schema: &Schema, spec: &OpenApiSpec, depth: usize) -> String {
    if schema.schema_type.as_ref().is_some_and(TypeSet::is_array) {
        let inner = match &schema.items {
            Some(items) => type_signature(items, spec, depth + 1),
            None if depth + 1 > MAX_SIGNATURE_DEPTH => "...".to_string(),
            None => "any".to_string(),
        };
        return format!("array[{inner}]");
    }
    if schema.schema_type.as_ref().is_some_and(TypeSet::is_object) || !schema.properties.is_empty()
    {
        return "object".to_string();
    }
    if !schema.all_of.is_empty() {
        return join_signatures(&schema.all_of, spec, depth, " & ");
    }
    if !schema.one_of.is_empty() {
        return join_signatures(&schema.one_of, spec, depth, " | ");
    }
    if !schema.any_of.is_empty() {
        return join_signatures(&schema.any_of, spec, depth, " | ");
    }
    match &schema.schema_type {
        Some(types) => types.label(),
        None => "any".to_string(),
    }
}

fn join_signatures(
    branches: &[SchemaOrRef],
    spec: &OpenApiSpec,
    depth: usize,
    separator: &str,
) -> String {
    branches
        .iter()
        .map(|branch| type_signature(branch, spec, depth + 1))
        .collect::<Vec<_>>()
        .join(separator)
}
