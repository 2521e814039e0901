//! Multi-line schema body rendering.
//!
//! Unlike signatures, bodies expand references through the document's
//! schema map. A reference already being expanded on the current chain
//! truncates to `...`, so cyclic graphs terminate without relying on the
//! depth guard alone.

use indexmap::IndexMap;

use crate::defaults::single_line;
use crate::parse::media_type::MediaType;
use crate::parse::schema::{Schema, SchemaOrRef};
use crate::parse::spec::OpenApiSpec;
use crate::refs::{ref_name, resolve};
use crate::render::signature::type_signature;

/// Recursion cutoff for bodies. Tighter than the signature guard since
/// bodies are visually heavier.
pub const MAX_BODY_DEPTH: usize = 2;

/// Render a schema node as an indented property listing, one line per
/// property, two spaces of indent per depth level.
pub fn render_body(node: &SchemaOrRef, spec: &OpenApiSpec, depth: usize) -> String {
    let mut in_flight = Vec::new();
    render_node(node, spec, depth, &mut in_flight)
}

/// Render the body block for a request or response `content` map.
///
/// A referenced schema gets a `Schema:` naming line followed by its
/// expansion; an inline schema renders directly. Either way the body
/// sits at depth 2 under the operation detail.
pub fn render_media_body(content: &IndexMap<String, MediaType>, spec: &OpenApiSpec) -> String {
    let mut out = String::new();
    for media in content.values() {
        let Some(schema) = &media.schema else {
            continue;
        };
        if let SchemaOrRef::Ref { ref_path } = schema {
            out.push_str(&format!("  Schema: `{}`\n", ref_name(ref_path)));
        }
        out.push_str(&render_body(schema, spec, 2));
    }
    out
}

fn render_node(
    node: &SchemaOrRef,
    spec: &OpenApiSpec,
    depth: usize,
    in_flight: &mut Vec<String>,
) -> String {
    let indent = "  ".repeat(depth);
    if depth > MAX_BODY_DEPTH {
        return format!("{indent}...\n");
    }
    match node {
        SchemaOrRef::Ref { ref_path } => {
            let name = ref_name(ref_path);
            if in_flight.iter().any(|seen| seen == name) {
                return format!("{indent}...\n");
            }
            let Some(schema) = resolve(ref_path, spec) else {
                // Dangling reference: no information.
                return String::new();
            };
            in_flight.push(name.to_string());
            let rendered = render_schema(schema, spec, depth, in_flight);
            in_flight.pop();
            rendered
        }
        SchemaOrRef::Schema(schema) => render_schema(schema, spec, depth, in_flight),
    }
}

fn render_schema(
    schema: &Schema,
    spec: &OpenApiSpec,
    depth: usize,
    in_flight: &mut Vec<String>,
) -> String {
    let indent = "  ".repeat(depth);
    let mut out = String::new();

    // allOf branches merge visually by listing in sequence at the same
    // depth.
    if !schema.all_of.is_empty() {
        for branch in &schema.all_of {
            out.push_str(&render_node(branch, spec, depth, in_flight));
        }
        return out;
    }

    let variants = if !schema.one_of.is_empty() {
        &schema.one_of
    } else {
        &schema.any_of
    };
    if !variants.is_empty() {
        for (i, branch) in variants.iter().enumerate() {
            out.push_str(&format!("{indent}variant {}:\n", i + 1));
            out.push_str(&render_node(branch, spec, depth + 1, in_flight));
        }
        return out;
    }

    for (name, prop) in &schema.properties {
        let marker = if schema.is_required(name) { "*" } else { "" };
        let signature = type_signature(prop, spec, 0);
        out.push_str(&format!("{indent}- `{name}`{marker} ({signature})"));
        if let Some(desc) = prop.description() {
            if !desc.is_empty() {
                out.push_str(&format!(": {}", single_line(desc)));
            }
        }
        out.push('\n');
    }
    out
}
