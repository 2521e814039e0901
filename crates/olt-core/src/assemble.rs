//! Assembly of the final llms.txt document.
//!
//! Two modes: a full listing (operations grouped by tag, then an
//! "Optional" section with complete schema definitions) and a schemas-only
//! listing (reachable schemas with shallow field listings, no operation
//! detail).

use std::collections::BTreeMap;

use crate::closure::{passes_filter, reachable_schemas};
use crate::defaults::{self, effective_tags, single_line};
use crate::parse::operation::Operation;
use crate::parse::parameter::ParameterOrRef;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::{Schema, SchemaOrRef};
use crate::parse::spec::OpenApiSpec;
use crate::refs::ref_name;
use crate::render::{render_body, render_media_body, type_signature};

/// Conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Keep only operations carrying one of these tags. `None` keeps
    /// everything.
    pub tags: Option<Vec<String>>,

    /// Skip per-operation detail and list reachable schemas only.
    pub schemas_only: bool,
}

impl ConvertOptions {
    fn tag_filter(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// Convert a loaded document into the flattened text rendering.
pub fn assemble(spec: &OpenApiSpec, options: &ConvertOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = defaults::title(&spec.info);
    let version = spec.info.version.as_deref().unwrap_or("");
    lines.push(format!("# {title} {version}").trim_end().to_string());
    lines.push(String::new());
    lines.push(format!("> {}", defaults::doc_description(&spec.info, title)));
    lines.push(String::new());

    if options.schemas_only {
        assemble_schemas_only(spec, options.tag_filter(), &mut lines);
    } else {
        assemble_full(spec, options.tag_filter(), &mut lines);
    }

    lines.join("\n")
}

struct Endpoint<'a> {
    path: &'a str,
    method: &'static str,
    op: &'a Operation,
}

fn assemble_full(spec: &OpenApiSpec, filter: Option<&[String]>, lines: &mut Vec<String>) {
    // Group by effective tag; BTreeMap iteration gives tags in
    // lexicographic order.
    let mut by_tag: BTreeMap<String, Vec<Endpoint>> = BTreeMap::new();
    for (path, item) in &spec.paths {
        for (method, op) in item.operations() {
            if !passes_filter(op, filter) {
                continue;
            }
            for tag in effective_tags(op) {
                by_tag
                    .entry(tag.to_string())
                    .or_default()
                    .push(Endpoint { path, method, op });
            }
        }
    }

    for (tag, mut endpoints) in by_tag {
        lines.push(format!("## {tag}"));
        lines.push(String::new());
        endpoints.sort_by(|a, b| a.path.cmp(b.path));
        for endpoint in &endpoints {
            render_endpoint(endpoint, spec, lines);
        }
    }

    lines.push("## Optional".to_string());
    lines.push(String::new());
    lines.push("> Full schema definitions for all data models.".to_string());
    lines.push(String::new());

    let names: Vec<String> = match filter {
        Some(_) => reachable_schemas(spec, filter)
            .into_iter()
            .filter(|name| spec.schema(name).is_some())
            .collect(),
        None => {
            let mut names: Vec<String> = spec.schema_names().cloned().collect();
            names.sort();
            names
        }
    };

    for name in &names {
        let Some(node) = spec.schema(name) else {
            continue;
        };
        lines.push(format!("### Schema: {name}"));
        render_schema_definition(node, spec, lines);
        lines.push(String::new());
    }
}

fn render_endpoint(endpoint: &Endpoint, spec: &OpenApiSpec, lines: &mut Vec<String>) {
    let op = endpoint.op;
    lines.push(format!("### {} {}", endpoint.method, endpoint.path));

    let summary = match op.summary.as_deref() {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => format!("{} {}", endpoint.method, endpoint.path),
    };
    lines.push(format!("**Summary**: {summary}"));

    if let Some(desc) = op.description.as_deref() {
        let desc = single_line(desc).trim().to_string();
        if !desc.is_empty() {
            lines.push(format!("**Description**: {desc}"));
        }
    }

    if let Some(id) = op.operation_id.as_deref() {
        if !id.is_empty() {
            lines.push(format!("**Operation ID**: `{id}`"));
        }
    }

    if !op.parameters.is_empty() {
        lines.push("**Parameters**:".to_string());
        for param in &op.parameters {
            // Unresolvable parameter references carry no information.
            let ParameterOrRef::Parameter(p) = param else {
                continue;
            };
            let required = if p.required { " (required)" } else { "" };
            let signature = match &p.schema {
                Some(schema) => type_signature(schema, spec, 0),
                None => "any".to_string(),
            };
            let mut line = format!("- `{}` [{}]{required} ({signature})", p.name, p.location.as_str());
            if let Some(desc) = p.description.as_deref() {
                if !desc.is_empty() {
                    line.push_str(&format!(": {}", single_line(desc)));
                }
            }
            lines.push(line);
        }
    }

    if let Some(body) = &op.request_body {
        lines.push("**Request Body**:".to_string());
        if let RequestBodyOrRef::RequestBody(rb) = body {
            let rendered = render_media_body(&rb.content, spec);
            let rendered = rendered.trim_end();
            if !rendered.is_empty() {
                lines.extend(rendered.lines().map(String::from));
            }
        }
    }

    if !op.responses.is_empty() {
        lines.push("**Responses**:".to_string());
        for (status, response) in &op.responses {
            match response {
                ResponseOrRef::Response(r) => {
                    lines.push(format!("- `{status}`: {}", single_line(&r.description)));
                    for media in r.content.values() {
                        if let Some(SchemaOrRef::Ref { ref_path }) = &media.schema {
                            lines.push(format!("  Returns: `{}`", ref_name(ref_path)));
                        }
                    }
                }
                ResponseOrRef::Ref { .. } => {
                    lines.push(format!("- `{status}`: "));
                }
            }
        }
    }

    lines.push(String::new());
}

/// Full definition block for one named schema in the "Optional" section.
fn render_schema_definition(node: &SchemaOrRef, spec: &OpenApiSpec, lines: &mut Vec<String>) {
    let SchemaOrRef::Schema(schema) = node else {
        // An alias entry shows nothing beyond its default type.
        lines.push("**Type**: object".to_string());
        return;
    };

    if let Some(desc) = schema.description.as_deref() {
        if !desc.is_empty() {
            lines.push(format!("**Description**: {}", single_line(desc)));
        }
    }
    lines.push(format!("**Type**: {}", type_label(schema)));

    if !schema.properties.is_empty() {
        lines.push("**Properties**:".to_string());
        for (pname, prop) in &schema.properties {
            let required = if schema.is_required(pname) { " (required)" } else { "" };
            let signature = type_signature(prop, spec, 0);
            let mut line = format!("- `{pname}`{required} ({signature}){}", enum_suffix(prop));
            if let Some(desc) = prop.description() {
                if !desc.is_empty() {
                    line.push_str(&format!(": {}", single_line(desc)));
                }
            }
            lines.push(line);
        }
    }

    if schema.is_composed() {
        let body = render_body(node, spec, 0);
        let body = body.trim_end();
        if !body.is_empty() {
            lines.push("**Structure**:".to_string());
            lines.extend(body.lines().map(String::from));
        }
    }
}

fn assemble_schemas_only(spec: &OpenApiSpec, filter: Option<&[String]>, lines: &mut Vec<String>) {
    let reachable = reachable_schemas(spec, filter);

    lines.push("## Schemas".to_string());
    lines.push(String::new());
    for name in &reachable {
        let Some(node) = spec.schema(name) else {
            continue;
        };
        let desc = match node.description() {
            Some(desc) if !desc.is_empty() => single_line(desc),
            _ => "No description available.".to_string(),
        };
        lines.push(format!("- [{name}](#{}): {desc}", name.to_lowercase()));
    }

    lines.push(String::new());
    lines.push("## Optional".to_string());
    lines.push(String::new());

    for name in &reachable {
        let Some(node) = spec.schema(name) else {
            continue;
        };
        lines.push(format!("### {name}"));
        match node {
            SchemaOrRef::Schema(schema) => {
                if let Some(desc) = schema.description.as_deref() {
                    if !desc.is_empty() {
                        lines.push(format!("**Description**: {}", single_line(desc)));
                    }
                }
                lines.push(format!("**Type**: {}", type_label(schema)));
                if !schema.properties.is_empty() {
                    lines.push("**Properties**:".to_string());
                    for (pname, prop) in &schema.properties {
                        let desc = prop
                            .description()
                            .map(single_line)
                            .unwrap_or_default();
                        lines.push(format!("- `{pname}` ({}): {desc}", declared_label(prop)));
                    }
                }
            }
            SchemaOrRef::Ref { .. } => {
                lines.push("**Type**: object".to_string());
            }
        }
        lines.push(String::new());
    }
}

/// Declared type label of a schema definition, defaulting to `object`.
fn type_label(schema: &Schema) -> String {
    schema
        .schema_type
        .as_ref()
        .map(|types| types.label())
        .unwrap_or_else(|| "object".to_string())
}

/// Declared type label of a property in the shallow listing; references
/// and untyped schemas read as `unknown`.
fn declared_label(prop: &SchemaOrRef) -> String {
    match prop {
        SchemaOrRef::Schema(schema) => schema
            .schema_type
            .as_ref()
            .map(|types| types.label())
            .unwrap_or_else(|| "unknown".to_string()),
        SchemaOrRef::Ref { .. } => "unknown".to_string(),
    }
}

/// ` [enum: ...]` suffix for properties constrained to literal values.
fn enum_suffix(prop: &SchemaOrRef) -> String {
    let SchemaOrRef::Schema(schema) = prop else {
        return String::new();
    };
    if schema.enum_values.is_empty() {
        return String::new();
    }
    let values: Vec<String> = schema.enum_values.iter().map(literal).collect();
    format!(" [enum: {}]", values.join(", "))
}

/// Enum literals print bare: strings without quotes, everything else in
/// its JSON form.
fn literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
