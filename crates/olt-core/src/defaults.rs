//! Fallback values for fields real-world documents leave out.

use crate::parse::operation::Operation;
use crate::parse::spec::Info;

/// Tag assumed for operations that declare none.
pub const IMPLICIT_TAG: &str = "General";

/// Display title, falling back to a generic one.
pub fn title(info: &Info) -> &str {
    info.title.as_deref().unwrap_or("API Documentation")
}

/// Document blockquote description, synthesized from the title when the
/// document has none.
pub fn doc_description(info: &Info, title: &str) -> String {
    match info.description.as_deref() {
        Some(desc) if !desc.is_empty() => desc.to_string(),
        _ => format!("OpenAPI specification for {title}"),
    }
}

/// The tags an operation is grouped and filtered under: its own, or the
/// implicit tag when it declares none.
pub fn effective_tags(op: &Operation) -> Vec<&str> {
    if op.tags.is_empty() {
        vec![IMPLICIT_TAG]
    } else {
        op.tags.iter().map(String::as_str).collect()
    }
}

/// Collapse a possibly multi-line description onto one line.
pub fn single_line(text: &str) -> String {
    text.replace('\n', " ")
}
