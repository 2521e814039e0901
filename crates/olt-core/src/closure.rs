//! Reachability closure over the schema reference graph.
//!
//! Seeds from the operations that pass the tag filter, then expands to a
//! fixed point through named schemas. Termination holds on cyclic graphs:
//! the processed set only grows and the schema-name universe is finite.

use std::collections::BTreeSet;

use crate::defaults::effective_tags;
use crate::parse::operation::Operation;
use crate::parse::spec::OpenApiSpec;
use crate::refs::ref_names_of;

/// Whether an operation passes the tag filter: always, with no filter;
/// otherwise when any of its effective tags is wanted.
pub fn passes_filter(op: &Operation, filter: Option<&[String]>) -> bool {
    match filter {
        None => true,
        Some(wanted) => effective_tags(op)
            .iter()
            .any(|tag| wanted.iter().any(|w| w == tag)),
    }
}

/// Names referenced directly from the filtered operations: parameters,
/// request bodies, responses — anywhere a `$ref` appears.
pub fn operation_seed(spec: &OpenApiSpec, filter: Option<&[String]>) -> BTreeSet<String> {
    let mut seed = BTreeSet::new();
    for item in spec.paths.values() {
        for (_method, op) in item.operations() {
            if passes_filter(op, filter) {
                seed.extend(ref_names_of(op));
            }
        }
    }
    seed
}

/// Work-list fixed point: every name denoting an existing schema
/// contributes that schema's own reference names until nothing new turns
/// up.
pub fn expand(seed: BTreeSet<String>, spec: &OpenApiSpec) -> BTreeSet<String> {
    let mut reachable = seed.clone();
    let mut work: Vec<String> = seed.into_iter().collect();
    let mut processed: BTreeSet<String> = BTreeSet::new();

    while let Some(name) = work.pop() {
        if !processed.insert(name.clone()) {
            continue;
        }
        if let Some(schema) = spec.schema(&name) {
            for found in ref_names_of(schema) {
                if !processed.contains(&found) {
                    work.push(found.clone());
                }
                reachable.insert(found);
            }
        }
    }
    reachable
}

/// The transitive set of schema names reachable from the operations that
/// pass the tag filter.
pub fn reachable_schemas(spec: &OpenApiSpec, filter: Option<&[String]>) -> BTreeSet<String> {
    let seed = operation_seed(spec, filter);
    let reachable = expand(seed, spec);
    log::debug!("schema closure: {} names reachable", reachable.len());
    reachable
}
