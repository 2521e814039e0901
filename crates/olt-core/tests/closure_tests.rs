use std::collections::BTreeSet;

use olt_core::closure::{expand, operation_seed, passes_filter, reachable_schemas};
use olt_core::parse;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const CYCLIC: &str = include_str!("fixtures/cyclic.yaml");
const EVENTS: &str = include_str!("fixtures/events.json");

fn names(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

#[test]
fn unfiltered_closure_reaches_transitively() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let reachable = reachable_schemas(&spec, None);
    // Category only via Pet; Receipt is referenced by nothing.
    assert_eq!(names(&reachable), ["Category", "NewPet", "Pet"]);
}

#[test]
fn closure_is_superset_of_seed() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let seed = operation_seed(&spec, None);
    assert_eq!(names(&seed), ["NewPet", "Pet"]);

    let reachable = reachable_schemas(&spec, None);
    assert!(seed.is_subset(&reachable));
}

#[test]
fn closure_is_idempotent() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let once = reachable_schemas(&spec, None);
    let twice = expand(once.clone(), &spec);
    assert_eq!(once, twice);
}

#[test]
fn tag_filter_narrows_the_seed() {
    let spec = parse::from_yaml(PETSTORE).unwrap();

    let pet_only = reachable_schemas(&spec, Some(&["pet".to_string()]));
    assert_eq!(names(&pet_only), ["Category", "NewPet", "Pet"]);

    let other = reachable_schemas(&spec, Some(&["other".to_string()]));
    assert!(other.is_empty());
}

#[test]
fn implicit_tag_matches_filter() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let health = spec.paths["/health"].get.as_ref().unwrap();
    assert!(passes_filter(health, None));
    assert!(passes_filter(health, Some(&["General".to_string()])));
    assert!(!passes_filter(health, Some(&["pet".to_string()])));
}

#[test]
fn any_matching_tag_passes() {
    let spec = parse::from_json(EVENTS).unwrap();
    let get = spec.paths["/events"].get.as_ref().unwrap();
    assert!(passes_filter(get, Some(&["admin".to_string()])));
    assert!(passes_filter(
        get,
        Some(&["nope".to_string(), "events".to_string()])
    ));
    assert!(!passes_filter(get, Some(&["nope".to_string()])));
}

#[test]
fn cyclic_references_terminate() {
    let spec = parse::from_yaml(CYCLIC).unwrap();
    let reachable = reachable_schemas(&spec, None);
    assert_eq!(names(&reachable), ["Node", "NodeList"]);
}

#[test]
fn unknown_names_stay_in_the_result() {
    // A dangling reference is reachable even though no schema backs it;
    // the assembler decides whether to list it.
    let yaml = r##"
paths:
  /things:
    get:
      responses:
        "200":
          description: OK
          content:
            application/json:
              schema:
                $ref: "#/components/schemas/Phantom"
"##;
    let spec = parse::from_yaml(yaml).unwrap();
    let reachable = reachable_schemas(&spec, None);
    assert_eq!(names(&reachable), ["Phantom"]);
}
