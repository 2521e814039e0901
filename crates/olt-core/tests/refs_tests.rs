use std::collections::BTreeSet;

use serde_json::json;

use olt_core::parse;
use olt_core::refs::{collect_ref_names, ref_name, ref_names_of, resolve};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn ref_name_takes_last_segment() {
    assert_eq!(ref_name("#/components/schemas/Pet"), "Pet");
    assert_eq!(ref_name("#/definitions/LegacyThing"), "LegacyThing");
    assert_eq!(ref_name("Pet"), "Pet");
}

#[test]
fn resolve_existing_schema() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let pet = resolve("#/components/schemas/Pet", &spec).expect("Pet should resolve");
    assert_eq!(pet.description.as_deref(), Some("A pet in the store."));
}

#[test]
fn resolve_dangling_is_none() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    assert!(resolve("#/components/schemas/Missing", &spec).is_none());
    assert!(resolve("not a ref at all", &spec).is_none());
    assert!(resolve("", &spec).is_none());
}

#[test]
fn resolve_follows_alias_chains() {
    let yaml = r#"
components:
  schemas:
    Alias:
      $ref: "#/components/schemas/Real"
    Real:
      type: object
      description: The real one.
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let real = resolve("#/components/schemas/Alias", &spec).expect("alias should resolve");
    assert_eq!(real.description.as_deref(), Some("The real one."));
}

#[test]
fn resolve_alias_cycle_gives_up() {
    let yaml = r#"
components:
  schemas:
    Ping:
      $ref: "#/components/schemas/Pong"
    Pong:
      $ref: "#/components/schemas/Ping"
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    assert!(resolve("#/components/schemas/Ping", &spec).is_none());
}

#[test]
fn collect_ref_names_walks_everywhere() {
    let value = json!({
        "parameters": [
            { "schema": { "$ref": "#/components/schemas/Filter" } }
        ],
        "requestBody": {
            "content": {
                "application/json": {
                    "schema": {
                        "items": { "$ref": "#/components/schemas/Item" }
                    }
                }
            }
        },
        "responses": {
            "200": {
                "content": {
                    "application/json": {
                        "schema": {
                            "oneOf": [
                                { "$ref": "#/components/schemas/Item" },
                                { "$ref": "#/components/schemas/Error" }
                            ]
                        }
                    }
                }
            }
        }
    });

    let mut names = BTreeSet::new();
    collect_ref_names(&value, &mut names);
    let names: Vec<&String> = names.iter().collect();
    assert_eq!(names, ["Error", "Filter", "Item"]);
}

#[test]
fn collect_ref_names_ignores_non_string_ref() {
    let mut names = BTreeSet::new();
    collect_ref_names(&json!({ "$ref": 42 }), &mut names);
    assert!(names.is_empty());
}

#[test]
fn ref_names_of_operation() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let post = spec.paths["/pets"].post.as_ref().unwrap();
    let names = ref_names_of(post);
    let names: Vec<&String> = names.iter().collect();
    assert_eq!(names, ["NewPet", "Pet"]);
}
