use olt_core::parse;
use olt_core::parse::schema::{SchemaOrRef, SchemaType, TypeSet};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const EVENTS: &str = include_str!("fixtures/events.json");
const CYCLIC: &str = include_str!("fixtures/cyclic.yaml");

#[test]
fn parse_petstore_yaml() {
    let spec = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(spec.openapi, "3.0.3");
    assert_eq!(spec.info.title.as_deref(), Some("Pets"));
    assert_eq!(spec.paths.len(), 2);

    let pets = spec.paths.get("/pets").expect("should have /pets");
    let get = pets.get.as_ref().expect("should have GET");
    assert_eq!(get.operation_id.as_deref(), Some("listPets"));
    assert_eq!(get.tags, vec!["pet"]);
    assert_eq!(get.parameters.len(), 1);

    let components = spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 4);
}

#[test]
fn parse_events_json() {
    let spec = parse::from_json(EVENTS).expect("should parse events");
    assert_eq!(spec.openapi, "3.1.0");
    assert_eq!(spec.paths.len(), 1);

    let event = spec.schema("Event").expect("should have Event");
    match event {
        SchemaOrRef::Schema(s) => assert_eq!(s.one_of.len(), 2),
        _ => panic!("expected inline schema for Event"),
    }
}

#[test]
fn property_order_is_document_order() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let pet = spec.schema("Pet").unwrap();
    match pet {
        SchemaOrRef::Schema(s) => {
            let names: Vec<&String> = s.properties.keys().collect();
            assert_eq!(names, ["id", "name", "status", "category"]);
            assert!(s.is_required("id"));
            assert!(!s.is_required("name"));
        }
        _ => panic!("expected inline schema for Pet"),
    }
}

#[test]
fn ref_property_deserializes_as_ref() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let pet = spec.schema("Pet").unwrap();
    let SchemaOrRef::Schema(s) = pet else {
        panic!("expected inline schema");
    };
    match s.properties.get("category").unwrap() {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/Category");
        }
        _ => panic!("expected $ref for category"),
    }
}

#[test]
fn parse_enum_values() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let SchemaOrRef::Schema(pet) = spec.schema("Pet").unwrap() else {
        panic!("expected inline schema");
    };
    let SchemaOrRef::Schema(status) = pet.properties.get("status").unwrap() else {
        panic!("expected inline schema for status");
    };
    assert_eq!(status.enum_values.len(), 3);
    assert_eq!(
        status.schema_type,
        Some(TypeSet::Single(SchemaType::String))
    );
}

#[test]
fn parse_allof_composition() {
    let spec = parse::from_yaml(CYCLIC).unwrap();
    let SchemaOrRef::Schema(extended) = spec.schema("Extended").unwrap() else {
        panic!("expected inline schema");
    };
    assert_eq!(extended.all_of.len(), 2);
}

#[test]
fn parse_tolerates_sparse_documents() {
    // Conversion is best-effort: a document missing info, paths, and
    // components still loads.
    let spec = parse::from_yaml("{}").expect("empty mapping should parse");
    assert_eq!(spec.openapi, "");
    assert!(spec.info.title.is_none());
    assert!(spec.paths.is_empty());
    assert!(spec.components.is_none());

    let spec = parse::from_json(r#"{"info": {"title": "Bare"}}"#).unwrap();
    assert_eq!(spec.info.title.as_deref(), Some("Bare"));
    assert!(spec.info.version.is_none());
}

#[test]
fn check_version_rejects_non_3x() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    assert!(parse::check_version(&spec).is_ok());

    let spec = parse::from_yaml("openapi: \"2.0\"\n").unwrap();
    assert!(parse::check_version(&spec).is_err());
}
