use fixtura_core::Schema;
use fixtura_validate::{SchemaRegistry, ValidateError, validate};
use serde_json::json;

fn schema(document: serde_json::Value) -> Schema {
    serde_json::from_value(document).expect("parse schema document")
}

#[test]
fn missing_required_properties_are_reported() {
    let user = schema(json!({
        "type": "object",
        "required": ["id", "username", "email"],
        "properties": {
            "id": { "type": "number" },
            "username": { "type": "string" },
            "email": { "type": "string", "format": "email" },
            "firstName": { "type": "string" },
            "lastName": { "type": "string" }
        }
    }));
    let value = json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com"
    });

    let result = validate(&user, &value).expect("well-formed schema");
    assert!(!result.valid);
    let messages = result.messages();
    assert!(messages.contains(&"Missing required property: id"));
    assert!(messages.contains(&"Missing required property: username"));
    assert_eq!(messages.len(), 2);
}

#[test]
fn type_mismatches_are_reported_per_variant() {
    let number = schema(json!({ "type": "number" }));
    let result = validate(&number, &json!("123")).expect("well-formed schema");
    assert!(!result.valid);
    assert_eq!(result.messages(), vec!["Expected type number but got string"]);
    assert!(validate(&number, &json!(123)).expect("well-formed schema").valid);

    let string = schema(json!({ "type": "string" }));
    assert!(!validate(&string, &json!(123)).expect("well-formed schema").valid);
    assert!(validate(&string, &json!("abc")).expect("well-formed schema").valid);

    let boolean = schema(json!({ "type": "boolean" }));
    assert!(!validate(&boolean, &json!("true")).expect("well-formed schema").valid);
    assert!(validate(&boolean, &json!(true)).expect("well-formed schema").valid);

    let object = schema(json!({ "type": "object" }));
    let result = validate(&object, &json!([])).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Expected type object but got array"]);
    assert!(validate(&object, &json!({})).expect("well-formed schema").valid);

    let array = schema(json!({ "type": "array" }));
    let result = validate(&array, &json!({})).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Expected type array but got object"]);
    assert!(validate(&array, &json!([])).expect("well-formed schema").valid);

    let null = schema(json!({ "type": "null" }));
    assert!(!validate(&null, &json!(0)).expect("well-formed schema").valid);
    assert!(validate(&null, &json!(null)).expect("well-formed schema").valid);

    let integer = schema(json!({ "type": "integer" }));
    let result = validate(&integer, &json!(1.5)).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Expected type integer but got number"]);
    assert!(validate(&integer, &json!(7)).expect("well-formed schema").valid);
}

#[test]
fn enum_membership_is_enforced() {
    let status = schema(json!({
        "type": "string",
        "enum": ["pending", "approved", "rejected"]
    }));

    assert!(validate(&status, &json!("pending")).expect("well-formed schema").valid);

    let result = validate(&status, &json!("unknown")).expect("well-formed schema");
    assert!(!result.valid);
    assert_eq!(
        result.messages(),
        vec!["Invalid enum value: 'unknown' should be one of: pending, approved, rejected"]
    );
}

#[test]
fn formats_are_enforced() {
    let email = schema(json!({ "type": "string", "format": "email" }));
    assert!(validate(&email, &json!("user@example.com")).expect("well-formed schema").valid);
    let result = validate(&email, &json!("invalid-email")).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Invalid format: email"]);

    let timestamp = schema(json!({ "type": "string", "format": "date-time" }));
    assert!(
        validate(&timestamp, &json!("2023-01-01T12:00:00Z"))
            .expect("well-formed schema")
            .valid
    );
    let result = validate(&timestamp, &json!("2023-01-01")).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Invalid format: date-time"]);

    let uri = schema(json!({ "type": "string", "format": "uri" }));
    assert!(
        validate(&uri, &json!("https://example.com/resources/1"))
            .expect("well-formed schema")
            .valid
    );
    let result = validate(&uri, &json!("example.com")).expect("well-formed schema");
    assert_eq!(result.messages(), vec!["Invalid format: uri"]);
}

#[test]
fn nested_errors_carry_dotted_paths() {
    let wrapper = schema(json!({
        "type": "object",
        "properties": {
            "user": {
                "type": "object",
                "required": ["id"],
                "properties": { "id": { "type": "number" } }
            }
        }
    }));
    let value = json!({ "user": { "id": "1" } });

    let result = validate(&wrapper, &value).expect("well-formed schema");
    let errors = result.errors.expect("errors present");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "user.id");
}

#[test]
fn array_element_errors_carry_indexed_paths() {
    let list = schema(json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "number" },
                "name": { "type": "string" }
            }
        }
    }));
    let value = json!([
        { "id": 1, "name": "a" },
        { "id": "2", "name": "b" }
    ]);

    let result = validate(&list, &value).expect("well-formed schema");
    let errors = result.errors.expect("errors present");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "[1].id");
}

#[test]
fn valid_results_carry_no_error_list() {
    let id = schema(json!({ "type": "integer" }));
    let result = validate(&id, &json!(42)).expect("well-formed schema");
    assert!(result.valid);
    assert!(result.errors.is_none());
}

#[test]
fn malformed_schemas_fail_fast() {
    let orphaned = schema(json!({
        "type": "object",
        "required": ["id"],
        "properties": { "name": { "type": "string" } }
    }));
    assert!(validate(&orphaned, &json!({})).is_err());

    let empty_enum = schema(json!({ "type": "string", "enum": [] }));
    assert!(validate(&empty_enum, &json!("x")).is_err());

    let contradictory = schema(json!({
        "type": "string",
        "format": "email",
        "enum": ["not-an-email"]
    }));
    assert!(validate(&contradictory, &json!("not-an-email")).is_err());
}

#[test]
fn registry_resolves_names() {
    let registry = SchemaRegistry::new();
    registry
        .add_schema_json(
            "user",
            r#"{
                "type": "object",
                "required": ["id"],
                "properties": { "id": { "type": "number" } }
            }"#,
        )
        .expect("register schema");
    assert_eq!(registry.len(), 1);

    let result = registry
        .validate_named("user", &json!({ "id": 1 }))
        .expect("registered schema");
    assert!(result.valid);

    let result = registry
        .validate_named("user", &json!({}))
        .expect("registered schema");
    assert!(!result.valid);
}

#[test]
fn unknown_schema_name_is_fatal() {
    let registry = SchemaRegistry::new();
    let err = registry
        .validate_named("missing", &json!({}))
        .expect_err("unknown name");
    assert!(matches!(err, ValidateError::SchemaNotFound(name) if name == "missing"));
}

#[test]
fn registry_rejects_malformed_schemas_at_registration() {
    let registry = SchemaRegistry::new();
    let err = registry
        .add_schema_json(
            "broken",
            r#"{
                "type": "object",
                "required": ["id"],
                "properties": {}
            }"#,
        )
        .expect_err("orphaned required name");
    assert!(matches!(err, ValidateError::Schema(_)));
    assert!(registry.is_empty());
}
