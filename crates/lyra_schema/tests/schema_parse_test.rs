use lyra_schema::{FieldDescriptor, SchemaNode, TypeTag, WidgetTag};

fn parse(json: &str) -> SchemaNode {
    serde_json::from_str(json).expect("Failed to parse schema")
}

#[test]
fn field_order_follows_declaration() {
    let schema = parse(
        r#"{
        "properties": {
            "zeta": {"type": "string"},
            "alpha": {"type": "integer"},
            "mid": {"widget": "checkbox"}
        }
    }"#,
    );
    let names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn renamed_keys_and_unknown_keys() {
    let schema = parse(
        r#"{
        "properties": {
            "plan": {
                "type": "string",
                "enum": ["a", "b"],
                "x-vendor-extension": {"ignored": true}
            }
        }
    }"#,
    );
    let field = &schema.properties["plan"];
    assert_eq!(field.field_type.as_deref(), Some("string"));
    assert_eq!(field.choice_list(), ["a", "b"]);
}

#[test]
fn schema_node_accepts_bare_field_map() {
    let wrapped = parse(r#"{"properties": {"n": {"type": "string"}}}"#);
    let bare = parse(r#"{"n": {"type": "string"}}"#);
    assert_eq!(wrapped, bare);
    assert!(wrapped.properties.contains_key("n"));
}

#[test]
fn children_map_preserves_order() {
    let schema = parse(
        r#"{
        "properties": {
            "devices": {
                "widget": "multi_toggle",
                "enum": ["phone", "laptop", "tablet"],
                "children_map": {
                    "phone": {"properties": {"a": {"type": "string"}}},
                    "laptop": {"properties": {"b": {"type": "string"}}},
                    "tablet": {"properties": {"c": {"type": "string"}}}
                }
            }
        }
    }"#,
    );
    let map = schema.properties["devices"]
        .children_map
        .as_ref()
        .expect("children_map");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["phone", "laptop", "tablet"]);
}

#[test]
fn widget_tag_parsing() {
    assert_eq!(WidgetTag::parse("multi_toggle"), Some(WidgetTag::MultiToggle));
    assert_eq!(WidgetTag::parse("doublespinbox"), Some(WidgetTag::DoubleSpinBox));
    assert_eq!(WidgetTag::parse("dial"), None);
    assert_eq!(WidgetTag::MultiToggle.as_str(), "multi_toggle");
    assert_eq!(TypeTag::parse("boolean"), Some(TypeTag::Boolean));
    assert_eq!(TypeTag::parse("object"), None);
}

#[test]
fn descriptor_defaults() {
    let field = FieldDescriptor::default();
    assert_eq!(field.spin_bounds(), (0, 100));
    assert_eq!(field.double_spin_bounds(), (0.0, 100.0, 0.1));
    assert_eq!(field.title_or("age"), "age");
    assert_eq!(field.button_text(), "Submit");
    assert_eq!(field.label_text(), "");

    let field = FieldDescriptor {
        title: Some("Age".into()),
        minimum: Some(18.0),
        maximum: Some(65.0),
        ..Default::default()
    };
    assert_eq!(field.spin_bounds(), (18, 65));
    assert_eq!(field.title_or("age"), "Age");
    // checkbox captions prefer text over title over the field name
    assert_eq!(field.caption("age"), "Age");
    let field = FieldDescriptor {
        text: Some("Tick me".into()),
        title: Some("Age".into()),
        ..Default::default()
    };
    assert_eq!(field.caption("age"), "Tick me");
}
