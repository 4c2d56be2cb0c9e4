use lyra_forms::{FieldEntry, FormView, HeadlessToolkit, LayoutChoice, Toolkit};
use lyra_schema::SchemaNode;

fn build(json: &str) -> FormView<HeadlessToolkit> {
    let schema: SchemaNode = serde_json::from_str(json).expect("Failed to parse schema");
    FormView::build(&schema, HeadlessToolkit::new(), LayoutChoice::Stacked)
}

fn toggle_parts(form: &FormView<HeadlessToolkit>, name: &str) -> (lyra_forms::WidgetId, lyra_forms::WidgetId) {
    match form.field(name).expect("toggle registered") {
        FieldEntry::Toggle { trigger, container } => (*trigger, *container),
        other => panic!("expected toggle entry, got {other:?}"),
    }
}

#[test]
fn toggle_starts_closed_and_flips_on_each_activation() {
    let mut form = build(
        r#"{"properties": {
        "advanced": {
            "widget": "toggle",
            "children": {"properties": {"proxy": {"type": "string"}}}
        }
    }}"#,
    );
    let (trigger, container) = toggle_parts(&form, "advanced");

    assert!(!form.toolkit().is_visible(container));
    assert_eq!(form.toolkit().text(trigger), "[+]");

    form.activate(trigger);
    assert!(form.toolkit().is_visible(container));
    assert_eq!(form.toolkit().text(trigger), "[-]");

    form.activate(trigger);
    assert!(!form.toolkit().is_visible(container));
    assert_eq!(form.toolkit().text(trigger), "[+]");
}

#[test]
fn toggle_children_build_into_the_container() {
    let form = build(
        r#"{"properties": {
        "advanced": {
            "widget": "toggle",
            "children": {"properties": {
                "proxy": {"type": "string"},
                "retries": {"type": "integer"}
            }}
        }
    }}"#,
    );
    let (_, container) = toggle_parts(&form, "advanced");
    let body = form.toolkit().layout_of(container).expect("container layout");
    assert_eq!(form.toolkit().layout_widgets(body).len(), 2);

    // children live in the flat registry and harvest like any other field
    let data = form.form_data();
    assert_eq!(data.get("proxy"), Some(&serde_json::json!("")));
    assert_eq!(data.get("retries"), Some(&serde_json::json!(0)));
    assert!(data.get("advanced").is_none());
}

#[test]
fn trigger_and_container_are_consecutive_layout_entries() {
    let form = build(
        r#"{"properties": {
        "before": {"type": "string"},
        "advanced": {"widget": "toggle"},
        "after": {"type": "string"}
    }}"#,
    );
    let (trigger, container) = toggle_parts(&form, "advanced");
    let placed = form.toolkit().layout_widgets(form.root_layout());
    assert_eq!(placed.len(), 4);
    assert_eq!(placed[1], trigger);
    assert_eq!(placed[2], container);
}
