use lyra_forms::{FieldEntry, FormView, HeadlessToolkit, LayoutChoice, Toolkit};
use lyra_schema::SchemaNode;
use serde_json::json;

fn build(json: &str) -> FormView<HeadlessToolkit> {
    let schema: SchemaNode = serde_json::from_str(json).expect("Failed to parse schema");
    FormView::build(&schema, HeadlessToolkit::new(), LayoutChoice::Stacked)
}

#[test]
fn bounded_integer_harvests_its_minimum_before_edits() {
    let form = build(
        r#"{"properties": {
        "age": {"type": "integer", "minimum": 0, "maximum": 120}
    }}"#,
    );
    let data = form.form_data();
    assert_eq!(data.get("age"), Some(&json!(0)));
}

#[test]
fn integer_bounds_default_to_zero_and_one_hundred() {
    let form = build(r#"{"properties": {"count": {"type": "integer"}}}"#);
    let FieldEntry::Single { widget, .. } = form.field("count").expect("registered") else {
        panic!("expected single entry");
    };
    let state = form.toolkit().widget(*widget).expect("spin box");
    assert_eq!((state.int_min, state.int_max), (0, 100));
}

#[test]
fn every_control_kind_harvests_its_default() {
    let form = build(
        r#"{"properties": {
        "name": {"type": "string"},
        "bio": {"widget": "textarea"},
        "subscribe": {"type": "boolean"},
        "floor": {"type": "integer", "minimum": 2},
        "height": {"type": "number", "minimum": 0.5},
        "plan": {"type": "string", "enum": ["Free", "Pro"]}
    }}"#,
    );
    let data = form.form_data();
    assert_eq!(data.get("name"), Some(&json!("")));
    assert_eq!(data.get("bio"), Some(&json!("")));
    assert_eq!(data.get("subscribe"), Some(&json!(false)));
    assert_eq!(data.get("floor"), Some(&json!(2)));
    assert_eq!(data.get("height"), Some(&json!(0.5)));
    // dropdowns preselect their first entry
    assert_eq!(data.get("plan"), Some(&json!("Free")));
}

#[test]
fn harvested_keys_follow_declaration_order() {
    let form = build(
        r#"{"properties": {
        "zeta": {"type": "string"},
        "alpha": {"type": "integer"}
    }}"#,
    );
    let data = form.form_data();
    let keys: Vec<&str> = data.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha"]);
}

#[test]
fn unselected_radio_group_is_omitted() {
    let form = build(
        r#"{"properties": {
        "os": {"widget": "radio", "enum": ["A", "B"]}
    }}"#,
    );
    assert!(form.form_data().get("os").is_none());
}

#[test]
fn first_checked_radio_member_wins() {
    let mut form = build(
        r#"{"properties": {
        "os": {"widget": "radio", "enum": ["A", "B"]}
    }}"#,
    );
    let second = match form.field("os").expect("registered") {
        FieldEntry::Radio { buttons } => buttons[1],
        _ => panic!("expected radio entry"),
    };
    form.toolkit_mut().set_checked(second, true);
    assert_eq!(form.form_data().get("os"), Some(&json!("B")));
}

#[test]
fn first_of_several_checked_radio_members_wins() {
    let mut form = build(
        r#"{"properties": {
        "os": {"widget": "radio", "enum": ["A", "B"]}
    }}"#,
    );
    let (first, second) = match form.field("os").expect("registered") {
        FieldEntry::Radio { buttons } => (buttons[0], buttons[1]),
        _ => panic!("expected radio entry"),
    };
    // a real toolkit keeps the group exclusive; harvesting still has to
    // pick deterministically if it is not
    form.toolkit_mut().set_checked(second, true);
    form.toolkit_mut().set_checked(first, true);
    assert_eq!(form.form_data().get("os"), Some(&json!("A")));
}

#[test]
fn edits_flow_back_through_the_harvest() {
    let mut form = build(
        r#"{"properties": {
        "name": {"type": "string"},
        "subscribe": {"type": "boolean"},
        "floor": {"type": "integer", "maximum": 30},
        "plan": {"type": "string", "enum": ["Free", "Pro"]}
    }}"#,
    );
    let widget_of = |form: &FormView<HeadlessToolkit>, name: &str| match form
        .field(name)
        .expect("registered")
    {
        FieldEntry::Single { widget, .. } => *widget,
        _ => panic!("expected single entry"),
    };
    let name = widget_of(&form, "name");
    let subscribe = widget_of(&form, "subscribe");
    let floor = widget_of(&form, "floor");
    let plan = widget_of(&form, "plan");

    let tk = form.toolkit_mut();
    tk.set_text(name, "Ada");
    tk.set_checked(subscribe, true);
    tk.set_int_value(floor, 12);
    tk.set_selected_text(plan, "Pro");

    let data = form.form_data();
    assert_eq!(data.get("name"), Some(&json!("Ada")));
    assert_eq!(data.get("subscribe"), Some(&json!(true)));
    assert_eq!(data.get("floor"), Some(&json!(12)));
    assert_eq!(data.get("plan"), Some(&json!("Pro")));
}

#[test]
fn enum_less_combobox_harvests_an_empty_string() {
    let form = build(r#"{"properties": {"plan": {"widget": "combobox"}}}"#);
    assert_eq!(form.form_data().get("plan"), Some(&json!("")));
}
