use lyra_forms::{CallbackTable, FormView, HeadlessToolkit, LayoutChoice};
use lyra_schema::SchemaNode;
use std::cell::Cell;
use std::rc::Rc;

fn build(json: &str) -> FormView<HeadlessToolkit> {
    let schema: SchemaNode = serde_json::from_str(json).expect("Failed to parse schema");
    FormView::build(&schema, HeadlessToolkit::new(), LayoutChoice::Stacked)
}

fn counting_table(name: &str, count: &Rc<Cell<u32>>) -> CallbackTable {
    let count = Rc::clone(count);
    let mut table = CallbackTable::new();
    table.insert(name.to_string(), Box::new(move || count.set(count.get() + 1)));
    table
}

#[test]
fn bound_callback_fires_on_every_activation() {
    let mut form = build(
        r#"{"properties": {
        "save": {"widget": "button", "text": "Save", "callback": "save_form"}
    }}"#,
    );
    let count = Rc::new(Cell::new(0));
    form.bind_callbacks(counting_table("save_form", &count));

    let save = form.button("save").expect("button registered");
    form.activate(save);
    form.activate(save);
    assert_eq!(count.get(), 2);
}

#[test]
fn unbound_callback_name_is_a_silent_no_op() {
    let mut form = build(
        r#"{"properties": {
        "save": {"widget": "button", "callback": "save_form"}
    }}"#,
    );
    let count = Rc::new(Cell::new(0));
    form.bind_callbacks(counting_table("some_other_name", &count));
    let save = form.button("save").expect("button registered");
    form.activate(save);
    assert_eq!(count.get(), 0);
}

#[test]
fn button_without_declared_callback_stays_inert() {
    let mut form = build(r#"{"properties": {"save": {"widget": "button"}}}"#);
    let count = Rc::new(Cell::new(0));
    form.bind_callbacks(counting_table("save_form", &count));
    let save = form.button("save").expect("button registered");
    form.activate(save);
    assert_eq!(count.get(), 0);
}

#[test]
fn buttons_nested_in_groups_fire_too() {
    let mut form = build(
        r#"{"properties": {
        "actions": {
            "widget": "group",
            "properties": {
                "reset": {"widget": "button", "callback": "reset_form"}
            }
        }
    }}"#,
    );
    let count = Rc::new(Cell::new(0));
    form.bind_callbacks(counting_table("reset_form", &count));
    let reset = form.button("reset").expect("button registered");
    form.activate(reset);
    assert_eq!(count.get(), 1);
}
