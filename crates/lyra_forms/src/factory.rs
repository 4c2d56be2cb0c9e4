//! Widget factory: turns one field descriptor into live toolkit controls
//! and registers value-bearing leaves into the builder-owned registry.

use crate::builder::BuildCx;
use crate::form::Action;
use crate::registry::{ControlKind, FieldEntry, MultiToggleEntry, Registry};
use crate::toolkit::{LayoutKind, Toolkit, WidgetId};
use log::warn;
use lyra_schema::{FieldDescriptor, TypeTag, WidgetTag};
use uuid::Uuid;

/// Trigger caption while a collapsible section is closed; also the add
/// trigger of a multi-toggle.
pub const GLYPH_CLOSED: &str = "[+]";
/// Trigger caption while a section is open; also the remove trigger of a
/// subform instance.
pub const GLYPH_OPEN: &str = "[-]";

/// Tagged factory result. The builder dispatches on the variant instead of
/// sniffing shapes.
pub enum Created {
    /// A single value-bearing control, registered under the field name.
    Single(WidgetId),
    /// A static label or push button; never registered as a field.
    Plain(WidgetId),
    /// One exclusive button per enum value, registered as a group.
    Radio(Vec<WidgetId>),
    /// Collapsible section: trigger plus initially hidden container.
    Toggle {
        trigger: WidgetId,
        container: WidgetId,
    },
    /// Repeatable subform: selector row plus instance container.
    MultiToggle {
        control: WidgetId,
        container: WidgetId,
    },
    /// Unrecognized descriptor; the field produces nothing.
    None,
}

pub(crate) fn create_widget<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    match field.widget_tag() {
        Some(WidgetTag::Label) => Created::Plain(cx.tk.create_label(field.label_text())),
        Some(WidgetTag::Button) => Created::Plain(cx.tk.create_push_button(field.button_text())),
        Some(WidgetTag::TextArea) => {
            let widget = cx.tk.create_text_area();
            register_single(registry, name, widget, ControlKind::TextArea)
        }
        Some(WidgetTag::CheckBox) => {
            let widget = cx.tk.create_checkbox(field.caption(name));
            register_single(registry, name, widget, ControlKind::CheckBox)
        }
        Some(WidgetTag::SpinBox) => create_spin(cx, registry, name, field),
        Some(WidgetTag::DoubleSpinBox) => create_double_spin(cx, registry, name, field),
        Some(WidgetTag::Toggle) => create_toggle(cx, registry, name),
        Some(WidgetTag::ComboBox) => create_combo(cx, registry, name, field),
        Some(WidgetTag::Radio) => create_radio(cx, registry, name, field),
        Some(WidgetTag::LineEdit) => {
            let widget = cx.tk.create_line_edit();
            register_single(registry, name, widget, ControlKind::LineEdit)
        }
        Some(WidgetTag::MultiToggle) => create_multi_toggle(cx, registry, name, field),
        // `group` is consumed by the builder before the factory runs;
        // reaching it here means a group nested where a leaf was expected.
        Some(WidgetTag::Group) | None => match field.type_tag() {
            Some(TypeTag::String) => {
                if field.has_choices() {
                    create_combo(cx, registry, name, field)
                } else {
                    let widget = cx.tk.create_line_edit();
                    register_single(registry, name, widget, ControlKind::LineEdit)
                }
            }
            Some(TypeTag::Integer) => create_spin(cx, registry, name, field),
            Some(TypeTag::Number) => create_double_spin(cx, registry, name, field),
            Some(TypeTag::Boolean) => {
                let widget = cx.tk.create_checkbox(field.title_or(name));
                register_single(registry, name, widget, ControlKind::CheckBox)
            }
            None => {
                warn!(
                    "field {name:?}: no control for widget={:?} type={:?}",
                    field.widget, field.field_type
                );
                Created::None
            }
        },
    }
}

fn register_single(
    registry: &mut Registry,
    name: &str,
    widget: WidgetId,
    kind: ControlKind,
) -> Created {
    registry.insert(name.to_string(), FieldEntry::Single { widget, kind });
    Created::Single(widget)
}

fn create_spin<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    let (minimum, maximum) = field.spin_bounds();
    let widget = cx.tk.create_spin_box(minimum, maximum);
    register_single(registry, name, widget, ControlKind::SpinBox)
}

fn create_double_spin<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    let (minimum, maximum, step) = field.double_spin_bounds();
    let widget = cx.tk.create_double_spin_box(minimum, maximum, step);
    register_single(registry, name, widget, ControlKind::DoubleSpinBox)
}

fn create_combo<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    let widget = cx.tk.create_combo_box(field.choice_list());
    register_single(registry, name, widget, ControlKind::ComboBox)
}

fn create_radio<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    let buttons: Vec<WidgetId> = field
        .choice_list()
        .iter()
        .map(|value| cx.tk.create_radio_button(value))
        .collect();
    registry.insert(
        name.to_string(),
        FieldEntry::Radio {
            buttons: buttons.clone(),
        },
    );
    Created::Radio(buttons)
}

fn create_toggle<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
) -> Created {
    let trigger = cx.tk.create_push_button(GLYPH_CLOSED);
    let container = cx.tk.create_panel();
    let body = cx.tk.create_layout(LayoutKind::Stacked);
    cx.tk.install_layout(container, body);
    // sections always start closed
    cx.tk.set_visible(container, false);

    cx.actions
        .insert(trigger, Action::ToggleSection { trigger, container });
    registry.insert(name.to_string(), FieldEntry::Toggle { trigger, container });
    Created::Toggle { trigger, container }
}

fn create_multi_toggle<T: Toolkit>(
    cx: &mut BuildCx<'_, T>,
    registry: &mut Registry,
    name: &str,
    field: &FieldDescriptor,
) -> Created {
    let container = cx.tk.create_panel();
    let body = cx.tk.create_layout(LayoutKind::Stacked);
    cx.tk.install_layout(container, body);

    let control = cx.tk.create_panel();
    let control_layout = cx.tk.create_layout(LayoutKind::Horizontal);
    cx.tk.install_layout(control, control_layout);
    let selector = cx.tk.create_combo_box(field.choice_list());
    let add_button = cx.tk.create_push_button(GLYPH_CLOSED);
    cx.tk.push_widget(control_layout, selector);
    cx.tk.push_widget(control_layout, add_button);

    let owner = Uuid::new_v4();
    cx.actions.insert(add_button, Action::AddInstance { owner });
    registry.insert(
        name.to_string(),
        FieldEntry::MultiToggle(MultiToggleEntry {
            id: owner,
            control,
            selector,
            add_button,
            container,
            children_map: field.children_map.clone().unwrap_or_default(),
            instances: Vec::new(),
        }),
    );
    Created::MultiToggle { control, container }
}
