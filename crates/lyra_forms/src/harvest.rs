//! Value extraction: walks a registry in declaration order and reads each
//! control's current state through the toolkit.

use crate::registry::{ControlKind, FieldEntry, Registry};
use crate::toolkit::Toolkit;
use serde_json::{Map, Value};

pub(crate) fn collect<T: Toolkit>(tk: &T, registry: &Registry) -> Map<String, Value> {
    let mut data = Map::new();
    for (name, entry) in registry {
        match entry {
            FieldEntry::Single { widget, kind } => {
                let value = match kind {
                    ControlKind::LineEdit | ControlKind::TextArea => Value::from(tk.text(*widget)),
                    ControlKind::ComboBox => Value::from(tk.selected_text(*widget)),
                    ControlKind::SpinBox => Value::from(tk.int_value(*widget)),
                    ControlKind::DoubleSpinBox => Value::from(tk.float_value(*widget)),
                    ControlKind::CheckBox => Value::from(tk.is_checked(*widget)),
                };
                data.insert(name.clone(), value);
            }
            FieldEntry::Radio { buttons } => {
                // first checked member wins; no selection means no key
                if let Some(selected) = buttons.iter().find(|b| tk.is_checked(**b)) {
                    data.insert(name.clone(), Value::from(tk.text(*selected)));
                }
            }
            // a toggle's children registered into this same registry and
            // harvest on their own
            FieldEntry::Toggle { .. } => {}
            FieldEntry::MultiToggle(state) => {
                let values: Vec<Value> = state
                    .instances
                    .iter()
                    .map(|instance| Value::Object(collect(tk, &instance.registry)))
                    .collect();
                data.insert(name.clone(), Value::Array(values));
            }
        }
    }
    data
}
