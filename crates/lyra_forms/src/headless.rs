//! In-memory toolkit backend. Widgets are plain records; tests and the demo
//! shell read them back directly instead of driving a real GUI.

use crate::toolkit::{LayoutId, LayoutKind, Toolkit, WidgetId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeClass {
    LineEdit,
    TextArea,
    CheckBox,
    RadioButton,
    ComboBox,
    PushButton,
    SpinBox,
    DoubleSpinBox,
    GroupBox,
    Label,
    Panel,
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    pub class: NativeClass,
    /// Caption, text content, or group title depending on the class.
    pub text: String,
    pub items: Vec<String>,
    pub selected: Option<usize>,
    pub checked: bool,
    pub int_value: i64,
    pub int_min: i64,
    pub int_max: i64,
    pub float_value: f64,
    pub float_min: f64,
    pub float_max: f64,
    pub float_step: f64,
    pub visible: bool,
    pub layout: Option<LayoutId>,
}

impl WidgetState {
    fn new(class: NativeClass) -> Self {
        Self {
            class,
            text: String::new(),
            items: Vec::new(),
            selected: None,
            checked: false,
            int_value: 0,
            int_min: 0,
            int_max: 0,
            float_value: 0.0,
            float_min: 0.0,
            float_max: 0.0,
            float_step: 0.0,
            visible: true,
            layout: None,
        }
    }

    fn with_text(class: NativeClass, text: &str) -> Self {
        let mut state = Self::new(class);
        state.text = text.to_string();
        state
    }
}

#[derive(Debug, Clone)]
pub enum LayoutEntry {
    Widget(WidgetId),
    Cell {
        row: i32,
        column: i32,
        widget: WidgetId,
    },
    Row {
        title: String,
        widget: WidgetId,
    },
}

impl LayoutEntry {
    pub fn widget(&self) -> WidgetId {
        match self {
            LayoutEntry::Widget(w) => *w,
            LayoutEntry::Cell { widget, .. } => *widget,
            LayoutEntry::Row { widget, .. } => *widget,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    pub kind: LayoutKind,
    pub entries: Vec<LayoutEntry>,
}

#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    widgets: HashMap<WidgetId, WidgetState>,
    layouts: HashMap<LayoutId, LayoutState>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    pub fn layout(&self, id: LayoutId) -> Option<&LayoutState> {
        self.layouts.get(&id)
    }

    /// Widgets of a layout in placement order, whatever the entry shape.
    pub fn layout_widgets(&self, id: LayoutId) -> Vec<WidgetId> {
        self.layouts
            .get(&id)
            .map(|l| l.entries.iter().map(LayoutEntry::widget).collect())
            .unwrap_or_default()
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    fn add(&mut self, state: WidgetState) -> WidgetId {
        let id = WidgetId::new();
        self.widgets.insert(id, state);
        id
    }

    fn entry(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.widgets.get_mut(&id)
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_line_edit(&mut self) -> WidgetId {
        self.add(WidgetState::new(NativeClass::LineEdit))
    }

    fn create_text_area(&mut self) -> WidgetId {
        self.add(WidgetState::new(NativeClass::TextArea))
    }

    fn create_checkbox(&mut self, caption: &str) -> WidgetId {
        self.add(WidgetState::with_text(NativeClass::CheckBox, caption))
    }

    fn create_radio_button(&mut self, caption: &str) -> WidgetId {
        self.add(WidgetState::with_text(NativeClass::RadioButton, caption))
    }

    fn create_combo_box(&mut self, items: &[String]) -> WidgetId {
        let mut state = WidgetState::new(NativeClass::ComboBox);
        state.items = items.to_vec();
        // first item is preselected, as native dropdowns do
        state.selected = if items.is_empty() { None } else { Some(0) };
        self.add(state)
    }

    fn create_push_button(&mut self, caption: &str) -> WidgetId {
        self.add(WidgetState::with_text(NativeClass::PushButton, caption))
    }

    fn create_spin_box(&mut self, minimum: i64, maximum: i64) -> WidgetId {
        let mut state = WidgetState::new(NativeClass::SpinBox);
        state.int_min = minimum;
        state.int_max = maximum;
        state.int_value = minimum;
        self.add(state)
    }

    fn create_double_spin_box(&mut self, minimum: f64, maximum: f64, step: f64) -> WidgetId {
        let mut state = WidgetState::new(NativeClass::DoubleSpinBox);
        state.float_min = minimum;
        state.float_max = maximum;
        state.float_step = step;
        state.float_value = minimum;
        self.add(state)
    }

    fn create_group_box(&mut self, title: &str) -> WidgetId {
        self.add(WidgetState::with_text(NativeClass::GroupBox, title))
    }

    fn create_label(&mut self, text: &str) -> WidgetId {
        self.add(WidgetState::with_text(NativeClass::Label, text))
    }

    fn create_panel(&mut self) -> WidgetId {
        self.add(WidgetState::new(NativeClass::Panel))
    }

    fn create_layout(&mut self, kind: LayoutKind) -> LayoutId {
        let id = LayoutId::new();
        self.layouts.insert(
            id,
            LayoutState {
                kind,
                entries: Vec::new(),
            },
        );
        id
    }

    fn install_layout(&mut self, widget: WidgetId, layout: LayoutId) {
        if let Some(state) = self.entry(widget) {
            state.layout = Some(layout);
        }
    }

    fn layout_of(&self, widget: WidgetId) -> Option<LayoutId> {
        self.widgets.get(&widget).and_then(|s| s.layout)
    }

    fn push_widget(&mut self, layout: LayoutId, widget: WidgetId) {
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.entries.push(LayoutEntry::Widget(widget));
        }
    }

    fn place_grid(&mut self, layout: LayoutId, widget: WidgetId, row: i32, column: i32) {
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.entries.push(LayoutEntry::Cell {
                row,
                column,
                widget,
            });
        }
    }

    fn push_row(&mut self, layout: LayoutId, title: &str, widget: WidgetId) {
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.entries.push(LayoutEntry::Row {
                title: title.to_string(),
                widget,
            });
        }
    }

    fn detach_widget(&mut self, layout: LayoutId, widget: WidgetId) {
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.entries.retain(|e| e.widget() != widget);
        }
    }

    fn destroy_widget(&mut self, widget: WidgetId) {
        let Some(state) = self.widgets.remove(&widget) else {
            return;
        };
        let Some(layout) = state.layout else { return };
        let children: Vec<WidgetId> = self
            .layouts
            .remove(&layout)
            .map(|l| l.entries.iter().map(LayoutEntry::widget).collect())
            .unwrap_or_default();
        for child in children {
            self.destroy_widget(child);
        }
    }

    fn set_visible(&mut self, widget: WidgetId, visible: bool) {
        if let Some(state) = self.entry(widget) {
            state.visible = visible;
        }
    }

    fn is_visible(&self, widget: WidgetId) -> bool {
        self.widgets.get(&widget).map(|s| s.visible).unwrap_or(false)
    }

    fn set_text(&mut self, widget: WidgetId, text: &str) {
        if let Some(state) = self.entry(widget) {
            state.text = text.to_string();
        }
    }

    fn text(&self, widget: WidgetId) -> String {
        self.widgets
            .get(&widget)
            .map(|s| s.text.clone())
            .unwrap_or_default()
    }

    fn set_checked(&mut self, widget: WidgetId, checked: bool) {
        if let Some(state) = self.entry(widget) {
            state.checked = checked;
        }
    }

    fn is_checked(&self, widget: WidgetId) -> bool {
        self.widgets.get(&widget).map(|s| s.checked).unwrap_or(false)
    }

    fn selected_text(&self, widget: WidgetId) -> String {
        self.widgets
            .get(&widget)
            .and_then(|s| s.selected.and_then(|i| s.items.get(i)))
            .cloned()
            .unwrap_or_default()
    }

    fn set_selected_text(&mut self, widget: WidgetId, value: &str) {
        if let Some(state) = self.entry(widget) {
            if let Some(index) = state.items.iter().position(|item| item == value) {
                state.selected = Some(index);
            }
        }
    }

    fn int_value(&self, widget: WidgetId) -> i64 {
        self.widgets.get(&widget).map(|s| s.int_value).unwrap_or(0)
    }

    fn set_int_value(&mut self, widget: WidgetId, value: i64) {
        if let Some(state) = self.entry(widget) {
            state.int_value = value.clamp(state.int_min, state.int_max);
        }
    }

    fn float_value(&self, widget: WidgetId) -> f64 {
        self.widgets
            .get(&widget)
            .map(|s| s.float_value)
            .unwrap_or(0.0)
    }

    fn set_float_value(&mut self, widget: WidgetId, value: f64) {
        if let Some(state) = self.entry(widget) {
            state.float_value = value.clamp(state.float_min, state.float_max);
        }
    }
}
