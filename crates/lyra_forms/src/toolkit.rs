use uuid::Uuid;

/// Opaque handle to one host-toolkit widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque handle to one host-toolkit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(Uuid);

impl LayoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Vertical sequence of widgets.
    Stacked,
    /// Horizontal sequence, used for synthetic sub-containers.
    Horizontal,
    /// Row/column cells with a synthetic label column.
    Grid,
    /// Title/value rows.
    PairedRows,
}

/// The host GUI toolkit as the form core sees it: a capability set for
/// creating primitives, arranging them, and reading values back. The core
/// never reaches past this surface into toolkit internals.
///
/// All calls run on the single event-loop thread; implementations do not
/// need interior synchronization.
pub trait Toolkit {
    fn create_line_edit(&mut self) -> WidgetId;
    fn create_text_area(&mut self) -> WidgetId;
    fn create_checkbox(&mut self, caption: &str) -> WidgetId;
    fn create_radio_button(&mut self, caption: &str) -> WidgetId;
    fn create_combo_box(&mut self, items: &[String]) -> WidgetId;
    fn create_push_button(&mut self, caption: &str) -> WidgetId;
    fn create_spin_box(&mut self, minimum: i64, maximum: i64) -> WidgetId;
    fn create_double_spin_box(&mut self, minimum: f64, maximum: f64, step: f64) -> WidgetId;
    fn create_group_box(&mut self, title: &str) -> WidgetId;
    fn create_label(&mut self, text: &str) -> WidgetId;
    /// Plain undecorated container widget.
    fn create_panel(&mut self) -> WidgetId;

    fn create_layout(&mut self, kind: LayoutKind) -> LayoutId;
    fn install_layout(&mut self, widget: WidgetId, layout: LayoutId);
    fn layout_of(&self, widget: WidgetId) -> Option<LayoutId>;
    /// Append a widget to a layout in sequence order.
    fn push_widget(&mut self, layout: LayoutId, widget: WidgetId);
    /// Place a widget in a grid cell.
    fn place_grid(&mut self, layout: LayoutId, widget: WidgetId, row: i32, column: i32);
    /// Append a title/value row to a paired-rows layout.
    fn push_row(&mut self, layout: LayoutId, title: &str, widget: WidgetId);
    fn detach_widget(&mut self, layout: LayoutId, widget: WidgetId);
    /// Discard a widget together with its installed layout subtree.
    fn destroy_widget(&mut self, widget: WidgetId);

    fn set_visible(&mut self, widget: WidgetId, visible: bool);
    fn is_visible(&self, widget: WidgetId) -> bool;
    fn set_text(&mut self, widget: WidgetId, text: &str);
    fn text(&self, widget: WidgetId) -> String;
    fn set_checked(&mut self, widget: WidgetId, checked: bool);
    fn is_checked(&self, widget: WidgetId) -> bool;
    /// Current selection of a choice control, empty when nothing is selected.
    fn selected_text(&self, widget: WidgetId) -> String;
    fn set_selected_text(&mut self, widget: WidgetId, value: &str);
    fn int_value(&self, widget: WidgetId) -> i64;
    fn set_int_value(&mut self, widget: WidgetId, value: i64);
    fn float_value(&self, widget: WidgetId) -> f64;
    fn set_float_value(&mut self, widget: WidgetId, value: f64);
}
