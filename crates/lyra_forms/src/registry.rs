use crate::toolkit::WidgetId;
use indexmap::IndexMap;
use lyra_schema::SchemaNode;
use uuid::Uuid;

/// Closed set of value-bearing control kinds the harvester understands.
/// The registry carries the kind explicitly so extraction never has to
/// guess from structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    LineEdit,
    TextArea,
    ComboBox,
    SpinBox,
    DoubleSpinBox,
    CheckBox,
}

/// One live subform created under a multi-toggle container. Owns its own
/// control registry; its values surface as one element of the parent
/// field's harvested array.
#[derive(Debug)]
pub struct SubformInstance {
    pub id: Uuid,
    /// Row widget holding the fields panel and the remove trigger.
    pub root: WidgetId,
    pub remove_button: WidgetId,
    pub registry: Registry,
    pub buttons: IndexMap<String, WidgetId>,
}

/// Live state of one multi-toggle field.
#[derive(Debug)]
pub struct MultiToggleEntry {
    pub id: Uuid,
    /// Selector + add-trigger row placed above the container.
    pub control: WidgetId,
    pub selector: WidgetId,
    pub add_button: WidgetId,
    pub container: WidgetId,
    pub children_map: IndexMap<String, SchemaNode>,
    pub instances: Vec<SubformInstance>,
}

/// Registry entry for one leaf field. Tagged explicitly: a two-element
/// radio group must never be mistaken for a toggle pair.
#[derive(Debug)]
pub enum FieldEntry {
    Single { widget: WidgetId, kind: ControlKind },
    Radio { buttons: Vec<WidgetId> },
    Toggle { trigger: WidgetId, container: WidgetId },
    MultiToggle(MultiToggleEntry),
}

/// Form-instance-owned mapping from field name to its live control
/// handle(s), in declaration order.
pub type Registry = IndexMap<String, FieldEntry>;
