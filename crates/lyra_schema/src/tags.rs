/// Explicit widget tag a field descriptor may carry. An unrecognized tag
/// string parses to `None`, which sends dispatch to the type-tag fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTag {
    Group,
    Label,
    Button,
    TextArea,
    CheckBox,
    SpinBox,
    DoubleSpinBox,
    Toggle,
    ComboBox,
    Radio,
    LineEdit,
    MultiToggle,
}

impl WidgetTag {
    pub fn parse(tag: &str) -> Option<WidgetTag> {
        match tag {
            "group" => Some(WidgetTag::Group),
            "label" => Some(WidgetTag::Label),
            "button" => Some(WidgetTag::Button),
            "textarea" => Some(WidgetTag::TextArea),
            "checkbox" => Some(WidgetTag::CheckBox),
            "spinbox" => Some(WidgetTag::SpinBox),
            "doublespinbox" => Some(WidgetTag::DoubleSpinBox),
            "toggle" => Some(WidgetTag::Toggle),
            "combobox" => Some(WidgetTag::ComboBox),
            "radio" => Some(WidgetTag::Radio),
            "lineedit" => Some(WidgetTag::LineEdit),
            "multi_toggle" => Some(WidgetTag::MultiToggle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WidgetTag::Group => "group",
            WidgetTag::Label => "label",
            WidgetTag::Button => "button",
            WidgetTag::TextArea => "textarea",
            WidgetTag::CheckBox => "checkbox",
            WidgetTag::SpinBox => "spinbox",
            WidgetTag::DoubleSpinBox => "doublespinbox",
            WidgetTag::Toggle => "toggle",
            WidgetTag::ComboBox => "combobox",
            WidgetTag::Radio => "radio",
            WidgetTag::LineEdit => "lineedit",
            WidgetTag::MultiToggle => "multi_toggle",
        }
    }
}

/// JSON-schema style type tag, consulted when `widget` is absent or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Integer,
    Number,
    Boolean,
}

impl TypeTag {
    pub fn parse(tag: &str) -> Option<TypeTag> {
        match tag {
            "string" => Some(TypeTag::String),
            "integer" => Some(TypeTag::Integer),
            "number" => Some(TypeTag::Number),
            "boolean" => Some(TypeTag::Boolean),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
        }
    }
}
