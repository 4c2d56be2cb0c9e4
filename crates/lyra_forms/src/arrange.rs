use crate::toolkit::{LayoutId, LayoutKind, Toolkit, WidgetId};

/// Layout strategy selected once at form construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutChoice {
    #[default]
    Stacked,
    Grid,
    PairedRows,
}

impl LayoutChoice {
    pub fn parse(name: &str) -> Option<LayoutChoice> {
        match name {
            "stacked" => Some(LayoutChoice::Stacked),
            "grid" => Some(LayoutChoice::Grid),
            "paired" => Some(LayoutChoice::PairedRows),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LayoutChoice::Stacked => "stacked",
            LayoutChoice::Grid => "grid",
            LayoutChoice::PairedRows => "paired",
        }
    }

    pub fn layout_kind(&self) -> LayoutKind {
        match self {
            LayoutChoice::Stacked => LayoutKind::Stacked,
            LayoutChoice::Grid => LayoutKind::Grid,
            LayoutChoice::PairedRows => LayoutKind::PairedRows,
        }
    }

    pub fn arranger<T: Toolkit>(&self) -> Box<dyn Arranger<T>> {
        match self {
            LayoutChoice::Stacked => Box::new(Stacked),
            LayoutChoice::Grid => Box::new(GridRows),
            LayoutChoice::PairedRows => Box::new(PairedRows),
        }
    }
}

/// Placement policy for one field's widget(s) within a layout. `row` is the
/// grid cursor; strategies that consume rows advance it, the rest leave it
/// untouched.
pub trait Arranger<T: Toolkit> {
    fn place(&self, tk: &mut T, layout: LayoutId, widgets: &[WidgetId], title: &str, row: &mut i32);
}

/// Appends widgets in sequence. Leaf titles are not rendered; only group
/// boxes surface titles in this strategy.
pub struct Stacked;

impl<T: Toolkit> Arranger<T> for Stacked {
    fn place(
        &self,
        tk: &mut T,
        layout: LayoutId,
        widgets: &[WidgetId],
        _title: &str,
        _row: &mut i32,
    ) {
        for &widget in widgets {
            tk.push_widget(layout, widget);
        }
    }
}

/// Synthetic title label in column 0, widgets in column 1 onward, one row
/// per placement.
pub struct GridRows;

impl<T: Toolkit> Arranger<T> for GridRows {
    fn place(
        &self,
        tk: &mut T,
        layout: LayoutId,
        widgets: &[WidgetId],
        title: &str,
        row: &mut i32,
    ) {
        let label = tk.create_label(title);
        tk.place_grid(layout, label, *row, 0);
        for (offset, &widget) in widgets.iter().enumerate() {
            tk.place_grid(layout, widget, *row, 1 + offset as i32);
        }
        *row += 1;
    }
}

/// One title/value row per placement; several widgets share the value slot
/// through a synthetic horizontal sub-container.
pub struct PairedRows;

impl<T: Toolkit> Arranger<T> for PairedRows {
    fn place(
        &self,
        tk: &mut T,
        layout: LayoutId,
        widgets: &[WidgetId],
        title: &str,
        _row: &mut i32,
    ) {
        match widgets {
            [] => {}
            [single] => tk.push_row(layout, title, *single),
            many => {
                let panel = tk.create_panel();
                let inner = tk.create_layout(LayoutKind::Horizontal);
                tk.install_layout(panel, inner);
                for &widget in many {
                    tk.push_widget(inner, widget);
                }
                tk.push_row(layout, title, panel);
            }
        }
    }
}
