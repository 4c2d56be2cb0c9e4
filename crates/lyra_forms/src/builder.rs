//! Recursive schema walk. Fields are processed in declaration order;
//! leaf construction is delegated to the factory, placement to the
//! arranger.

use crate::arrange::{Arranger, LayoutChoice};
use crate::factory::{self, Created};
use crate::form::Action;
use crate::registry::Registry;
use crate::toolkit::{LayoutId, Toolkit, WidgetId};
use indexmap::IndexMap;
use log::debug;
use lyra_schema::{FieldMap, WidgetTag};
use std::collections::HashMap;

/// Borrow-scoped view of the form state the build pass mutates. Used for
/// the initial build and again for every dynamically added subform.
pub(crate) struct BuildCx<'a, T: Toolkit> {
    pub tk: &'a mut T,
    pub actions: &'a mut HashMap<WidgetId, Action>,
    pub buttons: &'a mut IndexMap<String, WidgetId>,
    pub arranger: &'a dyn Arranger<T>,
    pub choice: LayoutChoice,
}

impl<T: Toolkit> BuildCx<'_, T> {
    pub fn build(&mut self, fields: &FieldMap, layout: LayoutId, registry: &mut Registry) {
        let mut row: i32 = 0;
        for (name, field) in fields {
            match field.widget_tag() {
                Some(WidgetTag::Group) => {
                    let title = field.title_or(name);
                    let group_box = self.tk.create_group_box(title);
                    let body = self.tk.create_layout(self.choice.layout_kind());
                    self.tk.install_layout(group_box, body);
                    if let Some(children) = &field.properties {
                        self.build(children, body, registry);
                    }
                    self.place(layout, &[group_box], title, &mut row);
                }
                Some(WidgetTag::Label) => {
                    if let Created::Plain(label) = factory::create_widget(self, registry, name, field)
                    {
                        self.place(layout, &[label], "", &mut row);
                    }
                }
                Some(WidgetTag::Button) => {
                    if let Created::Plain(button) = factory::create_widget(self, registry, name, field)
                    {
                        self.buttons.insert(name.clone(), button);
                        if let Some(callback) = &field.callback {
                            self.actions.insert(
                                button,
                                Action::RunCallback {
                                    name: callback.clone(),
                                },
                            );
                        }
                        self.place(layout, &[button], "", &mut row);
                    }
                }
                Some(WidgetTag::Radio) if field.has_choices() => {
                    if let Created::Radio(buttons) = factory::create_widget(self, registry, name, field)
                    {
                        let title = field.title_or(name);
                        let group_box = self.wrap_in_group(title, &buttons);
                        self.place(layout, &[group_box], title, &mut row);
                    }
                }
                _ => match factory::create_widget(self, registry, name, field) {
                    Created::Single(widget) => {
                        self.place(layout, &[widget], field.title_or(name), &mut row);
                    }
                    Created::Plain(widget) => {
                        self.place(layout, &[widget], field.title_or(name), &mut row);
                    }
                    Created::Radio(buttons) => {
                        // enum-less radio: the grouping still renders, empty
                        let title = field.title_or(name);
                        let group_box = self.wrap_in_group(title, &buttons);
                        self.place(layout, &[group_box], title, &mut row);
                    }
                    Created::Toggle { trigger, container } => {
                        self.place(layout, &[trigger], "", &mut row);
                        self.place(layout, &[container], "", &mut row);
                        if let Some(children) = &field.children {
                            if let Some(body) = self.tk.layout_of(container) {
                                self.build(&children.properties, body, registry);
                            }
                        }
                    }
                    Created::MultiToggle { control, container } => {
                        self.place(layout, &[control], "", &mut row);
                        self.place(layout, &[container], "", &mut row);
                    }
                    Created::None => {
                        debug!("field {name:?}: skipped, nothing to place");
                    }
                },
            }
        }
    }

    fn wrap_in_group(&mut self, title: &str, members: &[WidgetId]) -> WidgetId {
        let group_box = self.tk.create_group_box(title);
        let body = self.tk.create_layout(self.choice.layout_kind());
        self.tk.install_layout(group_box, body);
        for &member in members {
            self.tk.push_widget(body, member);
        }
        group_box
    }

    fn place(&mut self, layout: LayoutId, widgets: &[WidgetId], title: &str, row: &mut i32) {
        self.arranger.place(self.tk, layout, widgets, title, row);
    }
}
