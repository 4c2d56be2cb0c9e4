use crate::arrange::LayoutChoice;
use crate::builder::BuildCx;
use crate::factory::{GLYPH_CLOSED, GLYPH_OPEN};
use crate::harvest;
use crate::registry::{FieldEntry, MultiToggleEntry, Registry, SubformInstance};
use crate::toolkit::{LayoutId, LayoutKind, Toolkit, WidgetId};
use indexmap::IndexMap;
use log::debug;
use lyra_schema::SchemaNode;
use std::collections::HashMap;
use uuid::Uuid;

/// Zero-argument action supplied by the caller and fired on button
/// activation.
pub type Callback = Box<dyn FnMut()>;

/// Caller-supplied callback-name -> action table.
pub type CallbackTable = HashMap<String, Callback>;

/// What an activatable widget does when the host delivers a click.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    ToggleSection {
        trigger: WidgetId,
        container: WidgetId,
    },
    AddInstance {
        owner: Uuid,
    },
    RemoveInstance {
        owner: Uuid,
        instance: Uuid,
    },
    RunCallback {
        name: String,
    },
}

/// A live form built from a schema: the widget tree, the field registry,
/// and the activation routes. Exclusively owned; all mutation goes through
/// `&mut self` on the event-loop thread.
pub struct FormView<T: Toolkit> {
    tk: T,
    root: WidgetId,
    root_layout: LayoutId,
    choice: LayoutChoice,
    registry: Registry,
    buttons: IndexMap<String, WidgetId>,
    actions: HashMap<WidgetId, Action>,
    callbacks: CallbackTable,
}

impl<T: Toolkit> FormView<T> {
    /// Build the full widget tree for `schema` in one pass. Construction
    /// is best-effort: unrecognized fields degrade to nothing, never to an
    /// error.
    pub fn build(schema: &SchemaNode, mut tk: T, choice: LayoutChoice) -> Self {
        let root = tk.create_panel();
        let root_layout = tk.create_layout(choice.layout_kind());
        tk.install_layout(root, root_layout);

        let mut registry = Registry::new();
        let mut buttons = IndexMap::new();
        let mut actions = HashMap::new();
        let arranger = choice.arranger::<T>();
        {
            let mut cx = BuildCx {
                tk: &mut tk,
                actions: &mut actions,
                buttons: &mut buttons,
                arranger: arranger.as_ref(),
                choice,
            };
            cx.build(&schema.properties, root_layout, &mut registry);
        }

        Self {
            tk,
            root,
            root_layout,
            choice,
            registry,
            buttons,
            actions,
            callbacks: CallbackTable::new(),
        }
    }

    /// Deliver an activation (click) event from the host toolkit. Widgets
    /// without a recorded route are ignored.
    pub fn activate(&mut self, widget: WidgetId) {
        let Some(action) = self.actions.get(&widget).cloned() else {
            return;
        };
        match action {
            Action::ToggleSection { trigger, container } => {
                let visible = self.tk.is_visible(container);
                self.tk.set_visible(container, !visible);
                self.tk
                    .set_text(trigger, if visible { GLYPH_CLOSED } else { GLYPH_OPEN });
            }
            Action::AddInstance { owner } => self.add_instance(owner),
            Action::RemoveInstance { owner, instance } => self.remove_instance(owner, instance),
            Action::RunCallback { name } => {
                if let Some(callback) = self.callbacks.get_mut(&name) {
                    callback();
                }
            }
        }
    }

    /// Merge a callback table into the form. Declared callback names with
    /// no table entry stay silent no-ops.
    pub fn bind_callbacks(&mut self, callbacks: CallbackTable) {
        self.callbacks.extend(callbacks);
    }

    /// Harvest current values into a flat mapping, in declaration order.
    pub fn form_data(&self) -> serde_json::Map<String, serde_json::Value> {
        harvest::collect(&self.tk, &self.registry)
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn root_layout(&self) -> LayoutId {
        self.root_layout
    }

    pub fn layout_choice(&self) -> LayoutChoice {
        self.choice
    }

    pub fn fields(&self) -> &Registry {
        &self.registry
    }

    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.registry.get(name)
    }

    pub fn buttons(&self) -> &IndexMap<String, WidgetId> {
        &self.buttons
    }

    pub fn button(&self, name: &str) -> Option<WidgetId> {
        self.buttons.get(name).copied()
    }

    pub fn toolkit(&self) -> &T {
        &self.tk
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.tk
    }

    fn add_instance(&mut self, owner: Uuid) {
        let (container, children) = {
            let Some(state) = find_multi_toggle(&mut self.registry, owner) else {
                return;
            };
            let key = self.tk.selected_text(state.selector);
            let Some(node) = state.children_map.get(&key) else {
                debug!("multi-toggle: no children mapped for {key:?}");
                return;
            };
            if node.is_empty() {
                return;
            }
            (state.container, node.clone())
        };
        let Some(container_layout) = self.tk.layout_of(container) else {
            return;
        };

        // one row per instance: fields panel on the left, remove trigger
        // on the right
        let root = self.tk.create_panel();
        let chrome = self.tk.create_layout(LayoutKind::Horizontal);
        self.tk.install_layout(root, chrome);
        let fields_panel = self.tk.create_panel();
        let fields_layout = self.tk.create_layout(LayoutKind::Stacked);
        self.tk.install_layout(fields_panel, fields_layout);
        let remove_button = self.tk.create_push_button(GLYPH_OPEN);

        let mut sub_registry = Registry::new();
        let mut sub_buttons = IndexMap::new();
        let arranger = LayoutChoice::Stacked.arranger::<T>();
        {
            let mut cx = BuildCx {
                tk: &mut self.tk,
                actions: &mut self.actions,
                buttons: &mut sub_buttons,
                arranger: arranger.as_ref(),
                choice: LayoutChoice::Stacked,
            };
            cx.build(&children.properties, fields_layout, &mut sub_registry);
        }

        self.tk.push_widget(chrome, fields_panel);
        self.tk.push_widget(chrome, remove_button);
        self.tk.push_widget(container_layout, root);

        let instance = Uuid::new_v4();
        self.actions.insert(
            remove_button,
            Action::RemoveInstance { owner, instance },
        );
        if let Some(state) = find_multi_toggle(&mut self.registry, owner) {
            state.instances.push(SubformInstance {
                id: instance,
                root,
                remove_button,
                registry: sub_registry,
                buttons: sub_buttons,
            });
        }
    }

    fn remove_instance(&mut self, owner: Uuid, instance: Uuid) {
        let (container, removed) = {
            let Some(state) = find_multi_toggle(&mut self.registry, owner) else {
                return;
            };
            let Some(position) = state.instances.iter().position(|i| i.id == instance) else {
                return;
            };
            (state.container, state.instances.remove(position))
        };
        purge_instance(&mut self.actions, &removed);
        if let Some(layout) = self.tk.layout_of(container) {
            self.tk.detach_widget(layout, removed.root);
        }
        self.tk.destroy_widget(removed.root);
    }
}

/// Locate a multi-toggle entry by its id, searching nested instance
/// registries as well. Names cannot serve as the key here: the same field
/// name may recur across independent instances.
fn find_multi_toggle(registry: &mut Registry, owner: Uuid) -> Option<&mut MultiToggleEntry> {
    for entry in registry.values_mut() {
        if let FieldEntry::MultiToggle(state) = entry {
            if state.id == owner {
                return Some(state);
            }
            for instance in &mut state.instances {
                if let Some(found) = find_multi_toggle(&mut instance.registry, owner) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Drop every activation route owned by a discarded instance so a stale
/// click can never reach a destroyed widget.
fn purge_instance(actions: &mut HashMap<WidgetId, Action>, instance: &SubformInstance) {
    actions.remove(&instance.remove_button);
    for button in instance.buttons.values() {
        actions.remove(button);
    }
    purge_registry(actions, &instance.registry);
}

fn purge_registry(actions: &mut HashMap<WidgetId, Action>, registry: &Registry) {
    for entry in registry.values() {
        match entry {
            FieldEntry::Toggle { trigger, .. } => {
                actions.remove(trigger);
            }
            FieldEntry::MultiToggle(state) => {
                actions.remove(&state.add_button);
                for instance in &state.instances {
                    purge_instance(actions, instance);
                }
            }
            FieldEntry::Single { .. } | FieldEntry::Radio { .. } => {}
        }
    }
}
