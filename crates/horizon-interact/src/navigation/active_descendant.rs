//! Virtual focus via the active-descendant relation.

use std::collections::HashMap;

use accesskit::{Node, NodeId};

use horizon_interact_core::logging::targets;
use horizon_interact_core::Signal;

use crate::key::ItemKey;
use crate::keyboard::{action_for, Key, KeyAction, KeyboardModifiers};
use crate::navigation::delegate::{NavigationDelegate, Topology};
use crate::navigation::roving::{FocusHandle, PAGE_STEP};

/// Virtual-focus navigation without moving real input focus.
///
/// The controlling element (a combobox input, a listbox container) keeps
/// real focus for the whole interaction. This controller tracks which item
/// is virtually active and publishes it as the controlling element's
/// active-descendant reference; assistive technology follows the reference
/// while the keyboard never leaves the controller. Activation asks the
/// item's handle to scroll into view instead of focusing it.
pub struct ActiveDescendantController {
    topology: Topology,
    loop_enabled: bool,
    order: Vec<ItemKey>,
    entries: HashMap<ItemKey, Entry>,
    active: Option<ItemKey>,

    /// Emitted when the virtually active key changes, with the new value.
    pub active_changed: Signal<Option<ItemKey>>,
}

struct Entry {
    node_id: NodeId,
    handle: Box<dyn FocusHandle>,
}

impl ActiveDescendantController {
    /// Create a controller for a topology, without boundary looping.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            loop_enabled: false,
            order: Vec::new(),
            entries: HashMap::new(),
            active: None,
            active_changed: Signal::new(),
        }
    }

    /// Enable or disable boundary looping.
    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    /// The virtually active key.
    pub fn active(&self) -> Option<&ItemKey> {
        self.active.as_ref()
    }

    /// The managed item order.
    pub fn items(&self) -> &[ItemKey] {
        &self.order
    }

    /// The accessible node the controlling element should reference, if an
    /// item is active.
    pub fn active_descendant(&self) -> Option<NodeId> {
        self.active
            .as_ref()
            .and_then(|key| self.entries.get(key))
            .map(|entry| entry.node_id)
    }

    /// Write the active-descendant reference onto the controlling element's
    /// node.
    pub fn apply_to(&self, node: &mut Node) {
        if let Some(id) = self.active_descendant() {
            node.set_active_descendant(id);
        }
    }

    /// Register an item with the accessible node it publishes.
    pub fn register(&mut self, key: ItemKey, node_id: NodeId, handle: Box<dyn FocusHandle>) {
        self.entries.insert(key, Entry { node_id, handle });
    }

    /// Remove an item as it unmounts. A vanished active key clamps to its
    /// nearest surviving neighbor, as in roving focus.
    pub fn unregister(&mut self, key: &ItemKey) {
        self.entries.remove(key);
        if let Some(index) = self.order.iter().position(|k| k == key) {
            self.order.remove(index);
            if self.active.as_ref() == Some(key) {
                let next = self
                    .order
                    .get(index)
                    .or_else(|| self.order.last())
                    .cloned();
                self.activate(next);
            }
        }
    }

    /// Replace the managed item order.
    pub fn set_items(&mut self, items: Vec<ItemKey>) {
        let old_index = self
            .active
            .as_ref()
            .and_then(|active| self.order.iter().position(|k| k == active));
        self.order = items;

        if let Some(active) = &self.active {
            if !self.order.contains(active) {
                let index = old_index.unwrap_or(0);
                let next = self
                    .order
                    .get(index)
                    .or_else(|| self.order.last())
                    .cloned();
                self.activate(next);
            }
        }
    }

    /// Move the virtual active key to an item. Unknown keys are ignored.
    pub fn navigate_to(&mut self, key: &ItemKey) {
        if !self.order.contains(key) {
            return;
        }
        self.activate(Some(key.clone()));
    }

    /// Clear the virtual active key (the collection closed or the query
    /// changed under a combobox).
    pub fn clear_active(&mut self) {
        self.activate(None);
    }

    /// Handle a key press on the controlling element. Returns `true` when
    /// the engine consumed it.
    pub fn handle_key(&mut self, key: Key, modifiers: KeyboardModifiers) -> bool {
        let Some(action) = action_for(key, modifiers) else {
            return false;
        };
        match action {
            KeyAction::Move(direction) => {
                let delegate = NavigationDelegate::new(self.topology).with_loop(self.loop_enabled);
                match delegate.resolve(&self.order, self.active.as_ref(), direction) {
                    Some(next) => {
                        self.activate(Some(next));
                        true
                    }
                    None => false,
                }
            }
            KeyAction::PageForward => self.page(PAGE_STEP as isize),
            KeyAction::PageBackward => self.page(-(PAGE_STEP as isize)),
            _ => false,
        }
    }

    fn page(&mut self, step: isize) -> bool {
        if matches!(self.topology, Topology::Grid { .. }) || self.order.is_empty() {
            return false;
        }
        let current = self
            .active
            .as_ref()
            .and_then(|active| self.order.iter().position(|k| k == active))
            .unwrap_or(0);
        let target = (current as isize + step).clamp(0, self.order.len() as isize - 1) as usize;
        if target == current && self.active.is_some() {
            return false;
        }
        let key = self.order[target].clone();
        self.activate(Some(key));
        true
    }

    fn activate(&mut self, key: Option<ItemKey>) {
        if self.active == key {
            return;
        }
        tracing::debug!(
            target: targets::NAVIGATION,
            active = key.as_ref().map(ItemKey::to_string),
            "virtual focus moved"
        );
        self.active = key.clone();
        // Real focus stays put; the item only needs to become visible.
        if let Some(entry) = key.as_ref().and_then(|k| self.entries.get(k)) {
            entry.handle.scroll_into_view();
        }
        self.active_changed.emit(key);
    }
}

impl std::fmt::Debug for ActiveDescendantController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveDescendantController")
            .field("topology", &self.topology)
            .field("items", &self.order.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
