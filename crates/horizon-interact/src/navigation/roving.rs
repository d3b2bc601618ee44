//! Roving focus: real keyboard focus moved across a managed item set.

use std::collections::HashMap;

use horizon_interact_core::logging::targets;
use horizon_interact_core::Signal;

use crate::geometry::Point;
use crate::key::ItemKey;
use crate::keyboard::{action_for, Key, KeyAction, KeyboardModifiers};
use crate::navigation::delegate::{NavigationDelegate, Topology};

/// How many items PageUp/PageDown jump in non-grid topologies.
///
/// A fixed step, deliberately uncorrelated with viewport geometry: the
/// engine performs no layout, so a viewport-derived step would require a
/// measurement round-trip on every page key.
pub const PAGE_STEP: usize = 10;

/// A host-side handle to one focusable item.
///
/// Registered by the host as items mount, removed as they unmount. The
/// engine drives the handle; it never inspects the widget behind it.
pub trait FocusHandle {
    /// Give the item real input focus.
    fn focus(&self);

    /// Scroll the item into view without focusing it.
    fn scroll_into_view(&self);

    /// The item's rendered origin, for geometric column sampling.
    fn origin(&self) -> Point;
}

/// Moves real input focus between registered items.
///
/// Maintains the roving-tabindex invariant: exactly one item of the managed
/// set is reachable by sequential keyboard traversal — the active item, or
/// the first item while nothing is active yet. All directional movement
/// resolves through a [`NavigationDelegate`]; a successful resolution
/// updates the active key and focuses the registered handle.
pub struct RovingFocusController {
    topology: Topology,
    loop_enabled: bool,
    column_hint: usize,
    order: Vec<ItemKey>,
    handles: HashMap<ItemKey, Box<dyn FocusHandle>>,
    active: Option<ItemKey>,

    /// Emitted when the active key changes, with the new value.
    pub active_changed: Signal<Option<ItemKey>>,
}

impl RovingFocusController {
    /// Create a controller for a topology, without boundary looping.
    pub fn new(topology: Topology) -> Self {
        let column_hint = match topology {
            Topology::Grid { columns } => columns.max(1),
            _ => 1,
        };
        Self {
            topology,
            loop_enabled: false,
            column_hint,
            order: Vec::new(),
            handles: HashMap::new(),
            active: None,
            active_changed: Signal::new(),
        }
    }

    /// Enable or disable boundary looping.
    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    /// The currently active key.
    pub fn active(&self) -> Option<&ItemKey> {
        self.active.as_ref()
    }

    /// The managed item order.
    pub fn items(&self) -> &[ItemKey] {
        &self.order
    }

    /// The current topology (grid column counts may have been re-derived
    /// from geometry since construction).
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether a key is reachable by sequential keyboard traversal.
    ///
    /// True only for the active item, or for the first item while nothing
    /// is active. The host renders every other item unreachable (tabindex
    /// -1 or the platform equivalent).
    pub fn is_tab_stop(&self, key: &ItemKey) -> bool {
        match &self.active {
            Some(active) => active == key,
            None => self.order.first() == Some(key),
        }
    }

    /// Register the focus handle for an item as it mounts.
    pub fn register(&mut self, key: ItemKey, handle: Box<dyn FocusHandle>) {
        self.handles.insert(key, handle);
    }

    /// Remove an item's handle as it unmounts. If the item was active, the
    /// active key clamps to its nearest surviving neighbor.
    pub fn unregister(&mut self, key: &ItemKey) {
        self.handles.remove(key);
        if let Some(index) = self.order.iter().position(|k| k == key) {
            self.order.remove(index);
            if self.active.as_ref() == Some(key) {
                self.clamp_active(index);
            }
        }
    }

    /// Replace the managed item order. Handles persist across reorders; a
    /// vanished active key clamps to the item now occupying its old index,
    /// falling back to the new last item.
    pub fn set_items(&mut self, items: Vec<ItemKey>) {
        let old_index = self
            .active
            .as_ref()
            .and_then(|active| self.order.iter().position(|k| k == active));
        self.order = items;

        if let Some(active) = &self.active {
            if !self.order.contains(active) {
                self.clamp_active(old_index.unwrap_or(0));
            }
        }
    }

    /// Move the active key (and real focus) to an item. Unknown keys are
    /// ignored.
    pub fn navigate_to(&mut self, key: &ItemKey) {
        if !self.order.contains(key) {
            return;
        }
        self.activate(Some(key.clone()));
    }

    /// Handle a key press. Returns `true` when the engine consumed it.
    pub fn handle_key(&mut self, key: Key, modifiers: KeyboardModifiers) -> bool {
        let Some(action) = action_for(key, modifiers) else {
            return false;
        };
        match action {
            KeyAction::Move(direction) => {
                let delegate = self.delegate();
                let next = delegate.resolve(&self.order, self.active.as_ref(), direction);
                match next {
                    Some(next) => {
                        self.activate(Some(next));
                        true
                    }
                    None => false,
                }
            }
            KeyAction::PageForward => self.page(PAGE_STEP as isize),
            KeyAction::PageBackward => self.page(-(PAGE_STEP as isize)),
            // Activation, dismissal and Tab belong to other controllers.
            _ => false,
        }
    }

    /// Re-derive grid columns after the rendered geometry changed shape.
    ///
    /// Samples the origins of a bounded prefix of registered handles (twice
    /// the current column count) and counts the items sharing the first
    /// row's vertical origin. Bounded cost; pathological layouts may
    /// misdetect, in which case the previous count is kept.
    pub fn notify_layout_changed(&mut self) {
        let Topology::Grid { .. } = self.topology else {
            return;
        };

        let sample_len = (self.column_hint * 2).min(self.order.len());
        let origins: Vec<Point> = self.order[..sample_len]
            .iter()
            .filter_map(|key| self.handles.get(key).map(|handle| handle.origin()))
            .collect();

        let Some(first) = origins.first() else {
            return;
        };
        let columns = origins
            .iter()
            .take_while(|origin| (origin.y - first.y).abs() < 0.5)
            .count();
        if columns > 0 {
            tracing::debug!(target: targets::NAVIGATION, columns, "grid columns re-derived");
            self.topology = Topology::Grid { columns };
            self.column_hint = columns;
        }
    }

    fn delegate(&self) -> NavigationDelegate {
        NavigationDelegate::new(self.topology).with_loop(self.loop_enabled)
    }

    /// Page movement: a fixed step in non-grid topologies, clamped to the
    /// collection bounds.
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

    fn clamp_active(&mut self, removed_index: usize) {
        let next = self
            .order
            .get(removed_index)
            .or_else(|| self.order.last())
            .cloned();
        self.activate(next);
    }

    fn activate(&mut self, key: Option<ItemKey>) {
        if self.active == key {
            return;
        }
        tracing::debug!(
            target: targets::NAVIGATION,
            active = key.as_ref().map(ItemKey::to_string),
            "roving focus moved"
        );
        self.active = key.clone();
        if let Some(handle) = key.as_ref().and_then(|k| self.handles.get(k)) {
            handle.focus();
        }
        self.active_changed.emit(key);
    }
}

impl std::fmt::Debug for RovingFocusController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RovingFocusController")
            .field("topology", &self.topology)
            .field("items", &self.order.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
