//! Expansion state machine for trees, accordions and disclosure groups.
//!
//! The [`ExpansionController`] tracks which item keys are expanded. Two
//! policies are fixed at construction: whether several items may be open at
//! once, and whether the last open item may be closed by a user toggle.
//! Accordions typically run with `allow_multiple = false` so that opening a
//! section closes its siblings.

use std::collections::HashSet;

use horizon_interact_core::logging::targets;
use horizon_interact_core::Signal;

use crate::key::ItemKey;

/// An expansion transition, emitted through [`ExpansionController::changed`].
#[derive(Debug, Clone)]
pub struct ExpansionChange {
    /// The expanded set after the transition.
    pub expanded: HashSet<ItemKey>,
    /// The item the operation was about, when there was one.
    pub subject: Option<ItemKey>,
}

/// Expansion state machine.
#[derive(Debug)]
pub struct ExpansionController {
    allow_multiple: bool,
    collapsible: bool,
    expanded: HashSet<ItemKey>,

    /// Emitted once per transition with the full resulting set.
    pub changed: Signal<ExpansionChange>,
    /// Emitted for each item that became expanded.
    pub item_expanded: Signal<ItemKey>,
    /// Emitted for each item that became collapsed.
    pub item_collapsed: Signal<ItemKey>,
}

impl ExpansionController {
    /// Create a controller allowing one expanded item, collapsible.
    pub fn new() -> Self {
        Self {
            allow_multiple: false,
            collapsible: true,
            expanded: HashSet::new(),
            changed: Signal::new(),
            item_expanded: Signal::new(),
            item_collapsed: Signal::new(),
        }
    }

    /// Allow several items to be expanded at once.
    pub fn with_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    /// Control whether the last expanded item may be collapsed by a user
    /// toggle. `expand_all`/`collapse_all` bypass this guard.
    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Whether several items may be expanded at once.
    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// The current expanded set.
    pub fn expanded(&self) -> &HashSet<ItemKey> {
        &self.expanded
    }

    /// Whether a key is expanded.
    pub fn is_expanded(&self, key: &ItemKey) -> bool {
        self.expanded.contains(key)
    }

    /// Toggle one key: expand it if collapsed, collapse it if expanded.
    pub fn toggle(&mut self, key: &ItemKey) {
        if self.expanded.contains(key) {
            self.collapse(key);
        } else {
            self.expand(key);
        }
    }

    /// Expand a key. With `allow_multiple = false` every other expanded item
    /// collapses in the same transition.
    pub fn expand(&mut self, key: &ItemKey) {
        if self.expanded.contains(key) {
            return;
        }

        let collapsed: Vec<ItemKey> = if self.allow_multiple {
            Vec::new()
        } else {
            self.expanded.drain().collect()
        };
        self.expanded.insert(key.clone());

        tracing::debug!(
            target: targets::EXPANSION,
            key = %key,
            displaced = collapsed.len(),
            "expanded"
        );

        for old in collapsed {
            self.item_collapsed.emit(old);
        }
        self.item_expanded.emit(key.clone());
        self.emit_changed(Some(key.clone()));
    }

    /// Collapse a key. A no-op when the key is the sole expanded item and
    /// the controller is non-collapsible.
    pub fn collapse(&mut self, key: &ItemKey) {
        if !self.expanded.contains(key) {
            return;
        }
        if !self.collapsible && self.expanded.len() == 1 {
            tracing::debug!(
                target: targets::EXPANSION,
                key = %key,
                "collapse of sole expanded item blocked"
            );
            return;
        }

        self.expanded.remove(key);
        self.item_collapsed.emit(key.clone());
        self.emit_changed(Some(key.clone()));
    }

    /// Expand every given key, bypassing the collapsible guard. A no-op
    /// unless the controller allows multiple expanded items.
    pub fn expand_all(&mut self, keys: impl IntoIterator<Item = ItemKey>) {
        if !self.allow_multiple {
            tracing::debug!(
                target: targets::EXPANSION,
                "expand_all ignored on a single-expansion controller"
            );
            return;
        }

        let mut any = false;
        for key in keys {
            if self.expanded.insert(key.clone()) {
                self.item_expanded.emit(key);
                any = true;
            }
        }
        if any {
            self.emit_changed(None);
        }
    }

    /// Collapse everything, bypassing the collapsible guard.
    pub fn collapse_all(&mut self) {
        if self.expanded.is_empty() {
            return;
        }
        for key in self.expanded.drain().collect::<Vec<_>>() {
            self.item_collapsed.emit(key);
        }
        self.emit_changed(None);
    }

    fn emit_changed(&self, subject: Option<ItemKey>) {
        self.changed.emit(ExpansionChange {
            expanded: self.expanded.clone(),
            subject,
        });
    }
}

impl Default for ExpansionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn key(text: &str) -> ItemKey {
        ItemKey::from(text)
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut expansion = ExpansionController::new();

        expansion.toggle(&key("a"));
        assert!(expansion.is_expanded(&key("a")));

        expansion.toggle(&key("a"));
        assert!(!expansion.is_expanded(&key("a")));
    }

    #[test]
    fn test_single_expansion_displaces_siblings() {
        let mut expansion = ExpansionController::new();

        expansion.expand(&key("a"));
        expansion.expand(&key("b"));

        assert!(!expansion.is_expanded(&key("a")));
        assert!(expansion.is_expanded(&key("b")));
        assert_eq!(expansion.expanded().len(), 1);
    }

    #[test]
    fn test_multiple_expansion_accumulates() {
        let mut expansion = ExpansionController::new().with_multiple(true);

        expansion.expand(&key("a"));
        expansion.expand(&key("b"));
        assert_eq!(expansion.expanded().len(), 2);
    }

    #[test]
    fn test_non_collapsible_guards_sole_item() {
        let mut expansion = ExpansionController::new().with_collapsible(false);

        expansion.expand(&key("a"));
        expansion.toggle(&key("a"));
        assert!(expansion.is_expanded(&key("a")));

        // Expanding another item still displaces the first.
        expansion.expand(&key("b"));
        assert!(expansion.is_expanded(&key("b")));
        assert!(!expansion.is_expanded(&key("a")));
    }

    #[test]
    fn test_collapse_all_bypasses_guard() {
        let mut expansion = ExpansionController::new().with_collapsible(false);
        expansion.expand(&key("a"));

        expansion.collapse_all();
        assert!(expansion.expanded().is_empty());
    }

    #[test]
    fn test_item_signals() {
        let mut expansion = ExpansionController::new();

        let expanded_count = Arc::new(AtomicUsize::new(0));
        let collapsed_count = Arc::new(AtomicUsize::new(0));
        let expanded_clone = expanded_count.clone();
        let collapsed_clone = collapsed_count.clone();
        expansion.item_expanded.connect(move |_| {
            expanded_clone.fetch_add(1, Ordering::SeqCst);
        });
        expansion.item_collapsed.connect(move |_| {
            collapsed_clone.fetch_add(1, Ordering::SeqCst);
        });

        expansion.expand(&key("a"));
        // Displacing "a" collapses it and expands "b".
        expansion.expand(&key("b"));

        assert_eq!(expanded_count.load(Ordering::SeqCst), 2);
        assert_eq!(collapsed_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_expand_all_requires_multiple() {
        let mut single = ExpansionController::new();
        single.expand_all([key("a"), key("b")]);
        assert!(single.expanded().is_empty());

        let mut multiple = ExpansionController::new().with_multiple(true);
        multiple.expand_all([key("a"), key("b")]);
        assert_eq!(multiple.expanded().len(), 2);
    }
}
