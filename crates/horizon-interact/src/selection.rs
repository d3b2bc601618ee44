//! Selection state machine for collections.
//!
//! The [`SelectionController`] owns (or mirrors) the set of selected item
//! keys and applies the selection semantics of the collection's mode. Keys
//! are pure identity: the controller accepts keys it has never seen and
//! leaves validation to the host.
//!
//! Ownership is fixed at construction. An [`SelectionOwner::Internal`]
//! controller mutates its own set and announces the result through
//! [`selection_changed`](SelectionController::selection_changed). An
//! [`SelectionOwner::External`] controller never mutates: it computes the
//! set that would result and emits it through
//! [`change_requested`](SelectionController::change_requested); the host
//! decides, then mirrors its state back via
//! [`sync_selected`](SelectionController::sync_selected).

use std::collections::HashSet;

use horizon_interact_core::logging::targets;
use horizon_interact_core::Signal;

use crate::key::ItemKey;

/// Selection behavior of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Selection is disabled; every operation is a no-op.
    None,
    /// At most one item is selected at a time.
    #[default]
    Single,
    /// Any number of items may be selected.
    Multiple,
}

/// Who owns the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionOwner {
    /// The controller owns and mutates the set.
    #[default]
    Internal,
    /// The host owns the set; the controller only proposes changes.
    External,
}

/// The input gesture that caused a selection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCause {
    /// A pointer press or click.
    Pointer,
    /// A keyboard activation.
    Keyboard,
    /// A direct API call by the host.
    Programmatic,
}

/// A selection transition, emitted through both controller signals.
#[derive(Debug, Clone)]
pub struct SelectionChange {
    /// The selected set after the transition.
    pub selected: HashSet<ItemKey>,
    /// The item the operation was about, when there was one.
    pub subject: Option<ItemKey>,
    /// The gesture that caused the operation.
    pub cause: SelectionCause,
}

/// Selection state machine.
#[derive(Debug)]
pub struct SelectionController {
    mode: SelectionMode,
    owner: SelectionOwner,
    selected: HashSet<ItemKey>,

    /// Emitted after an internally owned set changed.
    pub selection_changed: Signal<SelectionChange>,
    /// Emitted when an externally owned controller proposes a new set.
    pub change_requested: Signal<SelectionChange>,
}

impl SelectionController {
    /// Create a controller that owns its selection set.
    pub fn new(mode: SelectionMode) -> Self {
        Self::with_owner(mode, SelectionOwner::Internal)
    }

    /// Create a controller with an explicit ownership policy.
    pub fn with_owner(mode: SelectionMode, owner: SelectionOwner) -> Self {
        Self {
            mode,
            owner,
            selected: HashSet::new(),
            selection_changed: Signal::new(),
            change_requested: Signal::new(),
        }
    }

    /// The selection mode fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The ownership policy fixed at construction.
    pub fn owner(&self) -> SelectionOwner {
        self.owner
    }

    /// The current (owned or mirrored) selected set.
    pub fn selected(&self) -> &HashSet<ItemKey> {
        &self.selected
    }

    /// Whether a key is in the current set.
    pub fn is_selected(&self, key: &ItemKey) -> bool {
        self.selected.contains(key)
    }

    /// Toggle one key.
    ///
    /// Single mode: toggling the selected key clears the selection, toggling
    /// any other key replaces it. Multiple mode: the key flips in and out of
    /// the set independently.
    pub fn toggle(&mut self, key: &ItemKey, cause: SelectionCause) {
        let next = match self.mode {
            SelectionMode::None => return,
            SelectionMode::Single => {
                if self.selected.contains(key) {
                    HashSet::new()
                } else {
                    HashSet::from([key.clone()])
                }
            }
            SelectionMode::Multiple => {
                let mut next = self.selected.clone();
                if !next.remove(key) {
                    next.insert(key.clone());
                }
                next
            }
        };
        self.apply(next, Some(key.clone()), cause);
    }

    /// Replace the selection with exactly the given keys, regardless of the
    /// current contents. Single mode keeps only the first key.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = ItemKey>, cause: SelectionCause) {
        let next: HashSet<ItemKey> = match self.mode {
            SelectionMode::None => return,
            SelectionMode::Single => keys.into_iter().take(1).collect(),
            SelectionMode::Multiple => keys.into_iter().collect(),
        };
        self.apply(next, None, cause);
    }

    /// Clear the selection.
    pub fn clear(&mut self, cause: SelectionCause) {
        if self.mode == SelectionMode::None {
            return;
        }
        self.apply(HashSet::new(), None, cause);
    }

    /// Select every given key. Only meaningful in Multiple mode; a no-op
    /// otherwise.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = ItemKey>, cause: SelectionCause) {
        if self.mode != SelectionMode::Multiple {
            tracing::debug!(
                target: targets::SELECTION,
                mode = ?self.mode,
                "select_all ignored outside Multiple mode"
            );
            return;
        }
        self.apply(keys.into_iter().collect(), None, cause);
    }

    /// Mirror the host's selection state into an externally owned
    /// controller. No signals are emitted; this is the host answering a
    /// `change_requested` (or initializing state), not a new transition.
    pub fn sync_selected(&mut self, keys: impl IntoIterator<Item = ItemKey>) {
        self.selected = keys.into_iter().collect();
    }

    fn apply(&mut self, next: HashSet<ItemKey>, subject: Option<ItemKey>, cause: SelectionCause) {
        if next == self.selected {
            return;
        }

        tracing::debug!(
            target: targets::SELECTION,
            count = next.len(),
            subject = subject.as_ref().map(ItemKey::to_string),
            ?cause,
            owner = ?self.owner,
            "selection transition"
        );

        match self.owner {
            SelectionOwner::Internal => {
                self.selected = next.clone();
                self.selection_changed.emit(SelectionChange {
                    selected: next,
                    subject,
                    cause,
                });
            }
            SelectionOwner::External => {
                self.change_requested.emit(SelectionChange {
                    selected: next,
                    subject,
                    cause,
                });
            }
        }
    }
}
