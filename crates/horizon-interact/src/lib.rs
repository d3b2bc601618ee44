//! Horizon Interact — an accessible collection interaction engine.
//!
//! This crate implements the interaction layer of accessible composite
//! widgets (menus, listboxes, trees, tab lists, grids, accordions, popups
//! and dialogs) without rendering anything. It computes three things and
//! only three things:
//!
//! 1. **Accessible-tree attributes** — roles, selection/expansion markers,
//!    levels and active-descendant references, resolved from declarative
//!    [`Pattern`](pattern::Pattern) configuration and emitted through
//!    [AccessKit](https://accesskit.dev/).
//! 2. **State transitions** — selection, expansion, roving focus, virtual
//!    focus and overlay lifecycle, each a small synchronous state machine
//!    that notifies observers through signals.
//! 3. **Keyboard targets** — the next item for a directional key, for
//!    linear, horizontal and 2D-grid topologies.
//!
//! The host UI framework owns rendering, layout and real platform focus; it
//! reaches the engine through attribute getters and imperative methods, and
//! the engine reaches back through the [`FocusHandle`](navigation::FocusHandle)
//! and [`OverlayHost`](overlay::OverlayHost) traits.
//!
//! # Example
//!
//! ```
//! use horizon_interact::prelude::*;
//!
//! let mut selection = SelectionController::new(SelectionMode::Single);
//! selection.toggle(&ItemKey::from("save"), SelectionCause::Pointer);
//! assert!(selection.is_selected(&ItemKey::from("save")));
//!
//! // Toggling the sole selected option clears the selection.
//! selection.toggle(&ItemKey::from("save"), SelectionCause::Pointer);
//! assert!(!selection.is_selected(&ItemKey::from("save")));
//! ```

pub mod error;
pub mod expansion;
pub mod geometry;
pub mod item;
pub mod key;
pub mod keyboard;
pub mod navigation;
pub mod overlay;
pub mod pattern;
pub mod prelude;
pub mod resolver;
pub mod role;
pub mod selection;

pub use error::{Error, Result};
pub use key::ItemKey;
