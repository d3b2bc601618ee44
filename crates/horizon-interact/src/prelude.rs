//! Convenient re-exports of the engine's commonly used types.
//!
//! ```
//! use horizon_interact::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::expansion::{ExpansionChange, ExpansionController};
pub use crate::geometry::{Point, Rect, Size};
pub use crate::item::Item;
pub use crate::key::ItemKey;
pub use crate::keyboard::{action_for, Key, KeyAction, KeyboardModifiers};
pub use crate::navigation::{
    ActiveDescendantController, Direction, FocusHandle, NavigationDelegate,
    RovingFocusController, Topology, PAGE_STEP,
};
pub use crate::overlay::{
    Alignment, FocusRestore, OverlayController, OverlayFlags, OverlayHost, OverlayPlacement,
    OverlayState, PointerHit, Side, TabOutcome, TriggerAttributes,
};
pub use crate::pattern::{Pattern, PatternConfig, SelectionAttribute};
pub use crate::resolver::{
    CollectionAttributes, CollectionConfig, ItemAttributes, ItemConfig, RoleResolver,
};
pub use crate::role::{CollectionRole, ItemRole, Orientation};
pub use crate::selection::{
    SelectionCause, SelectionChange, SelectionController, SelectionMode, SelectionOwner,
};

pub use horizon_interact_core::{ConnectionId, DiagnosticsSink, Signal, TracingSink};
