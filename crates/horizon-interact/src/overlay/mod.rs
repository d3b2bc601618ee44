//! Overlay lifecycle: popovers, menus, dialogs.
//!
//! An overlay is a floating surface anchored to (or centered over) the rest
//! of the UI: a menu, a combobox listing, a tooltip-like popover, a modal
//! dialog. The engine owns the lifecycle — open/close transitions, focus
//! trapping, dismissal classification, scroll locking, background inerting
//! and focus restoration — and delegates the actual surface manipulation to
//! the host through the [`OverlayHost`] trait. Placement math lives in
//! [`OverlayPlacement`], a pure computation over anchor geometry.

pub mod controller;
pub mod placement;

pub use controller::{
    FocusRestore, OverlayController, OverlayFlags, OverlayHost, OverlayState, PointerHit,
    TabOutcome, TriggerAttributes,
};
pub use placement::{Alignment, OverlayPlacement, Side};
