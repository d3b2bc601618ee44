//! Keyboard navigation.
//!
//! Three layers, composed bottom-up:
//!
//! - [`NavigationDelegate`] — a pure direction-to-item resolver for linear,
//!   horizontal and 2D-grid topologies.
//! - [`RovingFocusController`] — moves real input focus between registered
//!   items, maintaining the invariant that exactly one item is reachable by
//!   sequential keyboard traversal.
//! - [`ActiveDescendantController`] — the virtual-focus variant: real focus
//!   stays on a controlling element while the active item is published as an
//!   active-descendant reference for assistive technology.

pub mod active_descendant;
pub mod delegate;
pub mod roving;

pub use active_descendant::ActiveDescendantController;
pub use delegate::{Direction, NavigationDelegate, Topology};
pub use roving::{FocusHandle, RovingFocusController, PAGE_STEP};
