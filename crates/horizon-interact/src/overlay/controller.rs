//! Overlay lifecycle controller.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use horizon_interact_core::logging::targets;
use horizon_interact_core::{DiagnosticsSink, Signal, TracingSink};

use crate::error::Result;
use crate::navigation::FocusHandle;
use crate::overlay::placement::OverlayPlacement;

// ============================================================================
// Overlay Flags
// ============================================================================

/// Flags that control overlay behavior.
///
/// Flags can be combined using bitwise OR operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayFlags(u16);

impl OverlayFlags {
    /// No special flags.
    pub const NONE: OverlayFlags = OverlayFlags(0);

    /// Show a backdrop behind the overlay. A backdrop makes the overlay
    /// modal-like: focus is trapped, background scrolling locks and
    /// background content becomes inert while it is open.
    pub const BACKDROP: OverlayFlags = OverlayFlags(1 << 0);

    /// Close when the pointer goes down outside the overlay and its
    /// trigger (or directly on the backdrop, when there is one).
    pub const DISMISS_ON_OUTSIDE: OverlayFlags = OverlayFlags(1 << 1);

    /// Move focus to the overlay's first focusable control on open.
    pub const FOCUS_ON_OPEN: OverlayFlags = OverlayFlags(1 << 2);

    /// Default flags for a popover or menu.
    pub const DEFAULT: OverlayFlags =
        OverlayFlags(Self::DISMISS_ON_OUTSIDE.0 | Self::FOCUS_ON_OPEN.0);

    /// Default flags for a modal dialog.
    pub const MODAL_DEFAULT: OverlayFlags = OverlayFlags(Self::DEFAULT.0 | Self::BACKDROP.0);

    /// Check if a flag is set.
    pub fn has(&self, flag: OverlayFlags) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Check if a backdrop is shown.
    pub fn has_backdrop(&self) -> bool {
        self.has(Self::BACKDROP)
    }

    /// Check if outside pointer presses dismiss the overlay.
    pub fn dismisses_on_outside(&self) -> bool {
        self.has(Self::DISMISS_ON_OUTSIDE)
    }

    /// Check if focus moves into the overlay on open.
    pub fn focuses_on_open(&self) -> bool {
        self.has(Self::FOCUS_ON_OPEN)
    }
}

impl BitOr for OverlayFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        OverlayFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for OverlayFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OverlayFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        OverlayFlags(self.0 & rhs.0)
    }
}

// ============================================================================
// Host boundary
// ============================================================================

/// The host-side surface an [`OverlayController`] drives.
///
/// The engine never touches widgets directly; everything observable — which
/// controls inside the overlay can take focus, whether the page behind it
/// scrolls, whether background content is inert — goes through this trait.
pub trait OverlayHost {
    /// How many focusable controls the open overlay currently contains.
    fn focusable_count(&self) -> usize;

    /// Give real focus to the focusable control at `index` (in the same
    /// order `focusable_count` counts).
    fn focus_focusable(&mut self, index: usize);

    /// Lock background scrolling while a modal-like overlay is open.
    fn lock_scroll(&mut self) -> Result<()>;

    /// Release the scroll lock.
    fn unlock_scroll(&mut self);

    /// Make background content inert (or interactive again).
    fn set_background_inert(&mut self, inert: bool) -> Result<()>;
}

/// Where focus goes when the overlay closes.
pub enum FocusRestore {
    /// Back to the trigger that opened the overlay. The default.
    Trigger,
    /// Nowhere; the host handles it (or focus was never moved).
    None,
    /// To an explicit target.
    To(Box<dyn FocusHandle>),
}

impl std::fmt::Debug for FocusRestore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trigger => write!(f, "Trigger"),
            Self::None => write!(f, "None"),
            Self::To(_) => write!(f, "To(..)"),
        }
    }
}

/// Accessibility attributes of the element that opens an overlay.
///
/// The trigger advertises the overlay's state: expanded while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerAttributes {
    /// Whether the controlled overlay is open.
    pub expanded: bool,
}

impl TriggerAttributes {
    /// Apply these attributes to the trigger's accessible node.
    pub fn apply_to(&self, node: &mut accesskit::Node) {
        node.set_expanded(self.expanded);
    }
}

/// Where a pointer press landed, as classified by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerHit {
    /// Inside the overlay surface.
    Overlay,
    /// On the element that opened the overlay.
    Trigger,
    /// Directly on the backdrop.
    Backdrop,
    /// Anywhere else.
    Outside,
}

/// What the host should do with a Tab press routed to an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// Consume the press and focus the control at this index.
    FocusControl(usize),
    /// The overlay closed; let the press continue its normal traversal.
    CloseAndPass,
    /// Consume the press and do nothing (an empty focus trap).
    Suppress,
    /// The press is not the overlay's concern.
    Pass,
}

// ============================================================================
// Controller
// ============================================================================

/// Lifecycle state of an overlay. There are no intermediate states; an
/// overlay animating shut is still `Open` until the host commits the close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Not visible.
    #[default]
    Closed,
    /// Visible.
    Open,
}

/// Drives one overlay's lifecycle.
///
/// The controller is modal-like when it has a backdrop or uses the centered
/// placement. Only modal-like overlays trap focus, lock scrolling and inert
/// the background; those side effects are applied on open and fully
/// reverted on close, balanced even under overlapping open/close sequences.
///
/// # Signals
///
/// - `about_to_show`: emitted before the overlay becomes visible
/// - `about_to_hide`: emitted before the overlay is hidden
/// - `closed`: emitted after the overlay closed and focus was restored
pub struct OverlayController {
    host: Box<dyn OverlayHost>,
    flags: OverlayFlags,
    placement: OverlayPlacement,
    state: OverlayState,
    trigger: Option<Box<dyn FocusHandle>>,
    restore: FocusRestore,
    side_effects_applied: bool,
    sink: Box<dyn DiagnosticsSink>,
    scope: u64,

    /// Emitted before the overlay becomes visible.
    pub about_to_show: Signal<()>,
    /// Emitted before the overlay is hidden.
    pub about_to_hide: Signal<()>,
    /// Emitted after the overlay closed.
    pub closed: Signal<()>,
}

impl OverlayController {
    /// Create a popover-style controller with [`OverlayFlags::DEFAULT`] and
    /// placement below the anchor.
    pub fn new(host: Box<dyn OverlayHost>) -> Self {
        Self {
            host,
            flags: OverlayFlags::DEFAULT,
            placement: OverlayPlacement::BELOW_START,
            state: OverlayState::Closed,
            trigger: None,
            restore: FocusRestore::Trigger,
            side_effects_applied: false,
            sink: Box::new(TracingSink::default()),
            scope: 0,
            about_to_show: Signal::new(),
            about_to_hide: Signal::new(),
            closed: Signal::new(),
        }
    }

    /// Create a modal-dialog controller: centered, with a backdrop.
    pub fn modal(host: Box<dyn OverlayHost>) -> Self {
        Self::new(host)
            .with_flags(OverlayFlags::MODAL_DEFAULT)
            .with_placement(OverlayPlacement::Center)
    }

    /// Replace the behavior flags.
    pub fn with_flags(mut self, flags: OverlayFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the placement strategy.
    pub fn with_placement(mut self, placement: OverlayPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger handle focus restores to on close.
    pub fn with_trigger(mut self, trigger: Box<dyn FocusHandle>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Override where focus goes on close.
    pub fn with_focus_restore(mut self, restore: FocusRestore) -> Self {
        self.restore = restore;
        self
    }

    /// Replace the diagnostics sink.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set the diagnostic scope identifying this overlay in shared sinks.
    pub fn with_scope(mut self, scope: u64) -> Self {
        self.scope = scope;
        self
    }

    /// The current lifecycle state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// The behavior flags.
    pub fn flags(&self) -> OverlayFlags {
        self.flags
    }

    /// The placement strategy.
    pub fn placement(&self) -> OverlayPlacement {
        self.placement
    }

    /// Whether the overlay behaves modally: it has a backdrop, or it uses
    /// the centered dialog placement.
    pub fn is_modal_like(&self) -> bool {
        self.flags.has_backdrop() || self.placement.is_center()
    }

    /// The attributes the trigger element should currently publish.
    pub fn trigger_attributes(&self) -> TriggerAttributes {
        TriggerAttributes {
            expanded: self.is_open(),
        }
    }

    /// Open the overlay.
    ///
    /// For a modal-like overlay this locks background scrolling and inerts
    /// background content; if either application fails, everything applied
    /// so far is reverted and the overlay stays closed.
    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }
        let _span = tracing::debug_span!("overlay_transition", to = "open").entered();

        self.about_to_show.emit(());

        if self.is_modal_like() {
            self.host.lock_scroll()?;
            if let Err(err) = self.host.set_background_inert(true) {
                self.host.unlock_scroll();
                return Err(err);
            }
            self.side_effects_applied = true;
        }

        self.state = OverlayState::Open;
        tracing::debug!(target: targets::OVERLAY, modal_like = self.is_modal_like(), "overlay opened");

        if self.flags.focuses_on_open() && self.host.focusable_count() > 0 {
            self.host.focus_focusable(0);
        }
        Ok(())
    }

    /// Close the overlay and restore focus.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        let _span = tracing::debug_span!("overlay_transition", to = "closed").entered();

        self.about_to_hide.emit(());

        if self.side_effects_applied {
            self.host.unlock_scroll();
            if let Err(err) = self.host.set_background_inert(false) {
                // Nothing to unwind at this point; record and move on.
                tracing::warn!(target: targets::OVERLAY, error = %err, "failed to revert inert background");
            }
            self.side_effects_applied = false;
        }

        self.state = OverlayState::Closed;

        match &self.restore {
            FocusRestore::Trigger => {
                if let Some(trigger) = &self.trigger {
                    trigger.focus();
                }
            }
            FocusRestore::None => {}
            FocusRestore::To(handle) => handle.focus(),
        }

        tracing::debug!(target: targets::OVERLAY, "overlay closed");
        self.closed.emit(());
    }

    /// Toggle between open and closed.
    pub fn toggle(&mut self) -> Result<()> {
        if self.is_open() {
            self.close();
            Ok(())
        } else {
            self.open()
        }
    }

    /// Handle an Escape press. While open, Escape is always consumed and
    /// always closes, regardless of flags.
    pub fn handle_escape(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    /// Handle a pointer press, pre-classified by the host's hit testing.
    /// Returns `true` when the press dismissed the overlay.
    ///
    /// Presses on the overlay or its trigger never dismiss (the trigger's
    /// own click handler toggles instead, avoiding a dismiss-then-reopen
    /// race). With a backdrop, only a direct backdrop hit counts as
    /// outside; without one, anything beyond overlay and trigger does.
    pub fn handle_pointer(&mut self, hit: PointerHit) -> bool {
        if !self.is_open() || !self.flags.dismisses_on_outside() {
            return false;
        }
        let dismiss = if self.flags.has_backdrop() {
            hit == PointerHit::Backdrop
        } else {
            matches!(hit, PointerHit::Outside | PointerHit::Backdrop)
        };
        if dismiss {
            self.close();
        }
        dismiss
    }

    /// Handle a Tab (or Shift+Tab) press routed to the overlay.
    ///
    /// Modal-like overlays trap focus: traversal wraps within the host's
    /// focusable list, and an overlay with nothing focusable suppresses the
    /// press entirely (reported once per overlay through the diagnostics
    /// sink). Non-modal overlays close and let focus continue on its way.
    ///
    /// `current` is the index of the currently focused control within the
    /// overlay, or `None` when focus is on the overlay surface itself.
    pub fn handle_tab(&mut self, backward: bool, current: Option<usize>) -> TabOutcome {
        if !self.is_open() {
            return TabOutcome::Pass;
        }

        if !self.is_modal_like() {
            self.close();
            return TabOutcome::CloseAndPass;
        }

        let count = self.host.focusable_count();
        if count == 0 {
            self.sink.warn_once(
                self.scope,
                "empty-focus-trap",
                "focus trap active but the overlay has no focusable controls",
            );
            return TabOutcome::Suppress;
        }

        let next = match (current, backward) {
            (None, false) => 0,
            (None, true) => count - 1,
            (Some(index), false) => {
                if index + 1 >= count {
                    0
                } else {
                    index + 1
                }
            }
            (Some(index), true) => {
                if index == 0 {
                    count - 1
                } else {
                    index - 1
                }
            }
        };
        self.host.focus_focusable(next);
        TabOutcome::FocusControl(next)
    }
}

impl std::fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("state", &self.state)
            .field("flags", &self.flags)
            .field("placement", &self.placement)
            .field("restore", &self.restore)
            .finish_non_exhaustive()
    }
}
