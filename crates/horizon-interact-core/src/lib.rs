//! Core systems for Horizon Interact.
//!
//! This crate provides the foundation shared by the interaction engine:
//!
//! - [`Signal`] — a type-safe signal/slot mechanism for change notification.
//!   State machines (selection, expansion, navigation, overlays) emit signals
//!   when they transition; consuming UI connects slots to re-render.
//! - [`DiagnosticsSink`] — an injected sink for development-time warnings with
//!   per-scope deduplication, so a misconfigured container warns once rather
//!   than once per keystroke.
//! - [`logging`] — `tracing` target constants for filtering engine logs by
//!   subsystem.
//!
//! Everything here is synchronous: the interaction engine runs entirely inside
//! discrete input-event handlers on the UI thread, so signals invoke their
//! slots directly at the emit site.

pub mod diagnostics;
pub mod logging;
pub mod signal;

pub use diagnostics::{DiagnosticsSink, TracingSink};
pub use signal::{ConnectionId, Signal};
