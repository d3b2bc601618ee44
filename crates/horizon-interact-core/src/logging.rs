//! Logging facilities for Horizon Interact.
//!
//! The engine uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All engine logs carry one of the targets below, so a subsystem can be
//! filtered with a directive such as `horizon_interact::overlay=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_interact_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_interact_core::signal";
    /// Diagnostics sink target.
    pub const DIAGNOSTICS: &str = "horizon_interact_core::diagnostics";
    /// Role/attribute resolution target.
    pub const RESOLVER: &str = "horizon_interact::resolver";
    /// Selection state machine target.
    pub const SELECTION: &str = "horizon_interact::selection";
    /// Expansion state machine target.
    pub const EXPANSION: &str = "horizon_interact::expansion";
    /// Keyboard navigation target.
    pub const NAVIGATION: &str = "horizon_interact::navigation";
    /// Overlay lifecycle target.
    pub const OVERLAY: &str = "horizon_interact::overlay";
}

/// Span names used throughout Horizon Interact for tracing.
///
/// These constants match the span names the engine emits, for use when
/// matching spans in a subscriber.
pub mod span_names {
    /// Keyboard event resolution span.
    pub const KEY_RESOLVE: &str = "key_resolve";
    /// Overlay open/close transition span.
    pub const OVERLAY_TRANSITION: &str = "overlay_transition";
}
