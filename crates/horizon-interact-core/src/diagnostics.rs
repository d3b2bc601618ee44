//! Development-time diagnostics with per-scope deduplication.
//!
//! Some misconfigurations are discovered repeatedly at interaction time — a
//! focus trap with no focusable descendants would otherwise warn on every
//! Tab press. Controllers report such conditions through an injected
//! [`DiagnosticsSink`], which records each (scope, code) pair once. The sink
//! is owned by the controller instance, so the dedup state lives and dies
//! with it rather than accumulating for the lifetime of the process.

use std::collections::HashSet;

use crate::logging::targets;

/// A sink for one-time development diagnostics.
///
/// `scope` identifies the reporting container instance (controllers allocate
/// a unique scope id at construction); `code` identifies the condition. A
/// given (scope, code) pair is reported at most once per sink.
pub trait DiagnosticsSink {
    /// Report a condition. Returns `true` if this is the first report of the
    /// (scope, code) pair, `false` if it was deduplicated.
    fn warn_once(&mut self, scope: u64, code: &'static str, message: &str) -> bool;
}

/// The default sink: forwards first reports to `tracing::warn!`.
#[derive(Debug, Default)]
pub struct TracingSink {
    seen: HashSet<(u64, &'static str)>,
}

impl TracingSink {
    /// Create a new sink with no recorded reports.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticsSink for TracingSink {
    fn warn_once(&mut self, scope: u64, code: &'static str, message: &str) -> bool {
        if !self.seen.insert((scope, code)) {
            return false;
        }
        tracing::warn!(target: targets::DIAGNOSTICS, scope, code, "{message}");
        true
    }
}
