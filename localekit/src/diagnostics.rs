//! Diagnostic seam between the registry and the host application.

/// Trait for abstracting warning-level diagnostics
/// Platform-specific implementations should provide this
pub trait DiagnosticSink {
    /// Report a non-fatal condition worth surfacing to the host.
    fn warn(&self, message: &str);
}

/// Default sink that forwards to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
