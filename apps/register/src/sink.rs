//! Diagnostic sink that writes rejected scans to the log.

use checkout_core::{Diagnostic, DiagnosticSink};
use tracing::warn;

/// Logs every diagnostic at WARN and keeps a count.
#[derive(Debug, Default)]
pub struct TracingSink {
    emitted: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics logged so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emitted += 1;
        warn!(
            sku = %diagnostic.sku(),
            code = diagnostic.code(),
            "{}",
            diagnostic
        );
    }
}
