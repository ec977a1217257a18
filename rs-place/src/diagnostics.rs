use std::fmt;
use std::sync::Mutex;

use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found while placing a schematic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub schematic: String,
    pub region: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(schematic: &str, region: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            schematic: schematic.to_string(),
            region: region.to_string(),
            message: message.into(),
        }
    }

    pub fn error(schematic: &str, region: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(schematic, region, message)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.schematic, self.region, self.message)
    }
}

/// Receives placement diagnostics. Implementations must not panic.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let Diagnostic {
            severity,
            schematic,
            region,
            message,
        } = diagnostic;
        match severity {
            Severity::Warning => warn!(%schematic, %region, "{message}"),
            Severity::Error => error!(%schematic, %region, "{message}"),
        }
    }
}

/// Keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(list) => list.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.diagnostics.lock() {
            Ok(mut list) => list.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
