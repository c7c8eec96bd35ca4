//! # Diagnostics
//!
//! Recoverable problems found while generating a mesh. Geometry routines
//! report into a [`DiagnosticSink`] instead of writing to a process-wide
//! stream, so callers decide whether to collect, log or ignore them.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The output was written but is malformed at this point.
    Error,
    /// The output is well-formed but geometrically suspect.
    Warning,
}

/// A diagnostic message with severity and optional facet location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Zero-based index of the facet in the serialized stream.
    pub facet: Option<usize>,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            facet: None,
            hint: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_facet(mut self, facet: usize) -> Self {
        self.facet = Some(facet);
        self
    }
}

/// Receiver for diagnostics raised deep inside geometric routines.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Accumulated list of diagnostics.
///
/// Every reported entry is also forwarded to the `log` facade.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{normalize, Diagnostics};
/// use glam::DVec3;
///
/// let mut diagnostics = Diagnostics::new();
/// let n = normalize(DVec3::ZERO, &mut diagnostics);
/// assert_eq!(n, DVec3::ZERO);
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of entries with [`Severity::Warning`].
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of entries with [`Severity::Error`].
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Returns a sink that tags every report with `facet`.
    pub fn for_facet(&mut self, facet: usize) -> FacetScope<'_> {
        FacetScope {
            facet,
            inner: self,
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        let location = diagnostic
            .facet
            .map(|facet| format!(" (facet {facet})"))
            .unwrap_or_default();
        match diagnostic.severity {
            Severity::Error => log::error!("{}{}", diagnostic.message, location),
            Severity::Warning => log::warn!("{}{}", diagnostic.message, location),
        }
        self.entries.push(diagnostic);
    }
}

/// Sink that attaches a facet index before forwarding.
pub struct FacetScope<'a> {
    facet: usize,
    inner: &'a mut Diagnostics,
}

impl DiagnosticSink for FacetScope<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.inner.report(diagnostic.with_facet(self.facet));
    }
}
