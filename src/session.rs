//! Editing session that keeps the last model that parsed cleanly.
//!
//! An editor re-parses on every keystroke. When strict parsing rejects the
//! new text, the previous circuit and layout stay on screen and the error is
//! kept for display.

use log::{info, warn};

use crate::circuit::{Circuit, Component};
use crate::error::Result;
use crate::layout::{layout, Layout, LayoutConfig};
use crate::netlist::{parse_with, Diagnostic, ParseOptions, ParsedNetlist};

/// A parsed netlist and its schematic.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub parsed: ParsedNetlist,
    pub layout: Layout,
}

#[derive(Debug, Default)]
pub struct Session {
    options: ParseOptions,
    layout_config: LayoutConfig,
    snapshot: Option<Snapshot>,
    last_error: Option<String>,
}

impl Session {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Use custom layout dimensions.
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse new netlist text.
    ///
    /// On success the snapshot is replaced. On failure the previous snapshot
    /// is kept, the error message is remembered and the error is returned.
    pub fn update(&mut self, text: &str) -> Result<&Snapshot> {
        match parse_with(text, self.options) {
            Ok(parsed) => {
                let layout = layout(&parsed.circuit, &self.layout_config);
                info!(
                    "session updated: {} components, {} diagnostics",
                    parsed.circuit.components.len(),
                    parsed.diagnostics.len()
                );
                self.last_error = None;
                Ok(&*self.snapshot.insert(Snapshot { parsed, layout }))
            }
            Err(err) => {
                warn!("keeping previous model: {}", err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-run parsing of `text` with different options.
    pub fn reconfigure(&mut self, options: ParseOptions, text: &str) -> Result<&Snapshot> {
        self.options = options;
        self.update(text)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn circuit(&self) -> Option<&Circuit> {
        self.snapshot.as_ref().map(|s| &s.parsed.circuit)
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.snapshot.as_ref().map(|s| &s.layout)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.snapshot
            .as_ref()
            .map_or(&[], |s| s.parsed.diagnostics.as_slice())
    }

    /// Look up a component of the current model.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.circuit()?.component(id)
    }

    /// Message of the most recent failed update, cleared by a good one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpiceGridError;

    const GOOD: &str = "X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL\nVwl1 wl1 0 0";
    const BAD: &str = "X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL\nL1 a b 1u";

    #[test]
    fn test_update_replaces_snapshot() {
        let mut session = Session::new(ParseOptions::default());
        assert!(session.circuit().is_none());
        assert!(session.diagnostics().is_empty());

        let snapshot = session.update(GOOD).unwrap();
        assert_eq!(snapshot.parsed.circuit.components.len(), 2);
        assert_eq!(snapshot.layout.primitives.len(), 3);
        assert!(session.component("Vwl1").is_some());
    }

    #[test]
    fn test_lenient_session_accepts_warnings() {
        let mut session = Session::new(ParseOptions::default());
        session.update(BAD).unwrap();
        assert_eq!(session.diagnostics().len(), 1);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_strict_failure_keeps_last_good() {
        let mut session = Session::new(ParseOptions::new().with_strict(true));
        session.update(GOOD).unwrap();
        let before = session.snapshot().cloned();

        let err = session.update(BAD).unwrap_err();
        assert!(matches!(err, SpiceGridError::Rejected { line: 2, .. }));
        assert_eq!(session.snapshot().cloned(), before);
        assert!(session.last_error().is_some());

        session.update(GOOD).unwrap();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_reconfigure() {
        let mut session = Session::new(ParseOptions::default());
        session.update(BAD).unwrap();
        assert!(session
            .reconfigure(ParseOptions::new().with_strict(true), BAD)
            .is_err());
        assert!(session.options().strict);
        assert_eq!(session.circuit().map(|c| c.components.len()), Some(1));
    }
}
