//! Diagnostics for lines the parser skipped or only partly understood.

use std::fmt;

use serde::Serialize;

/// How much a diagnostic matters to a reader of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected for real-world netlists (control cards, unplaced parts).
    Info,
    /// Information from the netlist was lost or replaced by a default.
    Warning,
}

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Element letter with no decoder
    UnsupportedElement { prefix: char },
    /// `G` behavioral/controlled source
    BehavioralSource { id: String },
    /// Dot card other than `.PARAM`
    IgnoredControlCard { card: String },
    /// `.PARAM` whose right-hand side is not a constant
    UnresolvedParam { name: String, expression: String },
    /// Fewer tokens than the element needs
    MissingTokens {
        id: String,
        expected: usize,
        found: usize,
    },
    /// Model name or value token absent; the element is kept without it
    MissingValue { id: String, field: String },
    /// Instance name has another element's id
    DuplicateComponent { id: String },
    /// Array cell whose name is not `X<row>_<col>` with 1-based indices
    UnplacedCell { id: String },
    /// `Rint_bl`/`Rint_sl` segment whose far end lies outside the index range
    UnplacedResistor { id: String },
    /// `Vsl` driver whose first node is not `sl<row><col>`
    UnplacedSource { id: String, node: String },
    /// Value token that is not a number; zero was used
    UnparsedValue { id: String, token: String },
    /// PWL list cut short at a token that is neither a number nor a constant parameter
    WaveformTruncated {
        id: String,
        token: String,
        kept: usize,
    },
    /// Odd number of PWL tokens
    DanglingWaveformToken { id: String, token: String },
    /// Capacitor with both terminals on ground
    GroundedCapacitor { id: String },
}

impl DiagnosticKind {
    /// Default severity for this kind of problem.
    pub fn severity(&self) -> Severity {
        match self {
            Self::IgnoredControlCard { .. }
            | Self::BehavioralSource { .. }
            | Self::UnplacedCell { .. }
            | Self::UnplacedResistor { .. }
            | Self::UnplacedSource { .. }
            | Self::GroundedCapacitor { .. } => Severity::Info,
            Self::UnsupportedElement { .. }
            | Self::UnresolvedParam { .. }
            | Self::MissingTokens { .. }
            | Self::MissingValue { .. }
            | Self::DuplicateComponent { .. }
            | Self::UnparsedValue { .. }
            | Self::WaveformTruncated { .. }
            | Self::DanglingWaveformToken { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedElement { prefix } => {
                write!(f, "unsupported element type '{}'", prefix)
            }
            Self::BehavioralSource { id } => {
                write!(f, "behavioral source '{}' is not drawn", id)
            }
            Self::IgnoredControlCard { card } => write!(f, "control card '{}' ignored", card),
            Self::UnresolvedParam { name, expression } => {
                write!(f, "parameter '{}' = '{}' is not a constant", name, expression)
            }
            Self::MissingTokens {
                id,
                expected,
                found,
            } => write!(
                f,
                "'{}' needs {} tokens after the name, found {}",
                id, expected, found
            ),
            Self::MissingValue { id, field } => {
                write!(f, "'{}' has no {}", id, field)
            }
            Self::DuplicateComponent { id } => {
                write!(f, "duplicate instance '{}' ignored", id)
            }
            Self::UnplacedCell { id } => {
                write!(f, "cell '{}' has no X<row>_<col> position", id)
            }
            Self::UnplacedResistor { id } => {
                write!(f, "line resistor '{}' has no neighbouring cell", id)
            }
            Self::UnplacedSource { id, node } => write!(
                f,
                "source-line driver '{}' node '{}' does not name a cell",
                id, node
            ),
            Self::UnparsedValue { id, token } => {
                write!(f, "'{}' value '{}' is not a number, using 0", id, token)
            }
            Self::WaveformTruncated { id, token, kept } => write!(
                f,
                "'{}' PWL stops at '{}' after {} point(s)",
                id, token, kept
            ),
            Self::DanglingWaveformToken { id, token } => {
                write!(f, "'{}' PWL has unpaired trailing token '{}'", id, token)
            }
            Self::GroundedCapacitor { id } => {
                write!(f, "capacitor '{}' has both terminals on ground", id)
            }
        }
    }
}

/// A diagnostic tied to a 1-based source line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line,
            severity: kind.severity(),
            kind,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        write!(f, "line {}: {}: {}", self.line, level, self.kind)
    }
}
