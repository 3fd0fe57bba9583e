//! Core types for the parsed crossbar model.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::netlist::{try_parse_value, MSuffix, ValueContext};

/// Index of a node in the registry, in first-reference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// An electrical node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    /// Total parasitic capacitance to ground in farads
    pub capacitance: f64,
    pub is_ground: bool,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_ground = is_ground_name(&name);
        Self {
            name,
            capacitance: 0.0,
            is_ground,
        }
    }
}

/// `0` or any casing of `gnd`.
pub fn is_ground_name(name: &str) -> bool {
    name == "0" || name.eq_ignore_ascii_case("gnd")
}

/// 1-based cell coordinate in the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl GridPosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Cell directly below, if the row index has room.
    pub fn below(self) -> Option<Self> {
        Some(Self::new(self.row.checked_add(1)?, self.col))
    }

    /// Cell directly to the right, if the column index has room.
    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_add(1)?))
    }
}

/// The three tracks addressing each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Vertical, one per column
    BitLine,
    /// Horizontal, one per row, near the top of the cell
    WordLine,
    /// Horizontal, one per row, near the bottom of the cell
    SourceLine,
}

impl Track {
    /// Canvas color conventionally used for the track.
    pub fn color(self) -> &'static str {
        match self {
            Track::BitLine => "#3b82f6",
            Track::WordLine => "#ef4444",
            Track::SourceLine => "#10b981",
        }
    }
}

/// Element family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    /// Per-cell subcircuit instance (`X`)
    ArrayCell,
    /// Resistor (`R`)
    Resistor,
    /// Capacitor between two non-ground nodes (`C`)
    Capacitor,
    /// Voltage source (`V`)
    VoltageSource,
}

impl ComponentKind {
    /// Number of connection nodes the element takes.
    pub fn expected_node_count(&self) -> usize {
        match self {
            Self::ArrayCell => 4, // bit-line, word-line, source-line, midpoint
            Self::Resistor | Self::Capacitor | Self::VoltageSource => 2,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrayCell => "array cell",
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::VoltageSource => "voltage source",
        };
        f.write_str(name)
    }
}

/// Where an element sits in the schematic, decided once when it is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ComponentRole {
    /// Not drawn
    Unplaced,
    /// Array cell at a grid position
    Cell { position: GridPosition },
    /// Bit-line segment from `from` to the cell below
    BitLineResistor { from: GridPosition },
    /// Source-line segment from `from` to the cell on the right
    SourceLineResistor { from: GridPosition },
    /// Driver above column `col`
    BitLineDriver { col: u32 },
    /// Driver left of row `row`
    WordLineDriver { row: u32 },
    /// Driver below the cell whose source-line it feeds
    SourceLineDriver { cell: GridPosition },
}

impl ComponentRole {
    /// The two cells a line resistor joins.
    pub fn endpoints(&self) -> Option<(GridPosition, GridPosition)> {
        match *self {
            Self::BitLineResistor { from } => Some((from, from.below()?)),
            Self::SourceLineResistor { from } => Some((from, from.right()?)),
            _ => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        !matches!(self, Self::Unplaced)
    }
}

/// A single PWL breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveformPoint {
    /// Seconds
    pub time: f64,
    /// Volts
    pub voltage: f64,
}

/// One element instance from the netlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Instance name as written (`X1_1`, `Rint_bl_1_1`, ...)
    pub id: String,
    pub kind: ComponentKind,
    /// Connected node names, in netlist order
    pub nodes: Vec<String>,
    /// Raw parameter strings (`value`, `model`, `type`, `key=value` pairs)
    pub params: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waveform: Option<Vec<WaveformPoint>>,
    #[serde(flatten)]
    pub role: ComponentRole,
    /// 1-based source line
    pub line: usize,
    pub raw_line: String,
}

impl Component {
    /// Grid position of an array cell.
    pub fn grid_position(&self) -> Option<GridPosition> {
        match self.role {
            ComponentRole::Cell { position } => Some(position),
            _ => None,
        }
    }

    /// Look up a parameter, ignoring the case of its name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// PWL breakpoints of a waveform-typed voltage source.
    pub fn waveform(&self) -> Option<&[WaveformPoint]> {
        self.waveform.as_deref()
    }

    /// Resistance in ohms: a resistor's value, or a cell's `Res` parameter.
    pub fn resistance(&self, policy: MSuffix) -> Option<f64> {
        let raw = match self.kind {
            ComponentKind::Resistor => self.param("value"),
            ComponentKind::ArrayCell => self.param("res"),
            _ => None,
        }?;
        try_parse_value(raw, ValueContext::Resistance, policy)
    }

    /// Capacitance in farads of a visible capacitor.
    pub fn capacitance(&self, policy: MSuffix) -> Option<f64> {
        match self.kind {
            ComponentKind::Capacitor => {
                try_parse_value(self.param("value")?, ValueContext::Generic, policy)
            }
            _ => None,
        }
    }
}
