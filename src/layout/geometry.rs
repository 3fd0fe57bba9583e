//! Positioned shapes produced by the layout engine.

use serde::{Deserialize, Serialize};

use crate::circuit::{GridPosition, Track};

/// A point in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Where a cell connects to one of its tracks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchor {
    pub node: String,
    pub track: Track,
    pub at: Point,
}

/// A renderable shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Array cell rectangle with its three track anchors
    Cell {
        id: String,
        position: GridPosition,
        /// Top-left corner
        origin: Point,
        width: f64,
        height: f64,
        bit_line: Anchor,
        word_line: Anchor,
        source_line: Anchor,
    },
    /// Straight connector; drivers use dashed ones
    Wire {
        from: Point,
        to: Point,
        track: Track,
        dashed: bool,
    },
    /// Zig-zag line resistor centered between two cells
    Resistor {
        id: String,
        orientation: Orientation,
        center: Point,
        length: f64,
        track: Track,
        label: Option<String>,
    },
    /// Off-grid bit-line (vertical) or word-line (horizontal) driver
    VoltageGlyph {
        id: String,
        orientation: Orientation,
        center: Point,
        track: Track,
        label: String,
    },
    /// Source-line driver below its cell
    GroundSourceGlyph {
        id: String,
        center: Point,
        track: Track,
    },
}

impl Primitive {
    /// Component the shape was drawn for; `None` for connector wires.
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Primitive::Cell { id, .. }
            | Primitive::Resistor { id, .. }
            | Primitive::VoltageGlyph { id, .. }
            | Primitive::GroundSourceGlyph { id, .. } => Some(id.as_str()),
            Primitive::Wire { .. } => None,
        }
    }

    /// Track the shape belongs to; cells span all three.
    pub fn track(&self) -> Option<Track> {
        match self {
            Primitive::Cell { .. } => None,
            Primitive::Wire { track, .. }
            | Primitive::Resistor { track, .. }
            | Primitive::VoltageGlyph { track, .. }
            | Primitive::GroundSourceGlyph { track, .. } => Some(*track),
        }
    }

    /// Stroke color for the shape's track.
    pub fn color(&self) -> Option<&'static str> {
        self.track().map(Track::color)
    }

    /// Whether the shape should be highlighted for a selected component.
    pub fn is_selected(&self, selected: Option<&str>) -> bool {
        selected.is_some() && self.component_id() == selected
    }
}

/// The complete schematic: shapes in component order plus canvas extent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub primitives: Vec<Primitive>,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// Shapes drawn for one component.
    pub fn primitives_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Primitive> {
        self.primitives
            .iter()
            .filter(move |p| p.component_id() == Some(id))
    }
}
