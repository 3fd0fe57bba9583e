//! Fixed schematic dimensions.

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use crate::circuit::GridPosition;

/// Dimensions of the schematic grid, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub cell_width: f64,
    pub cell_height: f64,
    /// Horizontal space between cells
    pub gap_x: f64,
    /// Vertical space between cells
    pub gap_y: f64,
    /// Space left of the first column
    pub margin_left: f64,
    /// Space above the first row
    pub margin_top: f64,
    /// Bit-line track offset from the left edge of a cell
    pub bit_line_inset: f64,
    /// Word-line offset from the top and source-line offset from the bottom
    pub track_inset: f64,
    /// Distance of off-grid drivers from the array edge
    pub driver_offset: f64,
    /// Radius of a driver glyph; connectors start at its rim
    pub glyph_radius: f64,
    /// Distance of a source-line driver below its cell
    pub ground_drop: f64,
    /// Extra canvas beyond the last row and column
    pub canvas_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 80.0,
            cell_height: 60.0,
            gap_x: 60.0,
            gap_y: 60.0,
            margin_left: 100.0,
            margin_top: 100.0,
            bit_line_inset: 20.0,
            track_inset: 10.0,
            driver_offset: 60.0,
            glyph_radius: 20.0,
            ground_drop: 40.0,
            canvas_padding: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size of a cell rectangle.
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the spacing between cells.
    pub fn with_gaps(mut self, gap_x: f64, gap_y: f64) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    /// Set the space reserved for drivers left of and above the array.
    pub fn with_margins(mut self, left: f64, top: f64) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self
    }

    /// Column pitch.
    pub fn pitch_x(&self) -> f64 {
        self.cell_width + self.gap_x
    }

    /// Row pitch.
    pub fn pitch_y(&self) -> f64 {
        self.cell_height + self.gap_y
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, pos: GridPosition) -> Point {
        Point::new(
            self.margin_left + f64::from(pos.col.saturating_sub(1)) * self.pitch_x(),
            self.margin_top + f64::from(pos.row.saturating_sub(1)) * self.pitch_y(),
        )
    }

    /// Center of a cell.
    pub fn cell_center(&self, pos: GridPosition) -> Point {
        let origin = self.cell_origin(pos);
        Point::new(
            origin.x + self.cell_width / 2.0,
            origin.y + self.cell_height / 2.0,
        )
    }

    /// x of the bit-line track of a column.
    pub fn bit_line_x(&self, col: u32) -> f64 {
        self.cell_origin(GridPosition::new(1, col)).x + self.bit_line_inset
    }

    /// y of the word-line track of a row.
    pub fn word_line_y(&self, row: u32) -> f64 {
        self.cell_origin(GridPosition::new(row, 1)).y + self.track_inset
    }

    /// y of the source-line track of a row.
    pub fn source_line_y(&self, row: u32) -> f64 {
        self.cell_origin(GridPosition::new(row, 1)).y + self.cell_height - self.track_inset
    }
}
