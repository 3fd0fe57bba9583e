//! Array dimensions inferred from cell positions.

use serde::Serialize;

use super::types::GridPosition;

/// Bounding box of every placed cell: `(max row, max col)`.
///
/// Holes in a sparse array still count; there is no occupancy check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    /// Grow the box to include `position`.
    pub fn observe(&mut self, position: GridPosition) {
        self.rows = self.rows.max(position.row);
        self.cols = self.cols.max(position.col);
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_ignores_holes() {
        let mut dims = GridDimensions::default();
        assert!(dims.is_empty());
        dims.observe(GridPosition::new(1, 1));
        dims.observe(GridPosition::new(4, 2));
        dims.observe(GridPosition::new(2, 4));
        assert_eq!(dims, GridDimensions { rows: 4, cols: 4 });
    }
}
