//! Schematic layout for crossbar circuits.
//!
//! Cells sit on a regular grid; bit lines run vertically through the left
//! side of each column, word lines along the top and source lines along the
//! bottom of each row. Drivers are drawn outside the array: bit-line drivers
//! above it, word-line drivers to its left and source-line drivers below the
//! cell whose source line they feed.
//!
//! ```text
//!            Vbl1          Vbl2
//!             |             |
//!   Vwl1 -- +-+------+    +-+------+
//!           | X1_1   |    | X1_2   |
//!           +--------+-/\/+--------+   Rint_sl_1_1
//!             /             |
//!             \ Rint_bl_1_1 |
//! ```

mod config;
mod engine;
mod geometry;

pub use config::LayoutConfig;
pub use engine::layout;
pub use geometry::{Anchor, Layout, Orientation, Point, Primitive};
