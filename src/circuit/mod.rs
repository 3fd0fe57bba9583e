//! Parsed crossbar model.
//!
//! [`Circuit`] holds the visible components in declaration order, the node
//! table with aggregated parasitic capacitance and the inferred array size.
//! Each component carries its [`ComponentRole`], derived once from the
//! naming conventions in [`roles`], so consumers never re-match names.

mod graph;
mod registry;
pub mod roles;
mod topology;
mod types;

pub use graph::{Circuit, CircuitBuilder};
pub use registry::NodeRegistry;
pub use topology::GridDimensions;
pub use types::*;
