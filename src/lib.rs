//! # SpiceGrid
//!
//! Netlist parser and schematic layout engine for crossbar compute-in-memory
//! arrays described in SPICE.
//!
//! This library provides:
//! - A fail-soft parser for the crossbar subset of SPICE (array cells,
//!   resistors, capacitors, voltage sources and `.PARAM` cards)
//! - A circuit model with node registry, parasitic capacitance and grid
//!   dimensions inferred from cell names
//! - A deterministic layout engine turning the model into positioned shapes
//! - A session type that keeps the last good model while text is edited
//!
//! ## Architecture
//!
//! - [`netlist`] - Line classification, value normalization and element decoding
//! - [`circuit`] - Circuit model, node registry and component roles
//! - [`layout`] - Grid geometry and schematic primitives
//! - [`session`] - Last-known-good orchestration for editors
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! spicegrid crossbar.sp --format layout > layout.json
//! ```
//!
//! ### Library
//!
//! ```
//! use spicegrid::{layout, netlist, LayoutConfig};
//!
//! let parsed = netlist::parse("X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL Res=10M");
//! assert_eq!(parsed.circuit.grid_dimensions.rows, 1);
//!
//! let schematic = layout(&parsed.circuit, &LayoutConfig::default());
//! assert_eq!(schematic.primitives.len(), 1);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmSchematic } from 'spicegrid';
//!
//! const view = new WasmSchematic(netlistText, false);
//! const shapes = JSON.parse(view.layout_json());
//! ```

pub mod circuit;
pub mod error;
pub mod layout;
pub mod netlist;
pub mod session;

// Re-export main types for convenience
pub use circuit::{Circuit, Component, ComponentKind, ComponentRole, GridPosition, Node};
pub use error::{Result, SpiceGridError};
pub use layout::{layout, Layout, LayoutConfig, Primitive};
pub use netlist::{parse, parse_with, Diagnostic, MSuffix, ParseOptions, ParsedNetlist};
pub use session::Session;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchematic;
