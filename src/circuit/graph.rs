//! The parsed crossbar circuit and its assembler.

use std::collections::HashSet;

use serde::Serialize;

use super::registry::NodeRegistry;
use super::topology::GridDimensions;
use super::types::{Component, ComponentKind, GridPosition, Node, NodeId, WaveformPoint};
use crate::netlist::{MSuffix, ParamTable};

/// A complete parsed netlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Circuit {
    /// Visible elements in declaration order
    pub components: Vec<Component>,

    /// Every referenced node, with accumulated parasitic capacitance
    pub nodes: NodeRegistry,

    /// Bounding box of the placed array cells
    pub grid_dimensions: GridDimensions,

    /// `.PARAM` bindings of the document
    pub params: ParamTable,

    /// Policy the document was parsed with, reused for derived values
    pub m_suffix: MSuffix,
}

impl Circuit {
    /// Find a component by instance name.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Find a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Array cells that have a grid position.
    pub fn cells(&self) -> impl Iterator<Item = (&Component, GridPosition)> {
        self.components
            .iter()
            .filter_map(|c| c.grid_position().map(|pos| (c, pos)))
    }

    /// Components of one kind, in declaration order.
    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    /// PWL breakpoints of a voltage source.
    pub fn waveform(&self, id: &str) -> Option<&[WaveformPoint]> {
        self.component(id).and_then(Component::waveform)
    }

    /// Resistance in ohms of a resistor or of a cell's `Res` parameter.
    pub fn resistance(&self, id: &str) -> Option<f64> {
        self.component(id)?.resistance(self.m_suffix)
    }

    /// Sum of all parasitic capacitance in farads.
    pub fn total_capacitance(&self) -> f64 {
        self.nodes.iter().map(|n| n.capacitance).sum()
    }
}

/// Accumulates decoded elements into a [`Circuit`] while keeping its
/// invariants: every component node is registered exactly once, instance
/// names are unique and the grid box covers every placed cell.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
    claimed: HashSet<String>,
}

impl CircuitBuilder {
    pub fn new(params: ParamTable, m_suffix: MSuffix) -> Self {
        Self {
            circuit: Circuit {
                params,
                m_suffix,
                ..Circuit::default()
            },
            claimed: HashSet::new(),
        }
    }

    /// Reserve an instance name. Returns `false` if it was already used.
    pub fn claim(&mut self, id: &str) -> bool {
        self.claimed.insert(id.to_string())
    }

    pub fn params(&self) -> &ParamTable {
        &self.circuit.params
    }

    /// Register a node and return its ID.
    pub fn node(&mut self, name: &str) -> NodeId {
        self.circuit.nodes.intern(name)
    }

    pub fn is_ground(&self, id: NodeId) -> bool {
        self.circuit.nodes.node(id).is_ground
    }

    pub fn add_capacitance(&mut self, id: NodeId, farads: f64) {
        self.circuit.nodes.add_capacitance(id, farads);
    }

    /// Append a visible component.
    pub fn push(&mut self, component: Component) {
        for name in &component.nodes {
            self.circuit.nodes.intern(name);
        }
        if let Some(position) = component.grid_position() {
            self.circuit.grid_dimensions.observe(position);
        }
        self.circuit.components.push(component);
    }

    pub fn build(self) -> Circuit {
        self.circuit
    }
}
