//! Unique node table with parasitic capacitance accumulation.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::types::{Node, NodeId};

/// Every node referenced by the netlist, in first-reference order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node's ID, creating the node on first reference.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add capacitance to ground on a node.
    pub fn add_capacitance(&mut self, id: NodeId, farads: f64) {
        self.nodes[id.0].capacitance += farads;
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.find(name).map(|id| &self.nodes[id.0])
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Serialize for NodeRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intern_is_idempotent() {
        let mut reg = NodeRegistry::new();
        let a = reg.intern("bl11");
        let b = reg.intern("wl1");
        assert_eq!(reg.intern("bl11"), a);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(), ["bl11", "wl1"]);
    }

    #[test]
    fn test_capacitance_accumulates() {
        let mut reg = NodeRegistry::new();
        let id = reg.intern("sl11");
        reg.add_capacitance(id, 1e-15);
        reg.add_capacitance(id, 2e-15);
        assert_relative_eq!(reg.node(id).capacitance, 3e-15, max_relative = 1e-12);
    }

    #[test]
    fn test_ground_flag() {
        let mut reg = NodeRegistry::new();
        let gnd = reg.intern("0");
        assert!(reg.node(gnd).is_ground);
        assert_eq!(reg.get("0").map(|n| n.capacitance), Some(0.0));
        assert!(reg.get("missing").is_none());
    }
}
