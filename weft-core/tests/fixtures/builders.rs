#![allow(dead_code)]

use serde_json::Value;
use weft_core::domain::{LinkDeclaration, NodeDeclaration, Point, TopologyDeclaration};

/// Builds `TopologyDeclaration<Value, Value>` instances for tests, with JSON
/// values standing in for the opaque config payloads.
pub struct TopologyBuilder {
    nodes: Vec<NodeDeclaration<Value>>,
    links: Vec<LinkDeclaration<Value>>,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self { nodes: Vec::new(), links: Vec::new() }
    }
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, point: Point) -> Self {
        self.nodes.push(NodeDeclaration::bare(point));
        self
    }

    pub fn node_with_config(mut self, point: Point, config: Value) -> Self {
        self.nodes.push(NodeDeclaration::new(point, Some(config)));
        self
    }

    pub fn link(mut self, from: Point, to: Point, config: Value) -> Self {
        self.links.push(LinkDeclaration::new(from, to, config));
        self
    }

    pub fn build(self) -> TopologyDeclaration<Value, Value> {
        TopologyDeclaration::new(self.nodes, self.links)
    }
}
