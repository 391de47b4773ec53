use crate::domain::topology::point::Point;
use serde::{Deserialize, Serialize};

/// Desired state for one node. The config payload is opaque to the graph
/// layer; only the configurator for the node's contract kind interprets it.
/// `None` means no node-level configuration is desired.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NodeDeclaration<N> {
    pub point: Point,
    #[serde(default = "none_config")]
    pub config: Option<N>,
}

fn none_config<N>() -> Option<N> {
    None
}

impl<N> NodeDeclaration<N> {
    pub fn new(point: Point, config: Option<N>) -> Self {
        Self { point, config }
    }

    pub fn bare(point: Point) -> Self {
        Self { point, config: None }
    }
}

/// Desired state for one directed connection. Self-links are legal at this
/// layer; whether they mean anything is a configurator concern.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LinkDeclaration<L> {
    pub from: Point,
    pub to: Point,
    pub config: L,
}

impl<L> LinkDeclaration<L> {
    pub fn new(from: Point, to: Point, config: L) -> Self {
        Self { from, to, config }
    }
}

/// The caller-supplied desired-state description: nodes plus directed links,
/// each carrying opaque configuration payloads. This is the only persisted
/// shape the core accepts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TopologyDeclaration<N, L> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<NodeDeclaration<N>>,
    #[serde(default = "Vec::new")]
    pub links: Vec<LinkDeclaration<L>>,
}

impl<N, L> TopologyDeclaration<N, L> {
    pub fn new(nodes: Vec<NodeDeclaration<N>>, links: Vec<LinkDeclaration<L>>) -> Self {
        Self { nodes, links }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl<N, L> Default for TopologyDeclaration<N, L> {
    fn default() -> Self {
        Self { nodes: Vec::new(), links: Vec::new() }
    }
}
