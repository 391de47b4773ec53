use crate::domain::topology::point::Point;
use crate::foundation::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A declared node bound to its resolved on-chain address.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResolvedNode<N> {
    pub point: Point,
    pub address: Address,
    pub config: Option<N>,
}

/// A directed connection between two resolved nodes. Shape is unchanged from
/// the declaration; endpoints are looked up through the graph when an
/// address is needed.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResolvedLink<L> {
    pub from: Point,
    pub to: Point,
    pub config: L,
}

/// The resolved, address-bound form of a topology declaration.
///
/// Immutable after construction: configurators only read it, and one graph
/// may be shared across concurrent builds of other graphs.
#[derive(Clone, Debug)]
pub struct TopologyGraph<N, L> {
    nodes: Vec<ResolvedNode<N>>,
    links: Vec<ResolvedLink<L>>,
    index: HashMap<Point, usize>,
}

impl<N, L> TopologyGraph<N, L> {
    pub(crate) fn new(nodes: Vec<ResolvedNode<N>>, links: Vec<ResolvedLink<L>>) -> Self {
        let index = nodes.iter().enumerate().map(|(i, node)| (node.point.clone(), i)).collect();
        Self { nodes, links, index }
    }

    pub fn nodes(&self) -> &[ResolvedNode<N>] {
        &self.nodes
    }

    pub fn links(&self) -> &[ResolvedLink<L>] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn node(&self, point: &Point) -> Option<&ResolvedNode<N>> {
        self.index.get(point).map(|&i| &self.nodes[i])
    }

    pub fn address_of(&self, point: &Point) -> Option<&Address> {
        self.node(point).map(|node| &node.address)
    }

    /// Links leaving `point`, in declaration order.
    pub fn links_from<'a>(&'a self, point: &'a Point) -> impl Iterator<Item = &'a ResolvedLink<L>> {
        self.links.iter().filter(move |link| &link.from == point)
    }

    /// Links arriving at `point`, in declaration order.
    pub fn links_to<'a>(&'a self, point: &'a Point) -> impl Iterator<Item = &'a ResolvedLink<L>> {
        self.links.iter().filter(move |link| &link.to == point)
    }
}
