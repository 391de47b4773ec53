use crate::domain::topology::{validate_declaration, ResolvedLink, ResolvedNode, TopologyDeclaration, TopologyGraph};
use crate::foundation::{Address, Result};
use crate::infrastructure::config::ResolverConfig;
use crate::infrastructure::resolver::ContractResolver;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use std::sync::Arc;

/// Turns a validated topology declaration into an address-bound graph.
///
/// Validation is pure and runs first: an invalid declaration fails before a
/// single resolver call. Address resolution then runs once per declared
/// point (links only reference node points, so the node set is the distinct
/// set). Resolutions are independent reads and are issued through a bounded,
/// order-preserving stream; the first failure aborts the build and no
/// partial graph is ever returned.
pub struct GraphBuilder {
    contract_resolver: Arc<dyn ContractResolver>,
    max_concurrent_resolutions: usize,
}

impl GraphBuilder {
    pub fn new(contract_resolver: Arc<dyn ContractResolver>) -> Self {
        Self::with_config(contract_resolver, &ResolverConfig::default())
    }

    pub fn with_config(contract_resolver: Arc<dyn ContractResolver>, config: &ResolverConfig) -> Self {
        Self { contract_resolver, max_concurrent_resolutions: config.max_concurrent_resolutions.max(1) }
    }

    pub async fn build<N, L>(&self, declaration: TopologyDeclaration<N, L>) -> Result<TopologyGraph<N, L>> {
        validate_declaration(&declaration)?;
        debug!(
            "building topology graph node_count={} link_count={} max_concurrent_resolutions={}",
            declaration.node_count(),
            declaration.link_count(),
            self.max_concurrent_resolutions
        );

        let addresses: Vec<Address> = stream::iter(declaration.nodes.iter().map(|node| {
            let resolver = Arc::clone(&self.contract_resolver);
            let point = node.point.clone();
            async move { resolver.resolve(&point).await }
        }))
        .buffered(self.max_concurrent_resolutions)
        .try_collect()
        .await?;

        let nodes = declaration
            .nodes
            .into_iter()
            .zip(addresses)
            .map(|(node, address)| ResolvedNode { point: node.point, address, config: node.config })
            .collect();
        let links = declaration
            .links
            .into_iter()
            .map(|link| ResolvedLink { from: link.from, to: link.to, config: link.config })
            .collect();

        let graph = TopologyGraph::new(nodes, links);
        info!("topology graph built node_count={} link_count={}", graph.node_count(), graph.link_count());
        Ok(graph)
    }
}
