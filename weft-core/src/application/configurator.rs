use crate::domain::topology::{Point, TopologyGraph};
use crate::domain::transaction::PendingTransaction;
use crate::foundation::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Turns a point into a domain-specific SDK handle for reading on-chain
/// state. Implemented by the caller per contract kind.
#[async_trait]
pub trait SdkFactory: Send + Sync {
    type Sdk;

    async fn sdk_for(&self, point: &Point) -> Result<Self::Sdk>;
}

/// Domain-specific reconciliation: diff one graph's desired state against
/// on-chain reality and emit the transactions that close the gap.
///
/// Configurators read through factory-produced handles but never submit;
/// submission belongs solely to the executor. Ordering within the returned
/// sequence is significant and must reflect intra-domain dependencies.
#[async_trait]
pub trait Configurator<N, L, S>: Send + Sync {
    async fn reconcile(
        &self,
        graph: &TopologyGraph<N, L>,
        factory: &dyn SdkFactory<Sdk = S>,
    ) -> Result<Vec<PendingTransaction>>;
}

/// Run a caller-ordered set of configurators over one graph and concatenate
/// their outputs. Relative order is preserved exactly: everything the first
/// configurator emits comes before anything the second does, and so on. The
/// first configurator failure aborts with no transactions.
pub async fn configure<N, L, S>(
    graph: &TopologyGraph<N, L>,
    factory: &dyn SdkFactory<Sdk = S>,
    configurators: &[Arc<dyn Configurator<N, L, S>>],
) -> Result<Vec<PendingTransaction>> {
    let mut transactions = Vec::new();
    for (idx, configurator) in configurators.iter().enumerate() {
        let batch = configurator.reconcile(graph, factory).await?;
        debug!("configurator produced transactions configurator_index={} transaction_count={}", idx, batch.len());
        transactions.extend(batch);
    }
    Ok(transactions)
}

/// Concatenate per-domain transaction batches in the caller's fixed priority
/// order. The order is authoritative and opaque downstream: later-domain
/// configuration may depend on earlier-domain state being committed first.
pub fn aggregate(batches: Vec<Vec<PendingTransaction>>) -> Vec<PendingTransaction> {
    let mut transactions = Vec::with_capacity(batches.iter().map(Vec::len).sum());
    for batch in batches {
        transactions.extend(batch);
    }
    transactions
}
