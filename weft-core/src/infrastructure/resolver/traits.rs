use crate::domain::topology::Point;
use crate::foundation::{Address, NetworkId, TxHash, WiringError};
use async_trait::async_trait;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, WiringError>;

/// Maps a point to its live on-chain address. May perform network calls;
/// calls are read-only and safe to issue concurrently.
///
/// Expected failures: `NotDeployed`, `NetworkUnavailable`.
#[async_trait]
pub trait ContractResolver: Send + Sync {
    async fn resolve(&self, point: &Point) -> Result<Address>;
}

/// Maps a network identifier to the signing authority for that network.
///
/// Expected failure: `NoSignerConfigured`.
#[async_trait]
pub trait SignerResolver: Send + Sync {
    async fn for_network(&self, network: &NetworkId) -> Result<Arc<dyn Signer>>;
}

/// A network-specific signing authority. Submission is a suspension point;
/// the returned handle carries the submission hash and blocks for the
/// confirmation receipt.
///
/// Submissions are not safe to retry blindly (resubmission can double-spend
/// nonce state), so retry policy stays with the caller.
#[async_trait]
pub trait Signer: Send + Sync {
    async fn submit(&self, payload: &[u8]) -> Result<Box<dyn SubmittedTransaction>>;
}

/// An accepted, not-yet-confirmed submission. `wait` consumes the handle:
/// a confirmation receipt is obtained exactly once.
#[async_trait]
pub trait SubmittedTransaction: Send + Sync {
    fn submission_hash(&self) -> &TxHash;
    async fn wait(self: Box<Self>) -> Result<TxHash>;
}
