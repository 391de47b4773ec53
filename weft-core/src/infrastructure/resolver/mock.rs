//! In-memory resolver and signer doubles for tests and local development.
//!
//! The signer side is scripted per submission: confirm with fixed or
//! sequenced hashes, reject the submission, fail confirmation, or hang so
//! confirmation-timeout handling can be exercised.

use crate::domain::topology::Point;
use crate::foundation::{Address, NetworkId, TxHash, WiringError};
use crate::infrastructure::resolver::traits::{ContractResolver, Signer, SignerResolver, SubmittedTransaction};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type Result<T> = std::result::Result<T, WiringError>;

/// Address-book contract resolver. Counts resolution calls so tests can
/// assert that validation failures perform zero I/O and that shared points
/// resolve exactly once.
#[derive(Default)]
pub struct StaticContractResolver {
    addresses: HashMap<Point, Address>,
    unavailable_networks: HashSet<NetworkId>,
    calls: AtomicUsize,
}

impl StaticContractResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, point: Point, address: impl Into<Address>) -> Self {
        self.addresses.insert(point, address.into());
        self
    }

    pub fn with_unavailable_network(mut self, network: impl Into<NetworkId>) -> Self {
        self.unavailable_networks.insert(network.into());
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContractResolver for StaticContractResolver {
    async fn resolve(&self, point: &Point) -> Result<Address> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.unavailable_networks.contains(&point.network) {
            return Err(WiringError::network_unavailable(point.network.as_str(), "mock network offline"));
        }
        self.addresses.get(point).cloned().ok_or_else(|| WiringError::not_deployed(point.to_string()))
    }
}

/// What a scripted signer does with one submission.
#[derive(Clone, Debug)]
pub enum SubmissionScript {
    /// Accept and confirm with sequenced hashes.
    Confirm,
    /// Accept and confirm with the given hashes.
    ConfirmWith { submission_hash: String, confirmation_hash: String },
    /// Reject at submission time.
    Reject { details: String },
    /// Accept, then fail at confirmation time.
    FailConfirmation { details: String },
    /// Accept, then never confirm. Pair with an executor confirmation timeout.
    HangConfirmation,
}

/// Shared recorder across every mock signer, preserving the global order in
/// which submissions were accepted. Strict-sequencing tests read this.
#[derive(Default)]
pub struct MockSignerHub {
    submissions: Mutex<Vec<(NetworkId, Vec<u8>)>>,
}

impl MockSignerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().expect("hub lock").len()
    }

    pub fn submissions(&self) -> Vec<(NetworkId, Vec<u8>)> {
        self.submissions.lock().expect("hub lock").clone()
    }

    fn record(&self, network: &NetworkId, payload: &[u8]) {
        self.submissions.lock().expect("hub lock").push((network.clone(), payload.to_vec()));
    }
}

pub struct MockSigner {
    network: NetworkId,
    hub: Arc<MockSignerHub>,
    scripts: Mutex<VecDeque<SubmissionScript>>,
    seq: AtomicU64,
}

impl MockSigner {
    fn new(network: NetworkId, hub: Arc<MockSignerHub>, scripts: Vec<SubmissionScript>) -> Self {
        Self { network, hub, scripts: Mutex::new(scripts.into()), seq: AtomicU64::new(1) }
    }

    fn next_script(&self) -> SubmissionScript {
        self.scripts.lock().expect("script lock").pop_front().unwrap_or(SubmissionScript::Confirm)
    }
}

#[async_trait]
impl Signer for MockSigner {
    async fn submit(&self, payload: &[u8]) -> Result<Box<dyn SubmittedTransaction>> {
        let script = self.next_script();
        if let SubmissionScript::Reject { details } = script {
            return Err(WiringError::Message(details));
        }
        self.hub.record(&self.network, payload);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let (submission_hash, outcome) = match script {
            SubmissionScript::Confirm => {
                (TxHash::from(format!("0xsub-{}-{}", self.network, seq)), ConfirmationOutcome::Confirm(TxHash::from(format!("0xconf-{}-{}", self.network, seq))))
            }
            SubmissionScript::ConfirmWith { submission_hash, confirmation_hash } => {
                (TxHash::from(submission_hash), ConfirmationOutcome::Confirm(TxHash::from(confirmation_hash)))
            }
            SubmissionScript::FailConfirmation { details } => {
                (TxHash::from(format!("0xsub-{}-{}", self.network, seq)), ConfirmationOutcome::Fail(details))
            }
            SubmissionScript::HangConfirmation => (TxHash::from(format!("0xsub-{}-{}", self.network, seq)), ConfirmationOutcome::Hang),
            SubmissionScript::Reject { .. } => unreachable!("rejected above"),
        };
        Ok(Box::new(MockSubmission { submission_hash, outcome }))
    }
}

enum ConfirmationOutcome {
    Confirm(TxHash),
    Fail(String),
    Hang,
}

struct MockSubmission {
    submission_hash: TxHash,
    outcome: ConfirmationOutcome,
}

#[async_trait]
impl SubmittedTransaction for MockSubmission {
    fn submission_hash(&self) -> &TxHash {
        &self.submission_hash
    }

    async fn wait(self: Box<Self>) -> Result<TxHash> {
        match self.outcome {
            ConfirmationOutcome::Confirm(hash) => Ok(hash),
            ConfirmationOutcome::Fail(details) => Err(WiringError::Message(details)),
            ConfirmationOutcome::Hang => std::future::pending().await,
        }
    }
}

/// Signer resolver over a fixed set of mock signers. Networks without an
/// entry fail with `NoSignerConfigured`.
#[derive(Default)]
pub struct MockSignerResolver {
    hub: Arc<MockSignerHub>,
    signers: HashMap<NetworkId, Arc<MockSigner>>,
    resolve_calls: AtomicUsize,
}

impl MockSignerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hub(&self) -> Arc<MockSignerHub> {
        Arc::clone(&self.hub)
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::Relaxed)
    }

    /// Register an auto-confirming signer for `network`.
    pub fn with_network(self, network: impl Into<NetworkId>) -> Self {
        self.with_scripted_network(network, Vec::new())
    }

    /// Register a signer whose submissions follow `scripts` in order, then
    /// auto-confirm once the script queue is drained.
    pub fn with_scripted_network(mut self, network: impl Into<NetworkId>, scripts: Vec<SubmissionScript>) -> Self {
        let network = network.into();
        let signer = Arc::new(MockSigner::new(network.clone(), Arc::clone(&self.hub), scripts));
        self.signers.insert(network, signer);
        self
    }
}

#[async_trait]
impl SignerResolver for MockSignerResolver {
    async fn for_network(&self, network: &NetworkId) -> Result<Arc<dyn Signer>> {
        self.resolve_calls.fetch_add(1, Ordering::Relaxed);
        match self.signers.get(network) {
            Some(signer) => Ok(Arc::clone(signer) as Arc<dyn Signer>),
            None => Err(WiringError::no_signer_configured(network.as_str())),
        }
    }
}
