use crate::application::lifecycle::{NoopObserver, RunObserver};
use crate::domain::run::{ensure_valid_run_transition, ensure_valid_transaction_transition, RunPhase, TransactionPhase};
use crate::domain::topology::Point;
use crate::domain::transaction::{ExecutedTransaction, ExecutionReport, PendingTransaction};
use crate::foundation::{NetworkId, Result, TxHash, WiringError};
use crate::infrastructure::config::ExecutorConfig;
use crate::infrastructure::resolver::{Signer, SignerResolver, SubmittedTransaction};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Executes an aggregated, ordered sequence of pending transactions.
///
/// The sequence is an opaque total order: it encodes cross-domain
/// dependencies decided by the caller, so the loop is strictly sequential
/// even across independent networks. Transaction *i+1* never begins
/// submission before transaction *i* is confirmed.
///
/// Fail-fast: the first failure aborts the run and remaining transactions
/// are not attempted. Nothing is retried; resubmission can double-spend
/// nonce state, so retry policy stays with the caller. State already
/// committed by prior confirmed transactions remains committed.
pub struct TransactionExecutor {
    signer_resolver: Arc<dyn SignerResolver>,
    observer: Arc<dyn RunObserver>,
    confirmation_timeout: Duration,
}

impl TransactionExecutor {
    pub fn new(signer_resolver: Arc<dyn SignerResolver>, config: &ExecutorConfig) -> Self {
        Self::with_observer(signer_resolver, config, Arc::new(NoopObserver))
    }

    pub fn with_observer(signer_resolver: Arc<dyn SignerResolver>, config: &ExecutorConfig, observer: Arc<dyn RunObserver>) -> Self {
        Self { signer_resolver, observer, confirmation_timeout: config.confirmation_timeout() }
    }

    pub async fn execute(&self, transactions: Vec<PendingTransaction>) -> Result<ExecutionReport> {
        let mut run_phase = RunPhase::Idle;
        ensure_valid_run_transition(run_phase, RunPhase::Running)?;
        run_phase = RunPhase::Running;
        self.observer.on_run_started(transactions.len());

        if transactions.is_empty() {
            ensure_valid_run_transition(run_phase, RunPhase::Completed)?;
            self.observer.on_run_completed(0);
            return Ok(ExecutionReport::default());
        }

        // Preflight: every transaction's network must have a signer before
        // anything is submitted. A missing signer is a whole-run
        // precondition failure and must never strand a half-executed
        // ordered sequence.
        let signers = match self.resolve_signers(&transactions).await {
            Ok(signers) => signers,
            Err(err) => {
                ensure_valid_run_transition(run_phase, RunPhase::Aborted)?;
                return Err(err);
            }
        };

        let mut confirmed = Vec::with_capacity(transactions.len());
        for (idx, transaction) in transactions.into_iter().enumerate() {
            match self.execute_one(idx, transaction, &signers).await {
                Ok(executed) => confirmed.push(executed),
                Err(err) => {
                    ensure_valid_run_transition(run_phase, RunPhase::Aborted)?;
                    warn!("run aborted transaction_index={} confirmed_count={} error={}", idx, confirmed.len(), err);
                    return Err(err);
                }
            }
        }

        ensure_valid_run_transition(run_phase, RunPhase::Completed)?;
        self.observer.on_run_completed(confirmed.len());
        Ok(ExecutionReport { confirmed })
    }

    /// One signer resolution per distinct network, in first-use order.
    async fn resolve_signers(&self, transactions: &[PendingTransaction]) -> Result<HashMap<NetworkId, Arc<dyn Signer>>> {
        let mut signers: HashMap<NetworkId, Arc<dyn Signer>> = HashMap::new();
        for transaction in transactions {
            let network = &transaction.point.network;
            if signers.contains_key(network) {
                continue;
            }
            let signer = self.signer_resolver.for_network(network).await?;
            debug!("signer resolved network={}", network);
            signers.insert(network.clone(), signer);
        }
        Ok(signers)
    }

    async fn execute_one(
        &self,
        idx: usize,
        transaction: PendingTransaction,
        signers: &HashMap<NetworkId, Arc<dyn Signer>>,
    ) -> Result<ExecutedTransaction> {
        let PendingTransaction { point, description, payload } = transaction;
        let description_text = description.as_deref().unwrap_or("").to_string();
        let mut phase = TransactionPhase::Pending;

        // Preflight populated an entry for every network in the sequence.
        let signer = signers
            .get(&point.network)
            .ok_or_else(|| WiringError::no_signer_configured(point.network.as_str()))?;

        let submitted = match signer.submit(&payload).await {
            Ok(submitted) => submitted,
            Err(err) => {
                ensure_valid_transaction_transition(phase, TransactionPhase::Failed)?;
                let failure = WiringError::submission_rejected(point.to_string(), description_text.clone(), err.to_string());
                self.observer.on_failed(&point, &description_text, &failure.to_string());
                return Err(failure);
            }
        };
        ensure_valid_transaction_transition(phase, TransactionPhase::Submitted)?;
        phase = TransactionPhase::Submitted;
        let submission_hash = submitted.submission_hash().clone();
        info!(
            "transaction submitted transaction_index={} point={} description={} submission_hash={}",
            idx, point, description_text, submission_hash
        );
        self.observer.on_submitted(&point, &description_text, &submission_hash);

        let confirmation_hash = match self.wait_for_confirmation(submitted, &point, &description_text, &submission_hash).await {
            Ok(hash) => hash,
            Err(err) => {
                ensure_valid_transaction_transition(phase, TransactionPhase::Failed)?;
                self.observer.on_failed(&point, &description_text, &err.to_string());
                return Err(err);
            }
        };
        ensure_valid_transaction_transition(phase, TransactionPhase::Confirmed)?;
        info!(
            "transaction confirmed transaction_index={} point={} description={} confirmation_hash={}",
            idx, point, description_text, confirmation_hash
        );
        self.observer.on_confirmed(&point, &description_text, &submission_hash, &confirmation_hash);

        Ok(ExecutedTransaction { point, description, submission_hash, confirmation_hash })
    }

    async fn wait_for_confirmation(
        &self,
        submitted: Box<dyn SubmittedTransaction>,
        point: &Point,
        description: &str,
        submission_hash: &TxHash,
    ) -> Result<TxHash> {
        match tokio::time::timeout(self.confirmation_timeout, submitted.wait()).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(err)) => Err(WiringError::ConfirmationFailed {
                point: point.to_string(),
                description: description.to_string(),
                submission_hash: submission_hash.to_string(),
                details: err.to_string(),
            }),
            Err(_) => Err(WiringError::ConfirmationTimeout {
                point: point.to_string(),
                description: description.to_string(),
                submission_hash: submission_hash.to_string(),
                timeout_secs: self.confirmation_timeout.as_secs(),
            }),
        }
    }
}
