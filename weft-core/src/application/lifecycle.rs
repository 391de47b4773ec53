use crate::domain::topology::Point;
use crate::foundation::TxHash;
use log::{info, trace, warn};
use std::sync::Arc;

/// Diagnostics sink for transaction-lifecycle transitions.
///
/// The executor emits; presentation belongs to the observer. All methods
/// default to no-ops so implementations subscribe only to what they need.
pub trait RunObserver: Send + Sync {
    fn on_run_started(&self, _transaction_count: usize) {}
    fn on_submitted(&self, _point: &Point, _description: &str, _submission_hash: &TxHash) {}
    fn on_confirmed(&self, _point: &Point, _description: &str, _submission_hash: &TxHash, _confirmation_hash: &TxHash) {}
    fn on_failed(&self, _point: &Point, _description: &str, _reason: &str) {}
    fn on_run_completed(&self, _confirmed_count: usize) {}
}

pub struct NoopObserver;

impl RunObserver for NoopObserver {}

pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn RunObserver>) {
        self.observers.push(observer);
    }
}

impl Default for CompositeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RunObserver for CompositeObserver {
    fn on_run_started(&self, transaction_count: usize) {
        trace!("on_run_started dispatch observer_count={} transaction_count={}", self.observers.len(), transaction_count);
        for (idx, observer) in self.observers.iter().enumerate() {
            trace!("on_run_started calling observer observer_index={}", idx);
            observer.on_run_started(transaction_count);
        }
    }

    fn on_submitted(&self, point: &Point, description: &str, submission_hash: &TxHash) {
        for observer in &self.observers {
            observer.on_submitted(point, description, submission_hash);
        }
    }

    fn on_confirmed(&self, point: &Point, description: &str, submission_hash: &TxHash, confirmation_hash: &TxHash) {
        for observer in &self.observers {
            observer.on_confirmed(point, description, submission_hash, confirmation_hash);
        }
    }

    fn on_failed(&self, point: &Point, description: &str, reason: &str) {
        for observer in &self.observers {
            observer.on_failed(point, description, reason);
        }
    }

    fn on_run_completed(&self, confirmed_count: usize) {
        for observer in &self.observers {
            observer.on_run_completed(confirmed_count);
        }
    }
}

/// Emits one structured log line per transition.
pub struct LogObserver;

impl RunObserver for LogObserver {
    fn on_run_started(&self, transaction_count: usize) {
        info!("run started phase=running transaction_count={}", transaction_count);
    }

    fn on_submitted(&self, point: &Point, description: &str, submission_hash: &TxHash) {
        info!("transaction submitted point={} description={} phase=submitted hash={}", point, description, submission_hash);
    }

    fn on_confirmed(&self, point: &Point, description: &str, _submission_hash: &TxHash, confirmation_hash: &TxHash) {
        info!("transaction confirmed point={} description={} phase=confirmed hash={}", point, description, confirmation_hash);
    }

    fn on_failed(&self, point: &Point, description: &str, reason: &str) {
        warn!("transaction failed point={} description={} phase=failed reason={}", point, description, reason);
    }

    fn on_run_completed(&self, confirmed_count: usize) {
        info!("run completed phase=completed confirmed_count={}", confirmed_count);
    }
}
