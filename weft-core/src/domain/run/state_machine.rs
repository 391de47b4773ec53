use crate::foundation::WiringError;
use log::{info, warn};
use std::fmt;

/// Global state of one executor run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunPhase {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// State of one transaction inside a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionPhase {
    Pending,
    Submitted,
    Confirmed,
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::Completed => "completed",
            RunPhase::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

impl fmt::Display for TransactionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionPhase::Pending => "pending",
            TransactionPhase::Submitted => "submitted",
            TransactionPhase::Confirmed => "confirmed",
            TransactionPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

const VALID_RUN_TRANSITIONS: &[(RunPhase, RunPhase)] = &[
    (RunPhase::Idle, RunPhase::Running),
    (RunPhase::Running, RunPhase::Completed),
    (RunPhase::Running, RunPhase::Aborted),
];

const VALID_TRANSACTION_TRANSITIONS: &[(TransactionPhase, TransactionPhase)] = &[
    (TransactionPhase::Pending, TransactionPhase::Submitted),
    (TransactionPhase::Pending, TransactionPhase::Failed),
    (TransactionPhase::Submitted, TransactionPhase::Confirmed),
    (TransactionPhase::Submitted, TransactionPhase::Failed),
];

pub fn run_phase_is_terminal(phase: RunPhase) -> bool {
    matches!(phase, RunPhase::Completed | RunPhase::Aborted)
}

pub fn transaction_phase_is_terminal(phase: TransactionPhase) -> bool {
    matches!(phase, TransactionPhase::Confirmed | TransactionPhase::Failed)
}

pub fn ensure_valid_run_transition(from: RunPhase, to: RunPhase) -> Result<(), WiringError> {
    if from == to || VALID_RUN_TRANSITIONS.contains(&(from, to)) {
        info!("run phase transition from_phase={} to_phase={}", from, to);
        return Ok(());
    }
    warn!("invalid run phase transition from_phase={} to_phase={}", from, to);
    Err(WiringError::InvalidStateTransition { from: from.to_string(), to: to.to_string() })
}

pub fn ensure_valid_transaction_transition(from: TransactionPhase, to: TransactionPhase) -> Result<(), WiringError> {
    if from == to || VALID_TRANSACTION_TRANSITIONS.contains(&(from, to)) {
        return Ok(());
    }
    warn!("invalid transaction phase transition from_phase={} to_phase={}", from, to);
    Err(WiringError::InvalidStateTransition { from: from.to_string(), to: to.to_string() })
}
