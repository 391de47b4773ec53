use crate::domain::topology::Point;
use crate::foundation::TxHash;
use serde::{Deserialize, Serialize};

/// An un-submitted unit of reconciliation work bound to one point.
///
/// Created by a configurator, consumed exactly once by the executor. The
/// payload is the network-specific transaction data and is opaque here; the
/// point tells the executor which network and signer must carry it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PendingTransaction {
    pub point: Point,
    pub description: Option<String>,
    pub payload: Vec<u8>,
}

impl PendingTransaction {
    pub fn new(point: Point, description: impl Into<String>, payload: Vec<u8>) -> Self {
        Self { point, description: Some(description.into()), payload }
    }

    pub fn undescribed(point: Point, payload: Vec<u8>) -> Self {
        Self { point, description: None, payload }
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// The durable record of one confirmed transaction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExecutedTransaction {
    pub point: Point,
    pub description: Option<String>,
    pub submission_hash: TxHash,
    pub confirmation_hash: TxHash,
}

/// Outcome of a completed executor run. Present only when every transaction
/// confirmed; a failed run surfaces as an error instead.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ExecutionReport {
    pub confirmed: Vec<ExecutedTransaction>,
}

impl ExecutionReport {
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }
}
