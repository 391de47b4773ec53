pub mod state_machine;

pub use state_machine::{ensure_valid_run_transition, ensure_valid_transaction_transition, RunPhase, TransactionPhase};
