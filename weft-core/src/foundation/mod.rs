pub mod error;
pub mod types;

pub use error::{ErrorCategory, ErrorCode, ErrorContext, Result, WiringError};
pub use types::{Address, ContractRole, NetworkId, TxHash};
