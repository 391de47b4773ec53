use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateNode,
    DuplicateLink,
    DanglingLink,
    NotDeployed,
    NetworkUnavailable,
    ResolutionFailed,
    NoSignerConfigured,
    SubmissionRejected,
    ConfirmationTimeout,
    ConfirmationFailed,
    InvalidStateTransition,
    ConfigError,
    SerializationError,
    Message,
}

/// Coarse grouping of error codes by pipeline stage.
///
/// `Validation` errors fire before any network I/O and are recoverable by
/// correcting the declaration. Everything else is fatal to the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Resolution,
    Submission,
    Confirmation,
    Internal,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub category: ErrorCategory,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("duplicate node declared: {point}")]
    DuplicateNode { point: String },

    #[error("duplicate link declared: {from} -> {to}")]
    DuplicateLink { from: String, to: String },

    #[error("link {from} -> {to} references undeclared node {missing}")]
    DanglingLink { from: String, to: String, missing: String },

    #[error("no contract deployed at {point}")]
    NotDeployed { point: String },

    #[error("network unavailable: {network}: {details}")]
    NetworkUnavailable { network: String, details: String },

    #[error("address resolution failed for {point}: {details}")]
    ResolutionFailed { point: String, details: String },

    #[error("no signer configured for network {network}")]
    NoSignerConfigured { network: String },

    #[error("transaction rejected point={point} description={description}: {details}")]
    SubmissionRejected { point: String, description: String, details: String },

    #[error("confirmation timed out after {timeout_secs}s point={point} description={description} submission_hash={submission_hash}")]
    ConfirmationTimeout { point: String, description: String, submission_hash: String, timeout_secs: u64 },

    #[error("confirmation failed point={point} description={description} submission_hash={submission_hash}: {details}")]
    ConfirmationFailed { point: String, description: String, submission_hash: String, details: String },

    #[error("invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("{format} serialization error: {details}")]
    SerializationError { format: String, details: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, WiringError>;

impl WiringError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WiringError::DuplicateNode { .. } => ErrorCode::DuplicateNode,
            WiringError::DuplicateLink { .. } => ErrorCode::DuplicateLink,
            WiringError::DanglingLink { .. } => ErrorCode::DanglingLink,
            WiringError::NotDeployed { .. } => ErrorCode::NotDeployed,
            WiringError::NetworkUnavailable { .. } => ErrorCode::NetworkUnavailable,
            WiringError::ResolutionFailed { .. } => ErrorCode::ResolutionFailed,
            WiringError::NoSignerConfigured { .. } => ErrorCode::NoSignerConfigured,
            WiringError::SubmissionRejected { .. } => ErrorCode::SubmissionRejected,
            WiringError::ConfirmationTimeout { .. } => ErrorCode::ConfirmationTimeout,
            WiringError::ConfirmationFailed { .. } => ErrorCode::ConfirmationFailed,
            WiringError::InvalidStateTransition { .. } => ErrorCode::InvalidStateTransition,
            WiringError::ConfigError(_) => ErrorCode::ConfigError,
            WiringError::SerializationError { .. } => ErrorCode::SerializationError,
            WiringError::Message(_) => ErrorCode::Message,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            ErrorCode::DuplicateNode | ErrorCode::DuplicateLink | ErrorCode::DanglingLink => ErrorCategory::Validation,
            ErrorCode::NotDeployed | ErrorCode::NetworkUnavailable | ErrorCode::ResolutionFailed | ErrorCode::NoSignerConfigured => {
                ErrorCategory::Resolution
            }
            ErrorCode::SubmissionRejected => ErrorCategory::Submission,
            ErrorCode::ConfirmationTimeout | ErrorCode::ConfirmationFailed => ErrorCategory::Confirmation,
            ErrorCode::InvalidStateTransition | ErrorCode::ConfigError | ErrorCode::SerializationError | ErrorCode::Message => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext { code: self.code(), category: self.category(), message: self.to_string() }
    }

    pub fn not_deployed(point: impl Into<String>) -> Self {
        WiringError::NotDeployed { point: point.into() }
    }

    pub fn network_unavailable(network: impl Into<String>, details: impl Into<String>) -> Self {
        WiringError::NetworkUnavailable { network: network.into(), details: details.into() }
    }

    pub fn resolution_failed(point: impl Into<String>, details: impl Into<String>) -> Self {
        WiringError::ResolutionFailed { point: point.into(), details: details.into() }
    }

    pub fn no_signer_configured(network: impl Into<String>) -> Self {
        WiringError::NoSignerConfigured { network: network.into() }
    }

    pub fn submission_rejected(point: impl Into<String>, description: impl Into<String>, details: impl Into<String>) -> Self {
        WiringError::SubmissionRejected { point: point.into(), description: description.into(), details: details.into() }
    }
}

impl From<serde_json::Error> for WiringError {
    fn from(err: serde_json::Error) -> Self {
        WiringError::SerializationError { format: "json".to_string(), details: err.to_string() }
    }
}

// NOTE: Avoid adding generic "stringly" error conversions here.
// Use structured `WiringError` variants at the call site to preserve context.
