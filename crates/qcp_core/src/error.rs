//! Error types for QCP.

use thiserror::Error;

/// Unified error type for QCP operations.
#[derive(Error, Debug)]
pub enum QcpError {
    // ============ Engine Errors ============
    /// Qubit count outside the supported range
    #[error("invalid qubit count {0}, supported range is 1..={1}")]
    InvalidQubitCount(usize, usize),

    /// Qubit reference out of range for the circuit width
    #[error("invalid qubit index {0}, circuit has {1} qubits")]
    InvalidQubitIndex(usize, usize),

    /// Structurally malformed gate operation
    #[error("invalid gate arguments: {0}")]
    InvalidGateArgs(String),

    /// Two operations in the same step touch the same qubit
    #[error("step conflict: qubit {0} is touched by more than one operation")]
    InvalidStep(usize),

    /// State vector dimension mismatch
    #[error("dimension mismatch: expected {0}, got {1}")]
    DimensionMismatch(usize, usize),

    // ============ Share Payload Errors ============
    /// Share payload carries an unknown format version
    #[error("unsupported share payload version {0}")]
    UnsupportedVersion(u32),

    /// Share payload is structurally valid JSON but violates the format
    #[error("malformed share payload: {0}")]
    MalformedPayload(String),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for QCP operations.
pub type Result<T> = std::result::Result<T, QcpError>;

impl QcpError {
    /// Creates an invalid-gate-arguments error with the given message.
    pub fn invalid_gate_args(msg: impl Into<String>) -> Self {
        Self::InvalidGateArgs(msg.into())
    }

    /// Creates a malformed-payload error with the given message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }
}
