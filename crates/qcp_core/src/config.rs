//! Configuration for QCP.

use serde::{Deserialize, Serialize};

/// Hard cap on the engine's qubit count.
///
/// The state buffer takes `2^(n+4)` bytes for the pair of double arrays;
/// 20 qubits is about 16 MiB and is the guarantee-of-success ceiling.
pub const MAX_QUBITS: usize = 20;

/// Default cap on the number of sampling shots a front end may request.
pub const DEFAULT_MAX_SHOTS: usize = 200_000;

/// Policy limits applied at the share-payload boundary.
///
/// These are policy, not protocol: the engine itself only enforces the hard
/// `1..=MAX_QUBITS` cap, while front ends stay well below it. Hosts can
/// tighten or relax these without touching the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum accepted circuit width
    pub max_qubits: usize,
    /// Maximum accepted shot count
    pub max_shots: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
            max_shots: DEFAULT_MAX_SHOTS,
        }
    }
}

impl Limits {
    /// Creates limits with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads limits from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Serializes limits to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
