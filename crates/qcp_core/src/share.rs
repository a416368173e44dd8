//! Share-link payload.
//!
//! The sharing collaborator encodes a circuit together with its sampling
//! parameters as a small versioned JSON document. The core does not produce
//! links itself, but its data model must round-trip through this structure,
//! and decoding applies the format checks the collaborator relies on.

use crate::config::Limits;
use crate::error::{QcpError, Result};
use crate::types::Circuit;
use serde::{Deserialize, Serialize};

/// Current share payload format version.
pub const SHARE_VERSION: u32 = 1;

/// Versioned share-link payload: a circuit plus sampling parameters.
///
/// `seed` and `shots` travel as JSON numbers and may arrive fractional or
/// negative from foreign encoders; the sampler's coercion rules turn them
/// into a `u32` seed and a shot count. Decoding only guarantees they are
/// finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Format version, always [`SHARE_VERSION`]
    pub v: u32,
    /// The shared circuit
    pub circuit: Circuit,
    /// Sampler seed as encoded on the wire
    pub seed: f64,
    /// Requested shot count as encoded on the wire
    pub shots: f64,
}

impl SharePayload {
    /// Creates a payload at the current format version.
    pub fn new(circuit: Circuit, seed: f64, shots: f64) -> Self {
        Self {
            v: SHARE_VERSION,
            circuit,
            seed,
            shots,
        }
    }

    /// Serializes the payload to its wire JSON.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Decodes a payload from wire JSON.
    ///
    /// Rejects documents whose version is not [`SHARE_VERSION`], whose
    /// `nQubits` is not an integer, whose `steps` is not a list, or whose
    /// `seed` or `shots` is not finite.
    pub fn decode(json: &str) -> Result<Self> {
        let payload: Self = serde_json::from_str(json)?;
        if payload.v != SHARE_VERSION {
            return Err(QcpError::UnsupportedVersion(payload.v));
        }
        if !payload.seed.is_finite() {
            return Err(QcpError::malformed("seed is not finite"));
        }
        if !payload.shots.is_finite() {
            return Err(QcpError::malformed("shots is not finite"));
        }
        Ok(payload)
    }

    /// Checks the payload against host policy limits.
    ///
    /// The decode step accepts anything structurally valid; this is where a
    /// host rejects circuits or shot counts it is not willing to run.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        let n = self.circuit.num_qubits;
        if n == 0 || n > limits.max_qubits {
            return Err(QcpError::InvalidQubitCount(n, limits.max_qubits));
        }
        if self.shots > limits.max_shots as f64 {
            return Err(QcpError::malformed(format!(
                "shots {} exceeds the limit of {}",
                self.shots, limits.max_shots
            )));
        }
        Ok(())
    }
}
