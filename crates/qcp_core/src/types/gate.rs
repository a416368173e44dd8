//! Quantum gate definitions.
//!
//! Gates are a closed catalogue: six parameterless single-qubit gates, three
//! single-qubit rotations, three two-qubit gates, and a `Measure` marker.
//! The serde representation is the tagged record the share-link layer
//! exchanges, e.g. `{"kind":"CNOT","control":0,"target":1}`.

use crate::math::{self, Matrix2x2};
use serde::{Deserialize, Serialize};

/// Quantum gate enumeration.
///
/// `Measure` is recognized and validated like any other operation but the
/// engine executes it as the identity; sampling happens once, against the
/// final distribution.
///
/// # Example
///
/// ```
/// use qcp_core::prelude::*;
///
/// let h = Gate::H { target: 0 };
/// let cnot = Gate::Cnot { control: 0, target: 1 };
///
/// assert_eq!(h.qubits(), vec![0]);
/// assert_eq!(cnot.qubits(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Gate {
    // Single-qubit gates (parameterless)
    /// Hadamard gate
    H { target: usize },
    /// Pauli-X (NOT) gate
    X { target: usize },
    /// Pauli-Y gate
    Y { target: usize },
    /// Pauli-Z gate
    Z { target: usize },
    /// S gate (√Z, phase gate)
    S { target: usize },
    /// T gate (π/8 gate)
    T { target: usize },

    // Single-qubit rotation gates
    /// Rotation around the X-axis by angle theta (radians)
    #[serde(rename = "RX")]
    Rx { target: usize, theta: f64 },
    /// Rotation around the Y-axis by angle theta (radians)
    #[serde(rename = "RY")]
    Ry { target: usize, theta: f64 },
    /// Rotation around the Z-axis by angle theta (radians)
    #[serde(rename = "RZ")]
    Rz { target: usize, theta: f64 },

    // Two-qubit gates
    /// Controlled-NOT gate
    #[serde(rename = "CNOT")]
    Cnot { control: usize, target: usize },
    /// Controlled-Z gate
    #[serde(rename = "CZ")]
    Cz { control: usize, target: usize },
    /// SWAP gate
    #[serde(rename = "SWAP")]
    Swap { a: usize, b: usize },

    // Measurement marker
    /// Measurement in the computational basis
    #[serde(rename = "MEASURE")]
    Measure { target: usize },
}

impl Gate {
    /// Returns the qubit indices this gate operates on.
    ///
    /// For single-qubit gates, returns a single-element vector.
    /// For two-qubit gates, returns both indices in declaration order.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H { target }
            | Gate::X { target }
            | Gate::Y { target }
            | Gate::Z { target }
            | Gate::S { target }
            | Gate::T { target }
            | Gate::Rx { target, .. }
            | Gate::Ry { target, .. }
            | Gate::Rz { target, .. }
            | Gate::Measure { target } => vec![target],
            Gate::Cnot { control, target } | Gate::Cz { control, target } => {
                vec![control, target]
            }
            Gate::Swap { a, b } => vec![a, b],
        }
    }

    /// Returns true if this is a single-qubit unitary gate.
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H { .. }
                | Gate::X { .. }
                | Gate::Y { .. }
                | Gate::Z { .. }
                | Gate::S { .. }
                | Gate::T { .. }
                | Gate::Rx { .. }
                | Gate::Ry { .. }
                | Gate::Rz { .. }
        )
    }

    /// Returns true if this is a two-qubit gate.
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cnot { .. } | Gate::Cz { .. } | Gate::Swap { .. })
    }

    /// Returns true if this is a measurement marker.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure { .. })
    }

    /// Returns the 2x2 matrix representation for single-qubit gates.
    ///
    /// Returns `None` for two-qubit gates and measurements.
    pub fn matrix(&self) -> Option<Matrix2x2> {
        match *self {
            Gate::H { .. } => Some(math::HADAMARD),
            Gate::X { .. } => Some(math::PAULI_X),
            Gate::Y { .. } => Some(math::PAULI_Y),
            Gate::Z { .. } => Some(math::PAULI_Z),
            Gate::S { .. } => Some(math::S_GATE),
            Gate::T { .. } => Some(math::T_GATE),
            Gate::Rx { theta, .. } => Some(math::rx(theta)),
            Gate::Ry { theta, .. } => Some(math::ry(theta)),
            Gate::Rz { theta, .. } => Some(math::rz(theta)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Gate::H { target } => write!(f, "H({})", target),
            Gate::X { target } => write!(f, "X({})", target),
            Gate::Y { target } => write!(f, "Y({})", target),
            Gate::Z { target } => write!(f, "Z({})", target),
            Gate::S { target } => write!(f, "S({})", target),
            Gate::T { target } => write!(f, "T({})", target),
            Gate::Rx { target, theta } => write!(f, "RX({}, {:.4})", target, theta),
            Gate::Ry { target, theta } => write!(f, "RY({}, {:.4})", target, theta),
            Gate::Rz { target, theta } => write!(f, "RZ({}, {:.4})", target, theta),
            Gate::Cnot { control, target } => write!(f, "CNOT({}, {})", control, target),
            Gate::Cz { control, target } => write!(f, "CZ({}, {})", control, target),
            Gate::Swap { a, b } => write!(f, "SWAP({}, {})", a, b),
            Gate::Measure { target } => write!(f, "MEASURE({})", target),
        }
    }
}
