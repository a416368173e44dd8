//! Circuit data structure.

use super::Gate;
use crate::error::{QcpError, Result};
use serde::{Deserialize, Serialize};

/// One time slice of a circuit.
///
/// The wire format keeps steps ordered, but within a step the order is
/// immaterial: the executor rejects steps whose operations share a qubit,
/// so the surviving operations commute.
pub type Step = Vec<Gate>;

/// Quantum circuit representation.
///
/// A circuit is a qubit count plus an ordered sequence of steps. Steps run
/// in order; the operations inside one step act on disjoint qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits the circuit acts on
    #[serde(rename = "nQubits")]
    pub num_qubits: usize,
    /// Ordered sequence of time steps
    pub steps: Vec<Step>,
}

impl Circuit {
    /// Creates a new empty circuit with the specified number of qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            steps: Vec::new(),
        }
    }

    /// Creates a circuit with pre-allocated step capacity.
    pub fn with_capacity(num_qubits: usize, step_capacity: usize) -> Self {
        Self {
            num_qubits,
            steps: Vec::with_capacity(step_capacity),
        }
    }

    /// Appends a step to the circuit.
    ///
    /// Returns an error if any gate in the step references a qubit outside
    /// `0..num_qubits`. Disjointness inside the step is the executor's
    /// concern, not the builder's.
    pub fn push_step(&mut self, step: Step) -> Result<()> {
        for gate in &step {
            for q in gate.qubits() {
                if q >= self.num_qubits {
                    return Err(QcpError::InvalidQubitIndex(q, self.num_qubits));
                }
            }
        }
        self.steps.push(step);
        Ok(())
    }

    /// Appends a single gate as its own step.
    pub fn push_gate(&mut self, gate: Gate) -> Result<()> {
        self.push_step(vec![gate])
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the total gate count across all steps.
    pub fn gate_count(&self) -> usize {
        self.steps.iter().map(|s| s.len()).sum()
    }

    /// Returns true if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gate_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits, 3);
        assert!(circuit.steps.is_empty());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_push_gate() {
        let mut circuit = Circuit::new(3);
        assert!(circuit.push_gate(Gate::H { target: 0 }).is_ok());
        assert!(circuit
            .push_gate(Gate::Cnot {
                control: 0,
                target: 1
            })
            .is_ok());
        assert_eq!(circuit.step_count(), 2);
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn test_push_step_parallel_gates() {
        let mut circuit = Circuit::new(3);
        circuit
            .push_step(vec![
                Gate::H { target: 0 },
                Gate::X { target: 1 },
                Gate::T { target: 2 },
            ])
            .unwrap();
        assert_eq!(circuit.step_count(), 1);
        assert_eq!(circuit.gate_count(), 3);
    }

    #[test]
    fn test_push_invalid_qubit() {
        let mut circuit = Circuit::new(2);
        assert!(circuit.push_gate(Gate::H { target: 2 }).is_err());
        assert!(circuit
            .push_step(vec![Gate::Cnot {
                control: 0,
                target: 5
            }])
            .is_err());
        // A failed push leaves the circuit untouched.
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_wire_format_uses_n_qubits() {
        let mut circuit = Circuit::new(2);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();
        let value = serde_json::to_value(&circuit).unwrap();
        assert_eq!(value["nQubits"], 2);
        assert!(value["steps"].is_array());
    }

    #[test]
    fn test_wire_roundtrip() {
        let mut circuit = Circuit::new(2);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();
        circuit
            .push_gate(Gate::Cnot {
                control: 0,
                target: 1,
            })
            .unwrap();

        let encoded = serde_json::to_string(&circuit).unwrap();
        let decoded: Circuit = serde_json::from_str(&encoded).unwrap();
        assert_eq!(circuit, decoded);
    }
}
