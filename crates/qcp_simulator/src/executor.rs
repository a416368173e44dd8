//! Circuit execution.
//!
//! The executor owns the lifecycle of a simulation: it allocates the state
//! buffer, walks the circuit's steps in order, and drives the gate kernels.
//! It is also the only place where per-step disjointness is enforced; the
//! kernels themselves assume validated inputs.

use qcp_core::prelude::*;
use tracing::{debug, trace};

use crate::state_vector::StateVector;

/// Executes a circuit from |0...0⟩ and returns the final state.
///
/// Each step is validated before any of its operations touch the buffer:
/// every referenced qubit must be in range, controlled gates need distinct
/// control and target, and no qubit may be touched by more than one
/// operation in the same step. Within a validated step the operations act
/// on disjoint qubits, so their application order is unobservable.
///
/// # Example
///
/// ```rust
/// use qcp_core::prelude::*;
/// use qcp_simulator::simulate;
///
/// let mut circuit = Circuit::new(2);
/// circuit.push_step(vec![Gate::H { target: 0 }]).unwrap();
/// circuit
///     .push_step(vec![Gate::Cnot { control: 0, target: 1 }])
///     .unwrap();
///
/// let state = simulate(&circuit).unwrap();
/// assert!(state.is_normalized());
/// ```
pub fn simulate(circuit: &Circuit) -> Result<StateVector> {
    let mut state = StateVector::zero_state(circuit.num_qubits)?;

    debug!(
        num_qubits = circuit.num_qubits,
        steps = circuit.step_count(),
        gates = circuit.gate_count(),
        "simulating circuit"
    );

    for (index, step) in circuit.steps.iter().enumerate() {
        validate_step(circuit.num_qubits, step)?;
        trace!(step = index, gates = step.len(), "applying step");

        for gate in step {
            state.apply_gate(gate)?;
        }
    }

    Ok(state)
}

/// Checks one step: qubit ranges, gate arguments, and disjoint supports.
///
/// Support sets per operation: single-qubit gates and `Measure` touch their
/// target; `CNOT`/`CZ` touch control and target; `SWAP` touches both of its
/// indices (once, when they coincide).
fn validate_step(num_qubits: usize, step: &[Gate]) -> Result<()> {
    // Qubit indices are capped at 20, so a u32 bitmap covers the register.
    let mut touched: u32 = 0;

    for gate in step {
        let mut support: u32 = 0;
        for q in gate.qubits() {
            if q >= num_qubits {
                return Err(QcpError::InvalidQubitIndex(q, num_qubits));
            }
            support |= 1 << q;
        }

        match *gate {
            Gate::Cnot { control, target } | Gate::Cz { control, target }
                if control == target =>
            {
                return Err(QcpError::invalid_gate_args(format!(
                    "{} control and target must differ",
                    gate
                )));
            }
            _ => {}
        }

        let clash = touched & support;
        if clash != 0 {
            return Err(QcpError::InvalidStep(clash.trailing_zeros() as usize));
        }
        touched |= support;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const TOLERANCE: f64 = 1e-9;

    fn assert_amp(state: &StateVector, index: usize, re: f64, im: f64) {
        let amp = state.amplitude(index);
        assert!(
            (amp.re - re).abs() < TOLERANCE && (amp.im - im).abs() < TOLERANCE,
            "amplitude[{}] = ({}, {}), expected ({}, {})",
            index,
            amp.re,
            amp.im,
            re,
            im
        );
    }

    #[test]
    fn test_empty_circuit() {
        let state = simulate(&Circuit::new(2)).unwrap();
        assert_amp(&state, 0, 1.0, 0.0);
        assert!(state.is_normalized());
    }

    #[test]
    fn test_invalid_qubit_count_rejected() {
        assert!(simulate(&Circuit::new(0)).is_err());
        assert!(simulate(&Circuit::new(21)).is_err());
    }

    #[test]
    fn test_hadamard_on_zero() {
        let mut circuit = Circuit::new(1);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();

        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, FRAC_1_SQRT_2, 0.0);
        assert_amp(&state, 1, FRAC_1_SQRT_2, 0.0);
    }

    #[test]
    fn test_bell_pair() {
        let mut circuit = Circuit::new(2);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();
        circuit
            .push_gate(Gate::Cnot {
                control: 0,
                target: 1,
            })
            .unwrap();

        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, FRAC_1_SQRT_2, 0.0);
        assert_amp(&state, 1, 0.0, 0.0);
        assert_amp(&state, 2, 0.0, 0.0);
        assert_amp(&state, 3, FRAC_1_SQRT_2, 0.0);
    }

    #[test]
    fn test_ghz_three() {
        let mut circuit = Circuit::new(3);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();
        circuit
            .push_gate(Gate::Cnot {
                control: 0,
                target: 1,
            })
            .unwrap();
        circuit
            .push_gate(Gate::Cnot {
                control: 1,
                target: 2,
            })
            .unwrap();

        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, FRAC_1_SQRT_2, 0.0);
        assert_amp(&state, 7, FRAC_1_SQRT_2, 0.0);
        for k in 1..7 {
            assert_amp(&state, k, 0.0, 0.0);
        }
    }

    #[test]
    fn test_rx_pi_on_zero() {
        let mut circuit = Circuit::new(1);
        circuit
            .push_gate(Gate::Rx {
                target: 0,
                theta: PI,
            })
            .unwrap();

        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, 0.0, 0.0);
        assert_amp(&state, 1, 0.0, -1.0);
    }

    #[test]
    fn test_swap_carries_excitation_to_qubit_zero() {
        let mut circuit = Circuit::new(2);
        circuit.push_gate(Gate::X { target: 1 }).unwrap();
        circuit.push_gate(Gate::Swap { a: 0, b: 1 }).unwrap();

        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 2, 1.0, 0.0);
        for k in [0, 1, 3] {
            assert_amp(&state, k, 0.0, 0.0);
        }
    }

    #[test]
    fn test_parallel_step_matches_sequential() {
        let mut parallel = Circuit::new(3);
        parallel
            .push_step(vec![
                Gate::H { target: 0 },
                Gate::X { target: 1 },
                Gate::T { target: 2 },
            ])
            .unwrap();

        let mut sequential = Circuit::new(3);
        sequential.push_gate(Gate::H { target: 0 }).unwrap();
        sequential.push_gate(Gate::X { target: 1 }).unwrap();
        sequential.push_gate(Gate::T { target: 2 }).unwrap();

        let a = simulate(&parallel).unwrap();
        let b = simulate(&sequential).unwrap();
        assert!((a.fidelity(&b).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_step_conflict_rejected() {
        let mut circuit = Circuit::new(2);
        circuit
            .push_step(vec![Gate::H { target: 0 }, Gate::X { target: 0 }])
            .unwrap();

        assert!(matches!(
            simulate(&circuit),
            Err(QcpError::InvalidStep(0))
        ));
    }

    #[test]
    fn test_step_conflict_through_two_qubit_gate() {
        let mut circuit = Circuit::new(3);
        circuit
            .push_step(vec![
                Gate::Cnot {
                    control: 0,
                    target: 1,
                },
                Gate::Z { target: 1 },
            ])
            .unwrap();

        assert!(matches!(simulate(&circuit), Err(QcpError::InvalidStep(1))));
    }

    #[test]
    fn test_measure_shares_support_rules() {
        // MEASURE touches its target like any other operation.
        let mut circuit = Circuit::new(2);
        circuit
            .push_step(vec![Gate::Measure { target: 0 }, Gate::H { target: 0 }])
            .unwrap();
        assert!(matches!(simulate(&circuit), Err(QcpError::InvalidStep(0))));

        // But on its own it executes as the identity.
        let mut circuit = Circuit::new(2);
        circuit.push_gate(Gate::H { target: 0 }).unwrap();
        circuit.push_gate(Gate::Measure { target: 0 }).unwrap();
        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, FRAC_1_SQRT_2, 0.0);
        assert_amp(&state, 2, FRAC_1_SQRT_2, 0.0);
    }

    #[test]
    fn test_controlled_gate_needs_distinct_qubits() {
        // Built without the builder so the executor sees the raw step.
        let circuit = Circuit {
            num_qubits: 2,
            steps: vec![vec![Gate::Cnot {
                control: 1,
                target: 1,
            }]],
        };
        assert!(matches!(
            simulate(&circuit),
            Err(QcpError::InvalidGateArgs(_))
        ));
    }

    #[test]
    fn test_out_of_range_qubit_rejected() {
        let circuit = Circuit {
            num_qubits: 2,
            steps: vec![vec![Gate::H { target: 4 }]],
        };
        assert!(matches!(
            simulate(&circuit),
            Err(QcpError::InvalidQubitIndex(4, 2))
        ));
    }

    #[test]
    fn test_norm_preserved_on_random_circuits() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0xC1C1);

        for _ in 0..20 {
            let num_qubits = rng.gen_range(1..=4);
            let mut circuit = Circuit::new(num_qubits);

            for _ in 0..50 {
                let target = rng.gen_range(0..num_qubits);
                let gate = match rng.gen_range(0..12) {
                    0 => Gate::H { target },
                    1 => Gate::X { target },
                    2 => Gate::Y { target },
                    3 => Gate::Z { target },
                    4 => Gate::S { target },
                    5 => Gate::T { target },
                    6 => Gate::Rx {
                        target,
                        theta: rng.gen_range(-PI..PI),
                    },
                    7 => Gate::Ry {
                        target,
                        theta: rng.gen_range(-PI..PI),
                    },
                    8 => Gate::Rz {
                        target,
                        theta: rng.gen_range(-PI..PI),
                    },
                    9 if num_qubits > 1 => Gate::Cnot {
                        control: target,
                        target: (target + 1) % num_qubits,
                    },
                    10 if num_qubits > 1 => Gate::Cz {
                        control: target,
                        target: (target + 1) % num_qubits,
                    },
                    11 if num_qubits > 1 => Gate::Swap {
                        a: target,
                        b: (target + 1) % num_qubits,
                    },
                    _ => Gate::Measure { target },
                };
                circuit.push_gate(gate).unwrap();
            }

            let state = simulate(&circuit).unwrap();
            assert!(
                (state.norm_sqr() - 1.0).abs() < 1e-9,
                "norm drifted to {}",
                state.norm_sqr()
            );
        }
    }

    #[test]
    fn test_swap_on_same_qubit_counts_once() {
        // SWAP(q, q) is the identity and touches q a single time, so the
        // step is still well formed.
        let circuit = Circuit {
            num_qubits: 2,
            steps: vec![vec![Gate::Swap { a: 0, b: 0 }, Gate::H { target: 1 }]],
        };
        let state = simulate(&circuit).unwrap();
        assert_amp(&state, 0, FRAC_1_SQRT_2, 0.0);
        assert_amp(&state, 1, FRAC_1_SQRT_2, 0.0);
    }
}
