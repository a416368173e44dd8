//! # QCP Simulator
//!
//! Deterministic state-vector engine for QCP (Quantum Circuit Playground).
//!
//! ## Modules
//! - **state_vector**: the dense amplitude buffer and in-place gate kernels.
//! - **executor**: stepwise circuit execution with per-step validation.
//! - **observables**: probabilities, Bloch vectors, bitstring formatting.
//! - **sampler**: seeded multinomial sampling with the Mulberry32 PRNG.
//!
//! The engine is single-threaded and synchronous: `simulate` owns its state
//! buffer exclusively, observables and the sampler take read-only views, and
//! identical (circuit, shots, seed) triples produce byte-identical counts.
//!
//! ## Example
//!
//! ```rust
//! use qcp_core::prelude::*;
//! use qcp_simulator::{bitstring, sample_all_qubits, simulate};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.push_step(vec![Gate::H { target: 0 }]).unwrap();
//! circuit
//!     .push_step(vec![Gate::Cnot { control: 0, target: 1 }])
//!     .unwrap();
//!
//! let state = simulate(&circuit).unwrap();
//! let counts = sample_all_qubits(&state.probabilities(), 1024, 1337);
//!
//! // A Bell pair only ever measures |00⟩ or |11⟩.
//! assert_eq!(counts.iter().sum::<u64>(), 1024);
//! assert_eq!(counts[1], 0);
//! assert_eq!(counts[2], 0);
//! assert_eq!(bitstring(3, 2), "11");
//! ```

pub mod executor;
pub mod observables;
pub mod sampler;
pub mod state_vector;

pub use executor::simulate;
pub use observables::{bitstring, bitstring_to_index, bloch_vector};
pub use sampler::{coerce_seed, coerce_shots, sample_all_qubits, Mulberry32};
pub use state_vector::StateVector;
