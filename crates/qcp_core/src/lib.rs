//! # QCP Core
//!
//! Core types for QCP (Quantum Circuit Playground).
//!
//! This crate provides:
//! - `Gate`: the closed gate catalogue with its tagged wire representation
//! - `Circuit`: a qubit count plus an ordered sequence of steps
//! - `SharePayload`: the versioned JSON structure the sharing layer exchanges
//! - `Limits`: host policy caps for circuit width and shot count
//! - `QcpError`: unified error types
//! - Complex helpers and single-qubit gate matrices
//!
//! ## Example
//!
//! ```rust
//! use qcp_core::prelude::*;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.push_step(vec![Gate::H { target: 0 }]).unwrap();
//! circuit
//!     .push_step(vec![Gate::Cnot { control: 0, target: 1 }])
//!     .unwrap();
//!
//! // The circuit round-trips through the share-link wire format.
//! let payload = SharePayload::new(circuit, 1337.0, 1024.0);
//! let json = payload.encode().unwrap();
//! assert_eq!(SharePayload::decode(&json).unwrap(), payload);
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod prelude;
pub mod share;
pub mod types;

pub use config::{Limits, MAX_QUBITS};
pub use error::{QcpError, Result};
pub use share::SharePayload;
pub use types::{Circuit, Gate, Step};
