//! Read-only observables derived from a state vector.
//!
//! Everything in this module takes the state by shared reference: the
//! per-qubit Bloch vector obtained by tracing out the rest of the register,
//! and the basis-index/bitstring conversions the result panel renders.

use num_complex::Complex64;
use qcp_core::prelude::*;

use crate::state_vector::StateVector;

/// Computes the Bloch vector of one qubit by partial trace.
///
/// Accumulates the reduced density matrix over basis pairs that differ only
/// in the target bit and returns `(x, y, z) = (2·Re ρ01, -2·Im ρ01,
/// ρ00 - ρ11)`. The sign of `y` is part of the contract: `H|0⟩` maps to
/// `(+1, 0, 0)` and `S·H|0⟩` to `(0, +1, 0)`.
///
/// For a pure, unentangled qubit the vector has length 1; entanglement pulls
/// it strictly inside the unit ball.
pub fn bloch_vector(state: &StateVector, qubit: usize) -> Result<(f64, f64, f64)> {
    if qubit >= state.num_qubits() {
        return Err(QcpError::InvalidQubitIndex(qubit, state.num_qubits()));
    }

    let mask = state.mask(qubit);
    let mut rho_00 = 0.0;
    let mut rho_11 = 0.0;
    let mut rho_01 = Complex64::new(0.0, 0.0);

    for i in 0..state.dimension() {
        if i & mask != 0 {
            continue;
        }
        let j = i | mask;

        let a = state.amplitude(i);
        let b = state.amplitude(j);

        rho_00 += a.norm_sqr();
        rho_11 += b.norm_sqr();
        rho_01 += a * b.conj();
    }

    Ok((2.0 * rho_01.re, -2.0 * rho_01.im, rho_00 - rho_11))
}

/// Formats a basis index as an n-character bitstring, qubit 0 leftmost.
///
/// This is plain binary: qubit 0 is the most-significant bit of the basis
/// index, so the zero-padded binary representation already reads q0-first.
pub fn bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Parses a bitstring back into a basis index.
///
/// Returns `None` if the length is not `num_qubits` or any character is not
/// `'0'`/`'1'`.
pub fn bitstring_to_index(bits: &str, num_qubits: usize) -> Option<usize> {
    if bits.len() != num_qubits {
        return None;
    }

    let mut index = 0;
    for c in bits.chars() {
        index <<= 1;
        match c {
            '1' => index |= 1,
            '0' => {}
            _ => return None,
        }
    }
    Some(index)
}
