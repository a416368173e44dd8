//! Complex arithmetic helpers and gate matrices.
//!
//! This module provides:
//! - The `C64` complex amplitude type and common constants
//! - 2x2 matrices for the supported single-qubit gate catalogue
//! - Utility functions for matrix checks used across the workspace

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Complex number type alias for readability.
pub type C64 = Complex64;

/// Create a complex number from real and imaginary parts.
#[inline]
pub const fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Complex zero.
pub const ZERO: C64 = C64::new(0.0, 0.0);

/// Complex one.
pub const ONE: C64 = C64::new(1.0, 0.0);

/// Complex imaginary unit i.
pub const I: C64 = C64::new(0.0, 1.0);

/// 1/√2 as complex number.
pub const FRAC_1_SQRT_2_C: C64 = C64::new(FRAC_1_SQRT_2, 0.0);

// ============================================================================
// Gate Matrices
// ============================================================================

/// 2x2 matrix type: [[a, b], [c, d]]
pub type Matrix2x2 = [[C64; 2]; 2];

/// Identity matrix I.
pub const IDENTITY: Matrix2x2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (NOT) gate.
/// |0⟩ → |1⟩, |1⟩ → |0⟩
pub const PAULI_X: Matrix2x2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate.
/// |0⟩ → i|1⟩, |1⟩ → -i|0⟩
pub const PAULI_Y: Matrix2x2 = [[ZERO, C64::new(0.0, -1.0)], [I, ZERO]];

/// Pauli-Z gate.
/// |0⟩ → |0⟩, |1⟩ → -|1⟩
pub const PAULI_Z: Matrix2x2 = [[ONE, ZERO], [ZERO, C64::new(-1.0, 0.0)]];

/// Hadamard gate.
/// |0⟩ → (|0⟩ + |1⟩)/√2, |1⟩ → (|0⟩ - |1⟩)/√2
pub const HADAMARD: Matrix2x2 = [
    [FRAC_1_SQRT_2_C, FRAC_1_SQRT_2_C],
    [FRAC_1_SQRT_2_C, C64::new(-FRAC_1_SQRT_2, 0.0)],
];

/// S gate (√Z, phase gate).
/// |0⟩ → |0⟩, |1⟩ → i|1⟩
pub const S_GATE: Matrix2x2 = [[ONE, ZERO], [ZERO, I]];

/// T gate (π/8 gate).
/// |0⟩ → |0⟩, |1⟩ → e^(iπ/4)|1⟩
pub const T_GATE: Matrix2x2 = [[ONE, ZERO], [ZERO, C64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]];

/// Computes the Rx(θ) rotation matrix.
/// Rx(θ) = cos(θ/2)I - i·sin(θ/2)X
pub fn rx(theta: f64) -> Matrix2x2 {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    [[c(cos, 0.0), c(0.0, -sin)], [c(0.0, -sin), c(cos, 0.0)]]
}

/// Computes the Ry(θ) rotation matrix.
/// Ry(θ) = cos(θ/2)I - i·sin(θ/2)Y
pub fn ry(theta: f64) -> Matrix2x2 {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    [[c(cos, 0.0), c(-sin, 0.0)], [c(sin, 0.0), c(cos, 0.0)]]
}

/// Computes the Rz(θ) rotation matrix.
/// Rz(θ) = e^(-iθ/2)|0⟩⟨0| + e^(iθ/2)|1⟩⟨1|
pub fn rz(theta: f64) -> Matrix2x2 {
    let half = theta / 2.0;
    [
        [c(half.cos(), -half.sin()), ZERO],
        [ZERO, c(half.cos(), half.sin())],
    ]
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Computes the Hermitian conjugate (conjugate transpose) of a 2x2 matrix.
pub fn dagger_2x2(m: &Matrix2x2) -> Matrix2x2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Multiplies two 2x2 matrices.
pub fn mul_2x2(a: &Matrix2x2, b: &Matrix2x2) -> Matrix2x2 {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// Checks if a 2x2 matrix is approximately unitary (U†U ≈ I).
pub fn is_unitary_2x2(m: &Matrix2x2, tolerance: f64) -> bool {
    let product = mul_2x2(&dagger_2x2(m), m);

    (product[0][0] - ONE).norm() < tolerance
        && product[0][1].norm() < tolerance
        && product[1][0].norm() < tolerance
        && (product[1][1] - ONE).norm() < tolerance
}
