//! Dense state-vector buffer and gate kernels.
//!
//! The state of an n-qubit system is kept as two contiguous `f64` buffers
//! holding the real and imaginary parts of `2^n` amplitudes. Gates mutate
//! the buffers in place; nothing here allocates after construction.
//!
//! ## Basis-index convention
//!
//! Qubit `q` occupies bit `n-1-q` of the basis index: qubit 0 is the
//! most-significant bit. The bitstring rendered for basis `k` is the binary
//! representation of `k` zero-padded to `n` digits with qubit 0 leftmost.
//! Every kernel derives its pair-iteration mask from [`StateVector::mask`],
//! which is the single place this convention is encoded.
//!
//! ## Example
//!
//! ```rust
//! use qcp_simulator::StateVector;
//!
//! let mut state = StateVector::zero_state(2).unwrap();
//! state.apply_h(0).unwrap();
//! state.apply_cnot(0, 1).unwrap();
//!
//! // Bell pair: (|00⟩ + |11⟩)/√2
//! let probs = state.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//! ```

use num_complex::Complex64;
use qcp_core::math::{self, Matrix2x2};
use qcp_core::prelude::*;

/// Dense pure-state vector over `2^n` basis amplitudes.
///
/// Memory usage is `2^(n+4)` bytes for the two double buffers, which caps
/// out around 16 MiB at the hard limit of 20 qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,
    /// Real parts, indexed by basis integer
    re: Vec<f64>,
    /// Imaginary parts, indexed by basis integer
    im: Vec<f64>,
}

impl StateVector {
    /// Creates the all-zeros computational basis state |0...0⟩.
    ///
    /// Fails with `InvalidQubitCount` unless `1 <= num_qubits <= 20`.
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(QcpError::InvalidQubitCount(num_qubits, MAX_QUBITS));
        }

        let dimension = 1usize << num_qubits;
        let mut re = vec![0.0; dimension];
        let im = vec![0.0; dimension];
        re[0] = 1.0;

        Ok(Self { num_qubits, re, im })
    }

    /// Returns the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the dimension of the state space (2^n).
    pub fn dimension(&self) -> usize {
        self.re.len()
    }

    /// Resets the buffer to |0...0⟩ without reallocating.
    pub fn reset(&mut self) {
        self.re.fill(0.0);
        self.im.fill(0.0);
        self.re[0] = 1.0;
    }

    /// Returns the amplitude for a specific basis state.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        if index < self.re.len() {
            Complex64::new(self.re[index], self.im[index])
        } else {
            Complex64::new(0.0, 0.0)
        }
    }

    /// Bit mask selecting qubit `q` inside a basis index.
    ///
    /// Qubit 0 maps to the most-significant bit of the index.
    pub(crate) fn mask(&self, qubit: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit)
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            Err(QcpError::InvalidQubitIndex(qubit, self.num_qubits))
        } else {
            Ok(())
        }
    }

    /// Applies a 2x2 unitary to the target qubit.
    ///
    /// Visits each `(i, j = i | mask)` pair exactly once by skipping every
    /// index with the target bit set, and computes both outputs from the old
    /// pair before writing either slot back.
    fn apply_single(&mut self, target: usize, m: &Matrix2x2) {
        let mask = self.mask(target);

        for i in 0..self.re.len() {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;

            let a0 = Complex64::new(self.re[i], self.im[i]);
            let a1 = Complex64::new(self.re[j], self.im[j]);

            let b0 = m[0][0] * a0 + m[0][1] * a1;
            let b1 = m[1][0] * a0 + m[1][1] * a1;

            self.re[i] = b0.re;
            self.im[i] = b0.im;
            self.re[j] = b1.re;
            self.im[j] = b1.im;
        }
    }

    /// Applies the Hadamard gate to `target`.
    pub fn apply_h(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::HADAMARD);
        Ok(())
    }

    /// Applies the Pauli-X gate to `target`.
    pub fn apply_x(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::PAULI_X);
        Ok(())
    }

    /// Applies the Pauli-Y gate to `target`.
    pub fn apply_y(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::PAULI_Y);
        Ok(())
    }

    /// Applies the Pauli-Z gate to `target`.
    pub fn apply_z(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::PAULI_Z);
        Ok(())
    }

    /// Applies the S gate to `target`.
    pub fn apply_s(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::S_GATE);
        Ok(())
    }

    /// Applies the T gate to `target`.
    pub fn apply_t(&mut self, target: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::T_GATE);
        Ok(())
    }

    /// Applies an X-axis rotation by `theta` radians to `target`.
    pub fn apply_rx(&mut self, target: usize, theta: f64) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::rx(theta));
        Ok(())
    }

    /// Applies a Y-axis rotation by `theta` radians to `target`.
    pub fn apply_ry(&mut self, target: usize, theta: f64) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::ry(theta));
        Ok(())
    }

    /// Applies a Z-axis rotation by `theta` radians to `target`.
    pub fn apply_rz(&mut self, target: usize, theta: f64) -> Result<()> {
        self.check_qubit(target)?;
        self.apply_single(target, &math::rz(theta));
        Ok(())
    }

    /// Applies a controlled-NOT gate.
    ///
    /// Swaps `S[i]` with `S[i | t_mask]` for every index with the control
    /// bit set and the target bit clear.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QcpError::invalid_gate_args(
                "CNOT control and target must differ",
            ));
        }

        let c_mask = self.mask(control);
        let t_mask = self.mask(target);

        for i in 0..self.re.len() {
            if i & c_mask != 0 && i & t_mask == 0 {
                let j = i | t_mask;
                self.re.swap(i, j);
                self.im.swap(i, j);
            }
        }
        Ok(())
    }

    /// Applies a controlled-Z gate.
    ///
    /// Negates `S[i]` for every index with both bits set.
    pub fn apply_cz(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QcpError::invalid_gate_args(
                "CZ control and target must differ",
            ));
        }

        let both = self.mask(control) | self.mask(target);

        for i in 0..self.re.len() {
            if i & both == both {
                self.re[i] = -self.re[i];
                self.im[i] = -self.im[i];
            }
        }
        Ok(())
    }

    /// Applies a SWAP gate. `apply_swap(q, q)` is the identity.
    ///
    /// Exchanges `S[i]` and `S[i ^ mask_a ^ mask_b]` for every index whose
    /// `a`- and `b`-bits differ, visiting each pair once via `j > i`.
    pub fn apply_swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Ok(());
        }

        let a_mask = self.mask(a);
        let b_mask = self.mask(b);

        for i in 0..self.re.len() {
            if (i & a_mask != 0) != (i & b_mask != 0) {
                let j = i ^ a_mask ^ b_mask;
                if j > i {
                    self.re.swap(i, j);
                    self.im.swap(i, j);
                }
            }
        }
        Ok(())
    }

    /// Applies a gate from the catalogue.
    ///
    /// `Measure` validates its target and leaves the state untouched.
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<()> {
        match *gate {
            Gate::H { target } => self.apply_h(target),
            Gate::X { target } => self.apply_x(target),
            Gate::Y { target } => self.apply_y(target),
            Gate::Z { target } => self.apply_z(target),
            Gate::S { target } => self.apply_s(target),
            Gate::T { target } => self.apply_t(target),
            Gate::Rx { target, theta } => self.apply_rx(target, theta),
            Gate::Ry { target, theta } => self.apply_ry(target, theta),
            Gate::Rz { target, theta } => self.apply_rz(target, theta),
            Gate::Cnot { control, target } => self.apply_cnot(control, target),
            Gate::Cz { control, target } => self.apply_cz(control, target),
            Gate::Swap { a, b } => self.apply_swap(a, b),
            Gate::Measure { target } => self.check_qubit(target),
        }
    }

    /// Calculates the probability distribution over computational basis
    /// states: `p[k] = re[k]² + im[k]²`, with no renormalization.
    pub fn probabilities(&self) -> Vec<f64> {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(re, im)| re * re + im * im)
            .collect()
    }

    /// Returns the squared norm `Σ |amp[k]|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(re, im)| re * re + im * im)
            .sum()
    }

    /// Checks that the state is normalized (|ψ|² ≈ 1).
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < 1e-10
    }

    /// Calculates the fidelity `|⟨ψ|φ⟩|²` with another state.
    pub fn fidelity(&self, other: &Self) -> Result<f64> {
        if self.dimension() != other.dimension() {
            return Err(QcpError::DimensionMismatch(
                self.dimension(),
                other.dimension(),
            ));
        }

        let mut inner = Complex64::new(0.0, 0.0);
        for k in 0..self.dimension() {
            inner += self.amplitude(k).conj() * other.amplitude(k);
        }
        Ok(inner.norm_sqr())
    }
}
