//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use qcp_core::prelude::*;
//! ```

pub use crate::config::{Limits, DEFAULT_MAX_SHOTS, MAX_QUBITS};
pub use crate::error::{QcpError, Result};
pub use crate::math::{Matrix2x2, C64};
pub use crate::share::{SharePayload, SHARE_VERSION};
pub use crate::types::{Circuit, Gate, Step};
