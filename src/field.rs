//! Finite fields.
//!
//! This module exposes the base field of Curve25519 (integers modulo
//! 2^255 - 19), as implemented by the backend.

pub use crate::backend::GF25519;
