//! Ecc25519 is a Rust library for Diffie-Hellman key exchange over
//! Curve25519.
//!
//! This library implements the X25519 function (RFC 7748), along with
//! the finite field it is computed in, and a small key management layer
//! (key pair generation, shared secret derivation, key import and
//! export).
//!
//! The base field (integers modulo 2^255 - 19) is implemented in
//! `backend` and exposed through `field`. The Montgomery ladder is in
//! `x25519`. Key pairs and their serialization formats are in
//! `curve25519`; fallible operations there report an `error::Error`.
//!
//! # Usage
//!
//! The library is `no_std`. By default, it compiles against the standard
//! library (feature `std`), which only makes the dependencies' own `std`
//! support available (e.g. boxed custom errors in `rand_core`).
//!
//! Random numbers for key generation are obtained from any source that
//! implements the `rand_core` traits `CryptoRng` and `RngCore`; these
//! are re-exported here.
//!
//! # Conventions
//!
//! All implemented functions should be strictly constant-time. In order
//! to avoid unwanted side-channel leaks, Booleans are avoided (compilers
//! tend to "optimize" things a bit too eagerly when handling `bool`
//! values). All functions that return or use a potentially secret
//! Boolean value use the `u32` type; the convention is that 0xFFFFFFFF
//! means "true", and 0x00000000 means "false". No other value shall be
//! used, for they would lead to unpredictable results. In particular, a
//! secret bit `b` (0 or 1) is turned into a control mask with
//! `b.wrapping_neg()`. Similarly, the `Eq` or `PartialEq` traits are not
//! implemented on field elements.
//!
//! Algebraic operations on field elements are performed with the usual
//! operators (e.g. `+`); appropriate traits are defined so that
//! structure types and pointers to structure types can be used more or
//! less interchangeably. Functions that modify the object on which they
//! are called tend to have a name in `set_*()` (e.g. `x.set_square()`
//! squares `x` in place, while `x.square()` returns the square as a new
//! instance).
//!
//! Secret buffers (private scalars and their temporary copies) are
//! cleared with `zeroize`, which is not removed by the optimizer.

#![no_std]

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod backend;
pub mod field;
pub mod x25519;
pub mod error;
pub mod curve25519;
