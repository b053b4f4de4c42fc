//! Implementation of the base field of Curve25519.
//!
//! This module provides the `GF25519` type, for integers modulo
//! q = 2^255 - 19. A single implementation is provided, with five
//! 51-bit limbs stored in 64-bit words; it relies on 64x64->128
//! multiplications, which are constant-time on all mainstream 64-bit
//! architectures.
//!
//! The following properties apply:
//!
//!  - An instance encapsulates a field element. It is `Copy`; copying
//!    an instance is the `copy()` operation of the field.
//!
//!  - The constant values `GF25519::ZERO` and `GF25519::ONE` contain the
//!    elements of value 0 and 1, respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, and the compound assignments `+=`, `-=` and `*=`). Operators
//!    can use both the raw type, and references thereof.
//!
//!  - Function `square(self) -> Self` returns the square of an element;
//!    it is somewhat faster than a general multiplication. Sequences of
//!    multiple squarings can be performed with `xsquare(self, n: u32)`.
//!
//!  - Function `mul_small(self, x: u32) -> Self` multiplies an element
//!    by a small integer provided at runtime.
//!
//!  - Function `invert(self) -> Self` computes the inverse of an
//!    element by raising it to the power q - 2. The "inverse" of zero
//!    is zero.
//!
//!  - Function `cswap(a: &mut Self, b: &mut Self, ctl: u32)`
//!    exchanges the contents of `a` and `b` if `ctl` is 0xFFFFFFFF,
//!    or leaves them unmodified if `ctl` is 0x00000000.
//!
//!  - Function `decode_u(buf: &[u8; 32]) -> Self` decodes 32 bytes
//!    with unsigned little-endian convention, ignoring the top bit of
//!    the last byte. Non-canonical values are reduced; decoding never
//!    fails.
//!
//!  - Function `encode(self) -> [u8; 32]` encodes an element as
//!    exactly 32 bytes. Unsigned little-endian convention is used.
//!    Encoding is always canonical (i.e. the encoding always uses
//!    the integer which is lower than the field modulus).
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//! None of these functions branch on, or compute memory addresses from,
//! the values of their operands.

pub mod gf25519;

pub use gf25519::GF25519;

// Compute x*y over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    (z as u64, (z >> 64) as u64)
}

// Return 0xFFFFFFFFFFFFFFFF if x >= 0x8000000000000000, 0 otherwise
// (i.e. take the sign bit of the signed interpretation, and expand it
// to 64 bits).
#[inline(always)]
pub(crate) const fn sgnw(x: u64) -> u64 {
    ((x as i64) >> 63) as u64
}
