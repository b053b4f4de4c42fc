//! X25519 scalar multiplication.
//!
//! This module implements the X25519 primitive, as defined by [RFC
//! 7748]: the Montgomery ladder on Curve25519. The primitive takes as
//! input two 32-byte values, the first being the little-endian encoding
//! of the u coordinate of a point on Curve25519 (or on its quadratic
//! twist), and the second being a scalar. The scalar is "clamped" (some
//! bits are set to specific values), then the point is multiplied by
//! the scalar, and the u coordinate of the result is encoded back into
//! 32 bytes.
//!
//! The `x25519()` function does NOT filter out any value from its input;
//! any sequence of 32 bytes is accepted, even if it encodes zero or a
//! low-order point, in which case the output is whatever the ladder
//! yields (normally zero). The top point bit (most significant bit of
//! the last byte) is ignored. As for scalars, the clamping process
//! ensures that the integer used for the multiplication is a multiple
//! of 8, at least 2^254, and lower than 2^255; the three least
//! significant bits of the first byte, and the two most significant
//! bits of the last byte, are ignored.
//!
//! The ladder has no data-dependent branch or memory access: each of the
//! 255 iterations runs the same sequence of field operations, and the
//! scalar bits only drive the constant-time conditional swaps.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use zeroize::Zeroizing;

use super::field::GF25519;

/// The conventional generator point of Curve25519 (u = 9), in
/// little-endian encoding.
pub const BASEPOINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Clamps a scalar (little-endian) in place.
///
/// Bits 0, 1, 2 and 255 are cleared, and bit 254 is set.
#[inline]
pub fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

/// X25519 function (from RFC 7748), general case.
///
/// The source point is provided as an array of 32 bytes (`point`), as
/// well as the scalar (`scalar`). The `point` parameter is the
/// little-endian encoding of the u coordinate, and the `scalar`
/// parameter is the little-endian encoding of the scalar. The function
/// clamps a copy of the scalar, multiplies the point by it, and returns
/// the canonical encoding of the u coordinate of the result.
///
/// This function is pure: the same inputs always yield the same output.
pub fn x25519(point: &[u8; 32], scalar: &[u8; 32]) -> [u8; 32] {
    // Make clamped scalar; the copy is wiped when dropped.
    let mut s = Zeroizing::new(*scalar);
    clamp(&mut s);

    // Decode the source point (top bit is ignored, non-canonical values
    // are acceptable).
    let x1 = GF25519::decode_u(point);

    // Apply the RFC 7748 section 5 algorithm.
    let mut x2 = GF25519::ONE;
    let mut z2 = GF25519::ZERO;
    let mut x3 = x1;
    let mut z3 = GF25519::ONE;
    let mut swap = 0u32;

    for t in (0..255).rev() {
        let kt = (((s[t >> 3] >> (t & 7)) & 1) as u32).wrapping_neg();
        swap ^= kt;
        GF25519::cswap(&mut x2, &mut x3, swap);
        GF25519::cswap(&mut z2, &mut z3, swap);
        swap = kt;

        let A = x2 + z2;
        let B = x2 - z2;
        let AA = A.square();
        let BB = B.square();
        let C = x3 + z3;
        let D = x3 - z3;
        let E = AA - BB;
        let DA = D * A;
        let CB = C * B;
        x3 = (DA + CB).square();
        z3 = x1 * (DA - CB).square();
        x2 = AA * BB;
        z2 = E * (AA + E.mul_small(121665));
    }
    GF25519::cswap(&mut x2, &mut x3, swap);
    GF25519::cswap(&mut z2, &mut z3, swap);

    (x2 * z2.invert()).encode()
}

/// X25519 applied to the conventional generator point (u = 9).
///
/// This is the public key derivation: `x25519_base(k)` is the public
/// u coordinate matching private scalar `k`.
#[inline]
pub fn x25519_base(scalar: &[u8; 32]) -> [u8; 32] {
    x25519(&BASEPOINT, scalar)
}

// ========================================================================
