use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use core::convert::TryFrom;

use super::{umull, sgnw};

/// Field element: an integer modulo q = 2^255 - 19.
///
/// The internal representation is not necessarily canonical; only the
/// output of `encode()` is.
#[derive(Clone, Copy, Debug)]
pub struct GF25519([u64; 5]);

// 2^51 - 1
const M51: u64 = 0x0007FFFFFFFFFFFF;

// q = 2^255 - MQ
const MQ: u64 = 19;

impl GF25519 {

    // INTERNAL FORMAT
    // ===============
    //
    // Value is split over five unsigned limbs, in base 2^51. If the limbs
    // are y0 to y4, then the value is:
    //   y0 + y1*2^51 + y2*2^102 + y3*2^153 + y4*2^204
    // The value is implicitly considered modulo q = 2^255 - 19.
    //
    // All operations accept limbs up to 1.07*2^51 and produce limbs in
    // the same range; only set_normalized() yields the canonical form
    // (all limbs below 2^51, value below q).
    //
    // For multiplications (and squarings), we compute intermediate 115-bit
    // products:
    //     c_{i,j} = a_i * b_j
    // which we split into low and high parts:
    //     d_{i,j} = c_{i,j} mod 2^51
    //     h_{i,j} = floor(c_{i,j} / 2^51)
    // The operands are pre-shifted (by 6 bits for a, 7 bits for b), so
    // that the split falls on a register boundary.
    //
    // We then add together the d_{i,j}:
    //     d0 = d_{0,0}
    //     d1 = d_{0,1} + d_{1,0}
    //     d2 = d_{0,2} + d_{1,1} + d_{2,0}
    //     d3 = d_{0,3} + d_{1,2} + d_{2,1} + d_{3,0}
    //     d4 = d_{0,4} + d_{1,3} + d_{2,2} + d_{3,1} + d_{4,0}
    //     d5 = d_{1,4} + d_{2,3} + d_{3,2} + d_{4,1}
    //     d6 = d_{2,4} + d_{3,3} + d_{4,2}
    //     d7 = d_{3,4} + d_{4,3}
    //     d8 = d_{4,4}
    // and similarly for h_{i,j} (into h0..h8). Since 2^255 = 19 mod q,
    // the reduction step is:
    //     e0 = d0 + 19 * (h4 + d5);
    //     e1 = d1 + h0 + 19 * (h5 + d6);
    //     e2 = d2 + h1 + 19 * (h6 + d7);
    //     e3 = d3 + h2 + 19 * (h7 + d8);
    //     e4 = d4 + h3 + 19 * h8;
    // With limbs below 9.24*2^51, all e* values fit on 64 bits, and a
    // final carry propagation (set_carry_propagate()) brings the limbs
    // back into the 1.07*2^51 range.

    pub const ZERO: GF25519 = GF25519([ 0, 0, 0, 0, 0 ]);
    pub const ONE: GF25519 = GF25519([ 1, 0, 0, 0, 0 ]);

    // Modulus q, over 51-bit limbs.
    const MOD_M51: [u64; 5] = [
        0x0008000000000000 - MQ,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
    ];

    // 2*q, with limb values up to 52 bits.
    const DMOD_M51: [u64; 5] = [
        (0x0008000000000000 - MQ) << 1,
        0x0007FFFFFFFFFFFF << 1,
        0x0007FFFFFFFFFFFF << 1,
        0x0007FFFFFFFFFFFF << 1,
        0x0007FFFFFFFFFFFF << 1,
    ];

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in low-to-high order).
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        // We wrap around the top bit; y0 may be up to 2^51 - 1 + 19,
        // while the four other limbs fit on 51 bits.
        let y0 = (x0 & M51) + (MQ & sgnw(x3));
        let y1 = (x0 >> 51) | ((x1 << 13) & M51);
        let y2 = (x1 >> 38) | ((x2 << 26) & M51);
        let y3 = (x2 >> 25) | ((x3 << 39) & M51);
        let y4 = (x3 >> 12) & M51;
        Self([ y0, y1, y2, y3, y4 ])
    }

    // Set this value to the provided limbs, with additional carry
    // propagation.
    #[inline(always)]
    fn set_carry_propagate(&mut self,
        d0: u64, d1: u64, d2: u64, d3: u64, d4: u64)
    {
        // Max output limb value: 2^51 - 1 + 19*(2^13 - 1) < 1.00000012*2^51
        let h0 = d0 >> 51;
        let h1 = d1 >> 51;
        let h2 = d2 >> 51;
        let h3 = d3 >> 51;
        let h4 = d4 >> 51;
        self.0[0] = (d0 & M51) + (h4 * MQ);
        self.0[1] = (d1 & M51) + h0;
        self.0[2] = (d2 & M51) + h1;
        self.0[3] = (d3 & M51) + h2;
        self.0[4] = (d4 & M51) + h3;
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        let d0 = self.0[0] + rhs.0[0];
        let d1 = self.0[1] + rhs.0[1];
        let d2 = self.0[2] + rhs.0[2];
        let d3 = self.0[3] + rhs.0[3];
        let d4 = self.0[4] + rhs.0[4];
        self.set_carry_propagate(d0, d1, d2, d3, d4);
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // We add 2*q, with limbs close to 2*2^51, to avoid negative values.
        let d0 = (self.0[0] + Self::DMOD_M51[0]) - rhs.0[0];
        let d1 = (self.0[1] + Self::DMOD_M51[1]) - rhs.0[1];
        let d2 = (self.0[2] + Self::DMOD_M51[2]) - rhs.0[2];
        let d3 = (self.0[3] + Self::DMOD_M51[3]) - rhs.0[3];
        let d4 = (self.0[4] + Self::DMOD_M51[4]) - rhs.0[4];
        self.set_carry_propagate(d0, d1, d2, d3, d4);
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or not exchanged if ctl == 0x00000000. Value
    // ctl MUST be either 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        let t = cw & (a.0[0] ^ b.0[0]); a.0[0] ^= t; b.0[0] ^= t;
        let t = cw & (a.0[1] ^ b.0[1]); a.0[1] ^= t; b.0[1] ^= t;
        let t = cw & (a.0[2] ^ b.0[2]); a.0[2] ^= t; b.0[2] ^= t;
        let t = cw & (a.0[3] ^ b.0[3]); a.0[3] ^= t; b.0[3] ^= t;
        let t = cw & (a.0[4] ^ b.0[4]); a.0[4] ^= t; b.0[4] ^= t;
    }

    // Multiply this value by a small integer.
    #[inline]
    pub fn set_mul_small(&mut self, x: u32) {
        // Input limbs are up to 1.07*2^51; if 1.07*x < 2^13, then we can
        // perform the multiplications over 64 bits.
        if x <= 7656 {
            let x = x as u64;
            let d0 = self.0[0] * x;
            let d1 = self.0[1] * x;
            let d2 = self.0[2] * x;
            let d3 = self.0[3] * x;
            let d4 = self.0[4] * x;
            self.set_carry_propagate(d0, d1, d2, d3, d4);
            return;
        }

        // Each high part is lower than x, which is lower than 2^32;
        // thus, 19*h4 < 2^37.
        let xs = (x as u64) << 13;
        let (d0, h0) = umull(self.0[0], xs);
        let (d1, h1) = umull(self.0[1], xs);
        let (d2, h2) = umull(self.0[2], xs);
        let (d3, h3) = umull(self.0[3], xs);
        let (d4, h4) = umull(self.0[4], xs);
        self.0[0] = (d0 >> 13) + (MQ * h4);
        self.0[1] = (d1 >> 13) + h0;
        self.0[2] = (d2 >> 13) + h1;
        self.0[3] = (d3 >> 13) + h2;
        self.0[4] = (d4 >> 13) + h3;
    }

    #[inline(always)]
    pub fn mul_small(self, x: u32) -> Self {
        let mut r = self;
        r.set_mul_small(x);
        r
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1, a2, a3, a4) =
            (self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]);
        let (b0, b1, b2, b3, b4) =
            (rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3], rhs.0[4]);

        // See comments at the start for range analysis.
        let a0 = a0 << 6;
        let a1 = a1 << 6;
        let a2 = a2 << 6;
        let a3 = a3 << 6;
        let a4 = a4 << 6;
        let b0 = b0 << 7;
        let b1 = b1 << 7;
        let b2 = b2 << 7;
        let b3 = b3 << 7;
        let b4 = b4 << 7;

        let (c00, h00) = umull(a0, b0);
        let (c01, h01) = umull(a0, b1);
        let (c02, h02) = umull(a0, b2);
        let (c03, h03) = umull(a0, b3);
        let (c04, h04) = umull(a0, b4);
        let (c10, h10) = umull(a1, b0);
        let (c11, h11) = umull(a1, b1);
        let (c12, h12) = umull(a1, b2);
        let (c13, h13) = umull(a1, b3);
        let (c14, h14) = umull(a1, b4);
        let (c20, h20) = umull(a2, b0);
        let (c21, h21) = umull(a2, b1);
        let (c22, h22) = umull(a2, b2);
        let (c23, h23) = umull(a2, b3);
        let (c24, h24) = umull(a2, b4);
        let (c30, h30) = umull(a3, b0);
        let (c31, h31) = umull(a3, b1);
        let (c32, h32) = umull(a3, b2);
        let (c33, h33) = umull(a3, b3);
        let (c34, h34) = umull(a3, b4);
        let (c40, h40) = umull(a4, b0);
        let (c41, h41) = umull(a4, b1);
        let (c42, h42) = umull(a4, b2);
        let (c43, h43) = umull(a4, b3);
        let (c44, h44) = umull(a4, b4);

        let d0 = c00 >> 13;
        let d1 = (c01 >> 13)
               + (c10 >> 13);
        let d2 = (c02 >> 13)
               + (c11 >> 13)
               + (c20 >> 13);
        let d3 = (c03 >> 13)
               + (c12 >> 13)
               + (c21 >> 13)
               + (c30 >> 13);
        let d4 = (c04 >> 13)
               + (c13 >> 13)
               + (c22 >> 13)
               + (c31 >> 13)
               + (c40 >> 13);
        let d5 = (c14 >> 13)
               + (c23 >> 13)
               + (c32 >> 13)
               + (c41 >> 13);
        let d6 = (c24 >> 13)
               + (c33 >> 13)
               + (c42 >> 13);
        let d7 = (c34 >> 13)
               + (c43 >> 13);
        let d8 = c44 >> 13;

        let h0 = h00;
        let h1 = h01 + h10;
        let h2 = h02 + h11 + h20;
        let h3 = h03 + h12 + h21 + h30;
        let h4 = h04 + h13 + h22 + h31 + h40;
        let h5 = h14 + h23 + h32 + h41;
        let h6 = h24 + h33 + h42;
        let h7 = h34 + h43;
        let h8 = h44;

        let e0 = d0 + MQ * (h4 + d5);
        let e1 = d1 + h0 + MQ * (h5 + d6);
        let e2 = d2 + h1 + MQ * (h6 + d7);
        let e3 = d3 + h2 + MQ * (h7 + d8);
        let e4 = d4 + h3 + MQ * h8;
        self.set_carry_propagate(e0, e1, e2, e3, e4);
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        let (a0, a1, a2, a3, a4) =
            (self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]);

        // Same as set_mul(), but double-products are merged by using
        // the z* words (twice the corresponding s* words).
        let s0 = a0 << 6;
        let s1 = a1 << 6;
        let s2 = a2 << 6;
        let s3 = a3 << 6;
        let s4 = a4 << 6;
        let z0 = a0 << 7;
        let z1 = a1 << 7;
        let z2 = a2 << 7;
        let z3 = a3 << 7;
        let z4 = a4 << 7;

        let (c00, h00) = umull(s0, z0);
        let (c01, h01) = umull(z0, z1);
        let (c02, h02) = umull(z0, z2);
        let (c03, h03) = umull(z0, z3);
        let (c04, h04) = umull(z0, z4);
        let (c11, h11) = umull(s1, z1);
        let (c12, h12) = umull(z1, z2);
        let (c13, h13) = umull(z1, z3);
        let (c14, h14) = umull(z1, z4);
        let (c22, h22) = umull(s2, z2);
        let (c23, h23) = umull(z2, z3);
        let (c24, h24) = umull(z2, z4);
        let (c33, h33) = umull(s3, z3);
        let (c34, h34) = umull(z3, z4);
        let (c44, h44) = umull(s4, z4);

        let d0 = c00 >> 13;
        let d1 = c01 >> 13;
        let d2 = (c02 >> 13)
               + (c11 >> 13);
        let d3 = (c03 >> 13)
               + (c12 >> 13);
        let d4 = (c04 >> 13)
               + (c13 >> 13)
               + (c22 >> 13);
        let d5 = (c14 >> 13)
               + (c23 >> 13);
        let d6 = (c24 >> 13)
               + (c33 >> 13);
        let d7 = c34 >> 13;
        let d8 = c44 >> 13;

        let h0 = h00;
        let h1 = h01;
        let h2 = h02 + h11;
        let h3 = h03 + h12;
        let h4 = h04 + h13 + h22;
        let h5 = h14 + h23;
        let h6 = h24 + h33;
        let h7 = h34;
        let h8 = h44;

        let e0 = d0 + MQ * (h4 + d5);
        let e1 = d1 + h0 + MQ * (h5 + d6);
        let e2 = d2 + h1 + MQ * (h6 + d7);
        let e3 = d3 + h2 + MQ * (h7 + d8);
        let e4 = d4 + h3 + MQ * h8;
        self.set_carry_propagate(e0, e1, e2, e3, e4);
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline(always)]
    fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Fully reduce the value.
    #[inline]
    fn set_normalized(&mut self) {
        // Add 19, and propagate carries.
        let a0 = self.0[0] + MQ;
        let a1 = self.0[1] + (a0 >> 51);
        let a2 = self.0[2] + (a1 >> 51);
        let a3 = self.0[3] + (a2 >> 51);
        let a4 = self.0[4] + (a3 >> 51);
        let b0 = (a0 & M51) + MQ * (a4 >> 51);
        // 19*(a4 >> 51) < 19*2^13 < 2^18, so the carry into b1 can only
        // be 0 or 1.
        let b1 = (a1 & M51) + (b0 >> 51);
        let b2 = (a2 & M51) + (b1 >> 51);
        let b3 = (a3 & M51) + (b2 >> 51);
        let b4 = (a4 & M51) + (b3 >> 51);
        // b4 may exceed 2^51-1 only if b0 produced a carry, in which case
        // b0 % 2^51 must be small, and the carry propagation will stop there.
        let c0 = (b0 & M51) + (MQ & (b4 >> 51).wrapping_neg());
        let c1 = b1 & M51;
        let c2 = b2 & M51;
        let c3 = b3 & M51;
        let c4 = b4 & M51;

        // Subtract 19; propagate the borrow.
        let d0 = c0.wrapping_sub(MQ);
        let d1 = c1.wrapping_sub(d0 >> 63);
        let d2 = c2.wrapping_sub(d1 >> 63);
        let d3 = c3.wrapping_sub(d2 >> 63);
        let d4 = c4.wrapping_sub(d3 >> 63);

        // If there is a borrow, then we must add back the modulus. In such
        // a case, limb d0 is between -1 and -19, and limbs d1..d4 are -1,
        // so the addition of the modulus will simply yield 0x0007FFFFFFFFFFFF
        // for limbs d1 to d4.
        // If there is no borrow, some of the limbs (but not d4) may be
        // "negative" and the truncation to 51 bits is required.
        let w = sgnw(d4);
        let e0 = d0.wrapping_add(w & Self::MOD_M51[0]) & M51;
        let e1 = (d1 | w) & M51;
        let e2 = (d2 | w) & M51;
        let e3 = (d3 | w) & M51;
        let e4 = (d4 | w) & M51;

        self.0[0] = e0;
        self.0[1] = e1;
        self.0[2] = e2;
        self.0[3] = e3;
        self.0[4] = e4;
    }

    // Encode this value into four 64-bit limbs in little-endian order
    // (fully normalized).
    fn to_limbs64(self) -> [u64; 4] {
        let mut x = self;
        x.set_normalized();
        let x0 = x.0[0] | (x.0[1] << 51);
        let x1 = (x.0[1] >> 13) | (x.0[2] << 38);
        let x2 = (x.0[2] >> 26) | (x.0[3] << 25);
        let x3 = (x.0[3] >> 39) | (x.0[4] << 12);
        [x0, x1, x2, x3]
    }

    /// Inverts this value in place (Fermat: raise to q - 2 = 2^255 - 21).
    ///
    /// The exponentiation uses a fixed chain of 254 squarings and 11
    /// multiplications; zero is "inverted" into zero.
    pub fn set_invert(&mut self) {
        let x = *self;
        let x2 = x.square();
        let x9 = x2.xsquare(2) * x;
        let x11 = x9 * x2;
        let xp5 = x11.square() * x9;
        let xp10 = xp5.xsquare(5) * xp5;
        let xp20 = xp10.xsquare(10) * xp10;
        let xp40 = xp20.xsquare(20) * xp20;
        let xp50 = xp40.xsquare(10) * xp10;
        let xp100 = xp50.xsquare(50) * xp50;
        let xp200 = xp100.xsquare(100) * xp100;
        let xp250 = xp200.xsquare(50) * xp50;
        // x^(2^255 - 32) * x^11 = x^(2^255 - 21)
        *self = xp250.xsquare(5) * x11;
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let k = self.to_limbs64();
        let t = k[0] | k[1] | k[2] | k[3];
        let tz = t | t.wrapping_neg();
        ((tz >> 63) as u32).wrapping_sub(1)
    }

    /// Decodes a u coordinate from 32 bytes (unsigned little-endian).
    ///
    /// The top bit (bit 255) is ignored. Non-canonical values (in the
    /// q..2^255-1 range) are accepted and implicitly reduced. This never
    /// fails.
    #[inline]
    pub fn decode_u(buf: &[u8; 32]) -> Self {
        let d0 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 0.. 8]).unwrap());
        let d1 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 8..16]).unwrap());
        let d2 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[16..24]).unwrap());
        let d3 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[24..32]).unwrap());
        Self::w64le(d0, d1, d2, d3 & 0x7FFFFFFFFFFFFFFF)
    }

    // Encode this value over exactly 32 bytes. Encoding is always canonical
    // (little-endian encoding of the value in the 0..q-1 range, top bit
    // of the last byte is always 0).
    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        let k = self.to_limbs64();
        let mut d = [0u8; 32];
        d[ 0.. 8].copy_from_slice(&k[0].to_le_bytes());
        d[ 8..16].copy_from_slice(&k[1].to_le_bytes());
        d[16..24].copy_from_slice(&k[2].to_le_bytes());
        d[24..32].copy_from_slice(&k[3].to_le_bytes());
        d
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, -, *) on field element instances, with or without references.

impl Add<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn add_assign(&mut self, other: GF25519) {
        self.set_add(&other);
    }
}

impl AddAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn add_assign(&mut self, other: &GF25519) {
        self.set_add(other);
    }
}

impl Mul<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn mul_assign(&mut self, other: GF25519) {
        self.set_mul(&other);
    }
}

impl MulAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GF25519) {
        self.set_mul(other);
    }
}

impl Sub<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn sub_assign(&mut self, other: GF25519) {
        self.set_sub(&other);
    }
}

impl SubAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn sub_assign(&mut self, other: &GF25519) {
        self.set_sub(other);
    }
}

// ========================================================================
