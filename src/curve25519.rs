//! Curve25519 key pairs and Diffie-Hellman key exchange.
//!
//! A `KeyPair` holds a private scalar and a public point (u coordinate),
//! both over exactly 32 bytes. Key pairs are generated from a
//! cryptographically secure RNG, or imported from raw bytes; the shared
//! secret between a private key and a peer public key is computed with
//! the X25519 ladder (see the `x25519` module).
//!
//! # Byte order
//!
//! Inside a `KeyPair`, the private scalar and the public point are
//! stored **most significant byte first**, i.e. in the reverse order of
//! the little-endian convention used by the ladder. All import and
//! export functions work on that stored order. The one exception is
//! the raw shared secret produced by `KeyPair::shared_secret()`, which
//! is the ladder output in its native little-endian order, without
//! reversal.
//!
//! # Public key export format
//!
//! An exported public key has length exactly 34 bytes:
//!
//! | offset | size | contents                            |
//! |--------|------|-------------------------------------|
//! | 0      | 1    | total length (34)                   |
//! | 1      | 1    | format tag (`KeyFormat::MontgomeryXLe`, 0x41) |
//! | 2      | 32   | public u coordinate (stored order)  |
//!
//! Raw private keys are exported and imported as 32 bytes, in stored
//! order, with no header.
//!
//! # Secret data
//!
//! Temporary copies of private scalars, peer points and ladder outputs
//! are held in `Zeroizing` buffers, so that they are cleared on all
//! return paths. A `KeyPair` is wiped when dropped.

use core::fmt;

use log::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::{CryptoRng, RngCore};
use super::error::{Error, Result};
use super::x25519::{clamp, x25519, x25519_base};

/// Size of private scalars and public points, in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of an exported public key (length byte, format tag, point).
pub const PUBLIC_EXPORT_SIZE: usize = KEY_SIZE + 2;

/// Encoding format of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum KeyFormat {
    /// Montgomery u coordinate (little-endian for the ladder, stored
    /// most significant byte first).
    MontgomeryXLe = 0x41,
}

impl KeyFormat {

    /// Gets the tag byte used in the public key export format.
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Domain parameters of a curve.
#[derive(Debug, PartialEq, Eq)]
pub struct DomainParams {
    name: &'static str,
    size: usize,
}

impl DomainParams {

    /// Gets the curve name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the size (in bytes) of scalars and points.
    pub const fn size(&self) -> usize {
        self.size
    }
}

/// Domain parameters of Curve25519; all key pairs refer to this table.
pub static CURVE25519_PARAMS: DomainParams = DomainParams {
    name: "CURVE25519",
    size: KEY_SIZE,
};

/// A Curve25519 key pair.
///
/// A freshly created key pair (`KeyPair::new()`) has an all-zero
/// private scalar and public point. Imported public keys only carry a
/// meaningful public point.
#[derive(Clone)]
pub struct KeyPair {
    format: KeyFormat,
    dp: Option<&'static DomainParams>,
    public: [u8; KEY_SIZE],
    private: [u8; KEY_SIZE],
}

// Copy src into dst with the byte order reversed.
#[inline]
fn copy_reversed(dst: &mut [u8; KEY_SIZE], src: &[u8; KEY_SIZE]) {
    for i in 0..KEY_SIZE {
        dst[KEY_SIZE - 1 - i] = src[i];
    }
}

impl KeyPair {

    /// Creates an empty key pair: both buffers are zero, and the format
    /// and domain parameters are set.
    pub fn new() -> Self {
        Self {
            format: KeyFormat::MontgomeryXLe,
            dp: Some(&CURVE25519_PARAMS),
            public: [0u8; KEY_SIZE],
            private: [0u8; KEY_SIZE],
        }
    }

    /// Generates a new key pair from a cryptographically secure RNG.
    ///
    /// `key_size` MUST be `KEY_SIZE` (32); any other value yields
    /// `Error::InvalidArgument`. Exactly 32 bytes are obtained from the
    /// RNG with `try_fill_bytes()`; if that fails, the RNG error is
    /// returned as `Error::RandomSource` (there is no retry). The
    /// random bytes are clamped and used as private scalar; the public
    /// point is the product of the conventional generator by that
    /// scalar.
    pub fn generate<T: CryptoRng + RngCore>(rng: &mut T, key_size: usize)
        -> Result<Self>
    {
        if key_size != KEY_SIZE {
            debug!("curve25519: unsupported key size {}", key_size);
            return Err(Error::InvalidArgument);
        }

        let mut n = Zeroizing::new([0u8; KEY_SIZE]);
        rng.try_fill_bytes(&mut n[..]).map_err(|e| {
            debug!("curve25519: random source failure during key generation");
            Error::RandomSource(e)
        })?;
        clamp(&mut n);
        let p = x25519_base(&n);

        let mut key = Self::new();
        copy_reversed(&mut key.private, &n);
        copy_reversed(&mut key.public, &p);
        trace!("curve25519: generated key pair");
        Ok(key)
    }

    /// Computes the shared secret between this private key and the
    /// public key of `peer`.
    ///
    /// The 32-byte result is written at the start of `out`, in the
    /// little-endian order produced by the ladder (it is NOT reversed
    /// into the stored key order). The number of written bytes (32) is
    /// returned.
    ///
    /// A peer public point whose first stored byte (the most significant
    /// byte of the u coordinate) is greater than 0x7F is rejected with
    /// `Error::InvalidArgument`, so that non-canonical inputs do not
    /// expose implementation-specific behaviour. If `out` is shorter
    /// than 32 bytes, `Error::BufferTooSmall` is returned. In both
    /// cases, `out` is not modified.
    ///
    /// No other check is performed on the peer point: low-order points
    /// are accepted and yield an all-zero secret.
    pub fn shared_secret(&self, peer: &KeyPair, out: &mut [u8])
        -> Result<usize>
    {
        if peer.public[0] > 0x7F {
            debug!("curve25519: rejecting peer public point with top bit set");
            return Err(Error::InvalidArgument);
        }
        if out.len() < KEY_SIZE {
            debug!("curve25519: shared secret buffer too small ({} < {})",
                out.len(), KEY_SIZE);
            return Err(Error::BufferTooSmall { need: KEY_SIZE, got: out.len() });
        }

        let mut k = Zeroizing::new([0u8; KEY_SIZE]);
        let mut p = Zeroizing::new([0u8; KEY_SIZE]);
        copy_reversed(&mut k, &self.private);
        copy_reversed(&mut p, &peer.public);

        let q = Zeroizing::new(x25519(&p, &k));
        out[..KEY_SIZE].copy_from_slice(&q[..]);
        Ok(KEY_SIZE)
    }

    /// Exports the public key into `out` (34 bytes, see the module
    /// documentation for the format).
    ///
    /// Returned value is the number of written bytes. If `out` is too
    /// small, `Error::BufferTooSmall` is returned and nothing is written.
    pub fn export_public(&self, out: &mut [u8]) -> Result<usize> {
        if out.len() < PUBLIC_EXPORT_SIZE {
            debug!("curve25519: public key buffer too small ({} < {})",
                out.len(), PUBLIC_EXPORT_SIZE);
            return Err(Error::BufferTooSmall {
                need: PUBLIC_EXPORT_SIZE,
                got: out.len(),
            });
        }
        out[0] = PUBLIC_EXPORT_SIZE as u8;
        out[1] = self.format.tag();
        out[2..PUBLIC_EXPORT_SIZE].copy_from_slice(&self.public);
        Ok(PUBLIC_EXPORT_SIZE)
    }

    /// Imports a public key, as produced by `export_public()`.
    ///
    /// The input must have length exactly 34 bytes, and its format tag
    /// must be `KeyFormat::MontgomeryXLe`; otherwise,
    /// `Error::InvalidArgument` is returned. The point is copied
    /// verbatim (stored order); the private scalar of the returned key
    /// pair is zero.
    pub fn import_public(buf: &[u8]) -> Result<Self> {
        if buf.len() != PUBLIC_EXPORT_SIZE {
            debug!("curve25519: bad public key length {}", buf.len());
            return Err(Error::InvalidArgument);
        }
        if buf[1] != KeyFormat::MontgomeryXLe.tag() {
            debug!("curve25519: bad public key format tag 0x{:02X}", buf[1]);
            return Err(Error::InvalidArgument);
        }
        let mut key = Self::new();
        key.public.copy_from_slice(&buf[2..]);
        trace!("curve25519: imported public key");
        Ok(key)
    }

    /// Exports the raw private scalar (32 bytes, stored order) into
    /// `out`.
    ///
    /// Returned value is the number of written bytes. If `out` is
    /// shorter than 32 bytes, `Error::BufferTooSmall` is returned and
    /// nothing is written.
    pub fn export_private_raw(&self, out: &mut [u8]) -> Result<usize> {
        if out.len() < KEY_SIZE {
            debug!("curve25519: private key buffer too small ({} < {})",
                out.len(), KEY_SIZE);
            return Err(Error::BufferTooSmall { need: KEY_SIZE, got: out.len() });
        }
        out[..KEY_SIZE].copy_from_slice(&self.private);
        Ok(KEY_SIZE)
    }

    /// Imports a key pair from a raw private scalar and a raw public
    /// point (32 bytes each, stored order).
    ///
    /// Both values are copied verbatim. The private scalar is not
    /// checked for clamping, and the public point is not checked for
    /// consistency with the private scalar; the caller is trusted to
    /// provide material previously obtained from `export_private_raw()`
    /// and `export_public()`. If either slice does not have length
    /// exactly 32, `Error::InvalidArgument` is returned.
    pub fn import_private_raw(private: &[u8], public: &[u8]) -> Result<Self> {
        if private.len() != KEY_SIZE || public.len() != KEY_SIZE {
            debug!("curve25519: bad raw key lengths ({}, {})",
                private.len(), public.len());
            return Err(Error::InvalidArgument);
        }
        let mut key = Self::new();
        key.private.copy_from_slice(private);
        key.public.copy_from_slice(public);
        trace!("curve25519: imported raw key pair");
        Ok(key)
    }

    /// Clears both buffers and the domain parameters reference.
    ///
    /// This may be called several times; it is also called automatically
    /// when the key pair is dropped.
    pub fn wipe(&mut self) {
        self.dp = None;
        self.public.zeroize();
        self.private.zeroize();
    }

    /// Gets the key size (32), or 0 if the key pair has been wiped.
    pub fn size(&self) -> usize {
        match self.dp {
            Some(dp) => dp.size(),
            None => 0,
        }
    }

    /// Gets the public point (stored order).
    pub fn public_point(&self) -> &[u8; KEY_SIZE] {
        &self.public
    }

    /// Gets the key format.
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    /// Gets the domain parameters, unless the key pair has been wiped.
    pub fn domain_params(&self) -> Option<&'static DomainParams> {
        self.dp
    }
}

impl Default for KeyPair {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.wipe();
    }
}

// The private scalar is never printed.
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("format", &self.format)
            .field("dp", &self.dp)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

// ========================================================================
