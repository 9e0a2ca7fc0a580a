//! Key and signature types
//!
//! Key-pair generation and storage live outside this crate; consumers hand
//! in raw key bytes and get opaque types back. The private key is the only
//! secret held here and is wiped from memory on drop.

use crate::error::{Error, Result};
use zeroize::{Zeroize, Zeroizing};

use super::{curve, hashing};

/// Size of a private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Size of each encoded signature half (commitment point, response scalar)
pub(crate) const ENCODED_SIZE: usize = SIGNATURE_SIZE / 2;

/// Private signing key (32 bytes)
///
/// # Security
///
/// The key material is cleared from memory when the value is dropped and is
/// never exposed through `Debug`. There is deliberately no mutable byte
/// access and no serialization helper; persistence belongs to the key-pair
/// component that owns the raw bytes.
#[derive(Clone)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Create a private key from raw bytes
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        PrivateKey(bytes)
    }

    /// Create a private key from a byte slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(Error::InvalidKeySize {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; PRIVATE_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(PrivateKey(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// Implement Debug without exposing key material
impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// Public verification key (32 bytes, compressed curve-point encoding)
///
/// The sign bit of the point sits in the top bit of the last byte. The
/// encoding is treated as opaque here; whether it decodes to a valid curve
/// point is only established during verification.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Create a public key from raw bytes
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        PublicKey(bytes)
    }

    /// Create a public key from a byte slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::InvalidKeySize {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(PublicKey(key))
    }

    /// Copy out the encoded point bytes
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKey").finish_non_exhaustive()
    }
}

/// Signature (64 bytes: commitment ‖ response)
///
/// Existence of a value of this type implies nothing about validity; only a
/// successful [`verify`](super::verify) call establishes that. Signatures
/// produced by [`sign`](super::sign) always carry a canonically reduced
/// response.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Create a signature from raw bytes
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Signature(bytes)
    }

    /// Create a signature from a byte slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::InvalidSignatureSize {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut signature = [0u8; SIGNATURE_SIZE];
        signature.copy_from_slice(bytes);
        Ok(Signature(signature))
    }

    pub(crate) fn from_halves(
        commitment: [u8; ENCODED_SIZE],
        response: [u8; ENCODED_SIZE],
    ) -> Self {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..ENCODED_SIZE].copy_from_slice(&commitment);
        bytes[ENCODED_SIZE..].copy_from_slice(&response);
        Signature(bytes)
    }

    /// The encoded commitment point (first signature half)
    pub fn commitment(&self) -> [u8; ENCODED_SIZE] {
        let mut bytes = [0u8; ENCODED_SIZE];
        bytes.copy_from_slice(&self.0[..ENCODED_SIZE]);
        bytes
    }

    /// The encoded response scalar (second signature half)
    pub fn response(&self) -> [u8; ENCODED_SIZE] {
        let mut bytes = [0u8; ENCODED_SIZE];
        bytes.copy_from_slice(&self.0[ENCODED_SIZE..]);
        bytes
    }

    /// Copy out the raw signature bytes
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }
}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

/// Derive the public key belonging to a private key
///
/// The private key is hashed, the first half of the digest is clamped, and
/// the clamped scalar is multiplied onto the base point. The derivation is
/// deterministic; the key-pair component calls this once at construction,
/// and signing repeats it internally to bind the challenge to the signer.
pub fn derive_public_key(private_key: &PrivateKey) -> PublicKey {
    let private_hash = hashing::expand_private_key(private_key);

    let mut scalar = Zeroizing::new([0u8; 32]);
    scalar.copy_from_slice(&private_hash[..32]);
    let clamped = Zeroizing::new(curve::clamp_scalar(*scalar));

    PublicKey(curve::mul_base(&clamped))
}
