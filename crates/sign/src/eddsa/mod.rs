//! Deterministic Edwards-curve signature scheme
//!
//! The wire format is the standard Ed25519 layout, a 64-byte signature
//! holding a 32-byte encoded commitment point followed by a 32-byte
//! response scalar, with SHA3-512 in place of SHA-512. Interoperability
//! therefore requires SHA3-512 on both ends.
//!
//! Signing is deterministic: the nonce is derived from a hash of the
//! private key and the message, never from an external randomness source,
//! so a faulty RNG cannot leak key material. Verification enforces that
//! the response scalar is canonically reduced, closing the usual
//! malleability gap, and rejects the all-zero public key outright.
//!
//! # Example
//!
//! ```
//! use vouch_sign::{derive_public_key, sign, verify, PrivateKey};
//!
//! # fn main() -> vouch_sign::Result<()> {
//! let private_key = PrivateKey::from_bytes([7u8; 32]);
//! let public_key = derive_public_key(&private_key);
//!
//! let signature = sign(&private_key, b"transaction payload")?;
//! assert!(verify(&public_key, b"transaction payload", &signature));
//! # Ok(())
//! # }
//! ```

mod canonical;
mod curve;
mod hashing;
mod keys;
mod signer;

pub use canonical::{classify_scalar, ScalarForm};
pub use keys::{
    derive_public_key, PrivateKey, PublicKey, Signature, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE,
    SIGNATURE_SIZE,
};
pub use signer::{sign, sign_parts, verify, verify_parts};

// The curve backend and the hash builder are internal; they expose exactly
// the operations the signer invokes, so the arithmetic library can be
// swapped without touching the scheme itself.
