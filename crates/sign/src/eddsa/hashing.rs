//! Incremental SHA3-512 hashing
//!
//! Both signature digests (nonce and challenge) are computed over an
//! ordered sequence of buffers that is never physically concatenated, so
//! composite entities (header + body) can be signed without copying.

use sha3::{Digest, Sha3_512};
use zeroize::Zeroizing;

use super::keys::PrivateKey;

/// Size of the digests produced here, in bytes
pub(crate) const DIGEST_SIZE: usize = 64;

/// Streaming builder producing a 64-byte digest
pub(crate) struct Hash512Builder {
    hasher: Sha3_512,
}

impl Hash512Builder {
    pub(crate) fn new() -> Self {
        Hash512Builder {
            hasher: Sha3_512::new(),
        }
    }

    /// Absorb a single buffer
    pub(crate) fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Absorb an ordered sequence of buffers
    pub(crate) fn update_parts(&mut self, parts: &[&[u8]]) {
        for part in parts {
            self.hasher.update(part);
        }
    }

    pub(crate) fn finalize(self) -> [u8; DIGEST_SIZE] {
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(self.hasher.finalize().as_slice());
        digest
    }
}

/// Hash the private key into its 64-byte working form
///
/// The first half clamps into the private scalar, the second half salts the
/// nonce derivation. Both halves are secret; the digest is returned in
/// wiped-on-drop scratch and must not outlive the signing call.
pub(crate) fn expand_private_key(private_key: &PrivateKey) -> Zeroizing<[u8; DIGEST_SIZE]> {
    let mut builder = Hash512Builder::new();
    builder.update(private_key.as_bytes());
    Zeroizing::new(builder.finalize())
}
