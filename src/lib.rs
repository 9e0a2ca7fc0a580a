//! # vouch
//!
//! The signature engine of the Vouch ledger.
//!
//! Every block and transaction admitted into the chain is authenticated by
//! a deterministic Edwards-curve signature with SHA3-512 as the hash
//! primitive. This facade crate re-exports the workspace members:
//!
//! - [`vouch-sign`]: signing and verification
//! - [`vouch-internal`]: constant-time helpers shared across the workspace
//!
//! ## Usage
//!
//! ```
//! use vouch::prelude::*;
//!
//! # fn main() -> vouch::sign::Result<()> {
//! let private_key = PrivateKey::from_bytes([7u8; 32]);
//! let public_key = derive_public_key(&private_key);
//!
//! let signature = sign(&private_key, b"block header bytes")?;
//! assert!(verify(&public_key, b"block header bytes", &signature));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use vouch_internal as internal;
pub use vouch_sign as sign;

/// Common imports for vouch users
pub mod prelude {
    pub use crate::sign::{Error, Result};

    pub use crate::sign::{
        classify_scalar, derive_public_key, sign, sign_parts, verify, verify_parts, PrivateKey,
        PublicKey, ScalarForm, Signature,
    };

    pub use crate::internal::constant_time::ct_eq;
}
