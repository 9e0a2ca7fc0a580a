//! Deterministic Edwards-curve signatures for the Vouch ledger
//!
//! This crate implements the scheme that authenticates every entity
//! (block, transaction) admitted into the ledger: Ed25519 with SHA3-512
//! substituted for the hash primitive, deterministic per (key, message),
//! with a canonical-form guard on the response half of every signature.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod eddsa;
pub mod error;

pub use eddsa::{
    classify_scalar, derive_public_key, sign, sign_parts, verify, verify_parts, PrivateKey,
    PublicKey, ScalarForm, Signature, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE,
};
pub use error::{Error, Result};
