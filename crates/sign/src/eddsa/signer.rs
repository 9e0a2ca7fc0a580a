//! Signing and verification
//!
//! Sign: derive the nonce from the private-key digest and the message,
//! commit to it on the curve, derive the challenge binding commitment,
//! signer and message, compose the response, and guard its canonical form.
//! Verify: guard the response, reject the weak all-zero key, re-derive the
//! challenge, recompute the commitment from the negated public key, and
//! compare in constant time.
//!
//! Both operations are pure and stateless; they read their inputs, write
//! fixed-size scratch, and touch nothing shared.

use vouch_internal::constant_time::ct_eq;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

use super::canonical::{classify_scalar, ScalarForm};
use super::curve;
use super::hashing::{expand_private_key, Hash512Builder};
use super::keys::{PrivateKey, PublicKey, Signature, PUBLIC_KEY_SIZE};

/// Sign a message
///
/// Equivalent to [`sign_parts`] with a single part.
pub fn sign(private_key: &PrivateKey, data: &[u8]) -> Result<Signature> {
    sign_parts(private_key, &[data])
}

/// Sign a message supplied as an ordered sequence of parts
///
/// The parts are hashed in order without being concatenated, so signing
/// `[header, body]` equals signing the joined bytes. Signing is
/// deterministic: the same key and message always produce the same
/// signature.
///
/// # Errors
///
/// Returns [`Error::ResponseOutOfRange`] if the composed response is not
/// canonically reduced. The scalar arithmetic makes this unreachable short
/// of an implementation defect; the signature is checked anyway and no
/// partial output is ever emitted.
pub fn sign_parts(private_key: &PrivateKey, parts: &[&[u8]]) -> Result<Signature> {
    let private_hash = expand_private_key(private_key);

    // nonce = H(private_hash[32..64] || message) mod group order
    //
    // The keyed digest half makes the nonce deterministic per
    // (key, message) yet unpredictable without the private key.
    let mut builder = Hash512Builder::new();
    builder.update(&private_hash[32..]);
    builder.update_parts(parts);
    let nonce_wide = Zeroizing::new(builder.finalize());
    let nonce = Zeroizing::new(curve::reduce_wide(&nonce_wide));

    // commitment = [nonce]B
    let commitment = curve::mul_base(&nonce);

    // clamped private scalar from the first digest half
    let mut scalar = Zeroizing::new([0u8; 32]);
    scalar.copy_from_slice(&private_hash[..32]);
    let clamped = Zeroizing::new(curve::clamp_scalar(*scalar));

    let public_key = curve::mul_base(&clamped);

    // challenge = H(commitment || public key || message) mod group order
    let mut builder = Hash512Builder::new();
    builder.update(&commitment);
    builder.update(&public_key);
    builder.update_parts(parts);
    let challenge = curve::reduce_wide(&builder.finalize());

    // response = (challenge * clamped + nonce) mod group order
    let response = curve::mul_add(&challenge, &clamped, &nonce);

    // A non-reduced response is fatal; a zero response is tolerated and
    // never altered.
    match classify_scalar(&response) {
        ScalarForm::NotReduced => Err(Error::ResponseOutOfRange),
        ScalarForm::Zero | ScalarForm::Reduced => {
            Ok(Signature::from_halves(commitment, response))
        }
    }
}

/// Verify a signature over a message
///
/// Equivalent to [`verify_parts`] with a single part.
pub fn verify(public_key: &PublicKey, data: &[u8], signature: &Signature) -> bool {
    verify_parts(public_key, &[data], signature)
}

/// Verify a signature over a message supplied as an ordered sequence of
/// parts
///
/// Never panics on correctly sized input. Every failure mode (response not
/// canonically reduced or zero, weak public key, undecodable point
/// encoding, commitment mismatch) collapses into `false`, so callers learn
/// nothing about which check failed.
pub fn verify_parts(public_key: &PublicKey, parts: &[&[u8]], signature: &Signature) -> bool {
    let commitment = signature.commitment();
    let response = signature.response();
    let public_key = public_key.to_bytes();

    // reject unless the response is nonzero and canonically reduced
    if classify_scalar(&response) != ScalarForm::Reduced {
        return false;
    }

    // reject the all-zero public key, a known weak key
    if ct_eq(public_key, [0u8; PUBLIC_KEY_SIZE]) {
        return false;
    }

    // challenge = H(commitment || public key || message) mod group order
    let mut builder = Hash512Builder::new();
    builder.update(&commitment);
    builder.update(&public_key);
    builder.update_parts(parts);
    let challenge = curve::reduce_wide(&builder.finalize());

    // R' = [response]B + [challenge](−A)
    let recomputed = match curve::double_mul_base_negated(&public_key, &challenge, &response) {
        Some(encoded) => encoded,
        None => return false,
    };

    ct_eq(&recomputed, &commitment)
}
