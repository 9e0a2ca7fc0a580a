//! Narrow backend over the curve arithmetic library
//!
//! This is the only module that names `curve25519_dalek` types. The signer
//! talks to it in raw 32-byte scalar and point encodings, so the arithmetic
//! backend can be swapped without touching the scheme.
//!
//! Scalar inputs are reduced modulo the group order on entry. For the
//! clamped private scalar this changes the representative but not any
//! result: the base point has the group order, and all products are taken
//! modulo it.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::{clamp_integer, Scalar};

/// Reduce a 64-byte digest modulo the group order
pub(crate) fn reduce_wide(wide: &[u8; 64]) -> [u8; 32] {
    Scalar::from_bytes_mod_order_wide(wide).to_bytes()
}

/// Reduce a 32-byte scalar encoding modulo the group order
///
/// The input is untouched; callers compare the returned copy against it to
/// decide canonicity.
pub(crate) fn reduce(bytes: &[u8; 32]) -> [u8; 32] {
    Scalar::from_bytes_mod_order(*bytes).to_bytes()
}

/// Clamp a private scalar: clear the low 3 bits, clear the top bit, set the
/// second-highest bit
///
/// No reduction is applied; the bit pattern is the contract.
pub(crate) fn clamp_scalar(bytes: [u8; 32]) -> [u8; 32] {
    clamp_integer(bytes)
}

/// Multiply the base point by a scalar and encode the result
///
/// Constant-time; used on secret scalars.
pub(crate) fn mul_base(scalar: &[u8; 32]) -> [u8; 32] {
    let scalar = Scalar::from_bytes_mod_order(*scalar);
    EdwardsPoint::mul_base(&scalar).compress().to_bytes()
}

/// Compute (a · b + c) modulo the group order
///
/// Constant-time; used to compose the response from challenge, clamped
/// private scalar, and nonce.
pub(crate) fn mul_add(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let a = Scalar::from_bytes_mod_order(*a);
    let b = Scalar::from_bytes_mod_order(*b);
    let c = Scalar::from_bytes_mod_order(*c);
    (a * b + c).to_bytes()
}

/// Compute challenge · (−A) + response · B, where A decodes from
/// `public_key`
///
/// Returns the encoded result, or `None` if `public_key` is not a valid
/// point encoding. Variable-time; every input is public.
pub(crate) fn double_mul_base_negated(
    public_key: &[u8; 32],
    challenge: &[u8; 32],
    response: &[u8; 32],
) -> Option<[u8; 32]> {
    let negated = -CompressedEdwardsY(*public_key).decompress()?;
    let challenge = Scalar::from_bytes_mod_order(*challenge);
    let response = Scalar::from_bytes_mod_order(*response);

    let recomputed =
        EdwardsPoint::vartime_double_scalar_mul_basepoint(&challenge, &negated, &response);
    Some(recomputed.compress().to_bytes())
}
