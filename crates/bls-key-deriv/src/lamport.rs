//! Lamport-style mixing of a parent key and a child index.
//!
//! A child key is not derived from its parent directly. Instead the parent key is expanded into
//! two Lamport one-time secret keys (one from the key, one from its bit-wise complement), every
//! chunk of both is hashed, and the concatenated hashes are compressed into a single 32-byte
//! value. That value becomes the IKM of [`crate::hkdf_mod_r`].

use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use crate::{
    codec::{i2osp_4, sha256, HASH_LEN},
    DerivationError, SecretKey,
};

/// Number of 32-byte chunks in a Lamport secret key.
pub const LAMPORT_CHUNKS: usize = 255;

/// HKDF-Expand output length consumed by [`ikm_to_lamport_sk`].
pub const LAMPORT_OKM_LEN: usize = HASH_LEN * LAMPORT_CHUNKS;

/// A Lamport secret key: [`LAMPORT_CHUNKS`] chunks of [`HASH_LEN`] bytes.
pub type LamportSecretKey = [[u8; HASH_LEN]; LAMPORT_CHUNKS];

/// A compressed Lamport public key, the SHA-256 of all chunk hashes of both Lamport secret keys.
pub type CompressedLamportPublicKey = [u8; HASH_LEN];

/// Returns the bit-wise negation of `ikm`.
pub fn flip_bits<const N: usize>(ikm: &[u8; N]) -> [u8; N] {
    ikm.map(|b| !b)
}

/// Expands `ikm` into a Lamport secret key.
///
/// `PRK = HKDF-Extract(salt, ikm)`, `OKM = HKDF-Expand(PRK, "", 255 * 32)`, then `OKM` is split
/// into 32-byte chunks in order.
///
/// # Errors
///
/// Returns [`DerivationError::DerivationFailure`] if HKDF-Expand cannot produce
/// [`LAMPORT_OKM_LEN`] bytes.
pub fn ikm_to_lamport_sk(
    ikm: &[u8],
    salt: &[u8; 4],
) -> Result<Zeroizing<LamportSecretKey>, DerivationError> {
    let hk = Hkdf::<Sha256>::new(Some(&salt[..]), ikm);

    let mut lamport_sk = Zeroizing::new([[0u8; HASH_LEN]; LAMPORT_CHUNKS]);
    hk.expand(&[], lamport_sk.as_flattened_mut())
        .map_err(|_| DerivationError::DerivationFailure {
            len: LAMPORT_OKM_LEN,
        })?;

    Ok(lamport_sk)
}

/// Computes the compressed Lamport public key of `parent_sk` for the child at `index`.
///
/// # Errors
///
/// Propagates any failure of [`ikm_to_lamport_sk`].
pub fn parent_sk_to_lamport_pk(
    parent_sk: &SecretKey,
    index: u32,
) -> Result<CompressedLamportPublicKey, DerivationError> {
    let salt = i2osp_4(index);
    let ikm = Zeroizing::new(parent_sk.to_bytes());

    let lamport_0 = ikm_to_lamport_sk(&ikm[..], &salt)?;
    let not_ikm = Zeroizing::new(flip_bits(&ikm));
    let lamport_1 = ikm_to_lamport_sk(&not_ikm[..], &salt)?;

    // Order is significant: every chunk of `lamport_0`, then every chunk of `lamport_1`.
    let mut lamport_pk = Sha256::new();
    for chunk in lamport_0.iter().chain(lamport_1.iter()) {
        lamport_pk.update(sha256(chunk));
    }

    trace!(%index, "compressed lamport public key");
    Ok(lamport_pk.finalize().into())
}
