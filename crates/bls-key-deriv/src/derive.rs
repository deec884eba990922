//! Master and child secret key derivation.
//!
//! [`SecretKey`] can only be constructed through derivation or by decoding a canonical encoding,
//! so every value satisfies `0 < SK < r`.

use std::fmt;

use num_bigint::BigUint;
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    codec::{i2osp_32, os2ip, FIELD_ORDER, SCALAR_LEN},
    hkdf_mod_r, parent_sk_to_lamport_pk, DerivationError,
};

/// Minimum seed length in bytes.
pub const MIN_SEED_LEN: usize = 32;

/// Length of an encoded [`SecretKey`] in bytes.
pub const SECRET_KEY_LEN: usize = SCALAR_LEN;

/// A BLS12-381 secret key, an integer `0 < SK < r`.
///
/// Stored as its canonical big-endian encoding and zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Derives the master key of the tree rooted at `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::SeedTooShort`] if `seed` is shorter than [`MIN_SEED_LEN`].
    pub fn derive_master(seed: &[u8]) -> Result<Self, DerivationError> {
        if seed.len() < MIN_SEED_LEN {
            return Err(DerivationError::SeedTooShort { len: seed.len() });
        }

        let sk = hkdf_mod_r(seed, b"")?;
        Ok(Self::from_reduced(&sk))
    }

    /// Derives the child of this key at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::DerivationFailure`] if the underlying HKDF fails.
    pub fn derive_child(&self, index: u32) -> Result<Self, DerivationError> {
        let compressed_lamport_pk = parent_sk_to_lamport_pk(self, index)?;
        let sk = hkdf_mod_r(&compressed_lamport_pk, b"")?;

        trace!(%index, "derived child key");
        Ok(Self::from_reduced(&sk))
    }

    /// Decodes a canonical big-endian encoding.
    ///
    /// Returns `None` if the encoded integer is zero or not less than `r`. Zero is rejected even
    /// though the Lamport step would accept a zero parent: no derivation ever yields it, so a zero
    /// encoding is never a key this crate produced.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Option<Self> {
        let sk = os2ip(bytes);
        (sk != BigUint::ZERO && sk < *FIELD_ORDER).then(|| Self(*bytes))
    }

    /// Returns the canonical 32-byte big-endian encoding.
    pub const fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.0
    }

    /// Returns the key as an integer.
    pub fn to_biguint(&self) -> BigUint {
        os2ip(&self.0)
    }

    /// Wraps an integer already reduced modulo `r`.
    fn from_reduced(sk: &BigUint) -> Self {
        debug_assert!(*sk < *FIELD_ORDER, "scalar must be reduced mod r");
        Self(i2osp_32(sk).expect("integers reduced mod r fit in 32 bytes"))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Derives the master key from `seed`.
///
/// # Errors
///
/// See [`SecretKey::derive_master`].
pub fn derive_master_key(seed: &[u8]) -> Result<SecretKey, DerivationError> {
    SecretKey::derive_master(seed)
}

/// Derives the child of `parent` at `index`.
///
/// # Errors
///
/// See [`SecretKey::derive_child`].
pub fn derive_child_key(parent: &SecretKey, index: u32) -> Result<SecretKey, DerivationError> {
    parent.derive_child(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FIELD_ORDER_BYTES;

    #[test]
    fn rejects_short_seed() {
        assert_eq!(
            derive_master_key(&[1u8; 31]),
            Err(DerivationError::SeedTooShort { len: 31 })
        );
        assert!(derive_master_key(&[1u8; 32]).is_ok());
    }

    #[test]
    fn from_bytes_enforces_range() {
        assert_eq!(SecretKey::from_bytes(&[0u8; 32]), None);
        assert_eq!(SecretKey::from_bytes(&FIELD_ORDER_BYTES), None);
        assert_eq!(SecretKey::from_bytes(&[0xff; 32]), None);

        let mut r_minus_one = FIELD_ORDER_BYTES;
        r_minus_one[SECRET_KEY_LEN - 1] = 0;
        let sk = SecretKey::from_bytes(&r_minus_one).unwrap();
        assert_eq!(sk.to_biguint(), &*FIELD_ORDER - 1u8);
        assert_eq!(sk.to_bytes(), r_minus_one);
    }

    #[test]
    fn debug_is_redacted() {
        let sk = derive_master_key(&[9u8; 32]).unwrap();
        let rendered = format!("{sk:?}");

        assert_eq!(rendered, "SecretKey([REDACTED])");
        assert!(!rendered.contains(&hex::encode(sk.to_bytes())));
    }

    #[test]
    fn zeroize_clears_key() {
        let mut sk = derive_master_key(&[9u8; 32]).unwrap();
        sk.zeroize();
        assert_eq!(sk.to_bytes(), [0u8; 32]);
    }
}
