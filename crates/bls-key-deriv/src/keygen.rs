//! `HKDF_mod_r`: maps input keying material to a non-zero element of the BLS12-381 scalar field.
//!
//! ```text
//! salt = "BLS-SIG-KEYGEN-SALT-"
//! SK = 0
//! while SK == 0:
//!     salt = H(salt)
//!     PRK = HKDF-Extract(salt, IKM || I2OSP(0, 1))
//!     OKM = HKDF-Expand(PRK, key_info || I2OSP(L, 2), L)
//!     SK = OS2IP(OKM) mod r
//! return SK
//! ```
//!
//! `L = ceil((3 * ceil(log2(r))) / 16) = 48`.

use hkdf::Hkdf;
use num_bigint::BigUint;
use sha2::Sha256;
use tracing::warn;
use zeroize::Zeroizing;

use crate::{
    codec::{os2ip, sha256, FIELD_ORDER},
    DerivationError,
};

/// Initial HKDF salt, before the first hash.
pub const KEYGEN_SALT: &[u8; 20] = b"BLS-SIG-KEYGEN-SALT-";

/// HKDF-Expand output length, enough bits that the bias of the reduction mod `r` is negligible.
pub const OKM_LEN: usize = 48;

/// `I2OSP(OKM_LEN, 2)`, appended to `key_info`.
const OKM_LEN_BYTES: [u8; 2] = (OKM_LEN as u16).to_be_bytes();

/// Derives a scalar `0 < SK < r` from `ikm` and `key_info`.
///
/// # Errors
///
/// Returns [`DerivationError::DerivationFailure`] if HKDF-Expand cannot produce [`OKM_LEN`]
/// bytes.
pub fn hkdf_mod_r(ikm: &[u8], key_info: &[u8]) -> Result<BigUint, DerivationError> {
    let mut secret = Zeroizing::new(Vec::with_capacity(ikm.len() + 1));
    secret.extend_from_slice(ikm);
    secret.push(0);

    let mut salt = sha256(KEYGEN_SALT);
    let mut rounds = 1usize;
    loop {
        let sk = hkdf_mod_r_round(&secret, &salt, key_info)?;
        if sk != BigUint::ZERO {
            return Ok(sk);
        }

        warn!(%rounds, "HKDF output reduced to zero, resampling");
        salt = sha256(salt);
        rounds += 1;
    }
}

/// One extract-expand-reduce step under `salt`. `secret` is `IKM || 0x00`; the result may be zero.
fn hkdf_mod_r_round(
    secret: &[u8],
    salt: &[u8; 32],
    key_info: &[u8],
) -> Result<BigUint, DerivationError> {
    let hk = Hkdf::<Sha256>::new(Some(&salt[..]), secret);

    let mut okm = Zeroizing::new([0u8; OKM_LEN]);
    hk.expand_multi_info(&[key_info, &OKM_LEN_BYTES[..]], &mut okm[..])
        .map_err(|_| DerivationError::DerivationFailure { len: OKM_LEN })?;

    Ok(os2ip(&okm[..]) % &*FIELD_ORDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn okm_length_suffix() {
        assert_eq!(OKM_LEN_BYTES, [0, 48]);
    }

    #[test]
    fn reduces_into_field() {
        let sk = hkdf_mod_r(&[0u8; 32], b"").unwrap();
        assert!(sk > BigUint::ZERO);
        assert!(sk < *FIELD_ORDER);
    }

    #[test]
    fn key_info_changes_output() {
        let sk = hkdf_mod_r(&[0u8; 32], b"abc").unwrap();
        let expected = BigUint::parse_bytes(
            b"33126331669171858130826425925971028856858024285573586809495025488578757221965",
            10,
        )
        .unwrap();

        assert_eq!(sk, expected);
        assert_ne!(sk, hkdf_mod_r(&[0u8; 32], b"").unwrap());
    }

    #[test]
    fn resampling_rehashes_current_salt() {
        let mut secret = [0u8; 33];
        let first_salt = sha256(KEYGEN_SALT);
        let second_salt = sha256(first_salt);

        let first = hkdf_mod_r_round(&secret, &first_salt, b"").unwrap();
        assert_eq!(first, hkdf_mod_r(&[0u8; 32], b"").unwrap());

        let second = hkdf_mod_r_round(&secret, &second_salt, b"").unwrap();
        let expected = BigUint::parse_bytes(
            b"50444851152572662093623301662970046822351471474977340789805826881963942728344",
            10,
        )
        .unwrap();
        assert_eq!(second, expected);
        assert_ne!(second, first);

        // The zero suffix is part of the extracted secret.
        secret[32] = 1;
        assert_ne!(hkdf_mod_r_round(&secret, &first_salt, b"").unwrap(), first);
    }
}
