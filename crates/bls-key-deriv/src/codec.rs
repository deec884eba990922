//! Fixed-width integer encodings and the hash function shared by every derivation step.
//!
//! All integers are big-endian, following the I2OSP/OS2IP conversions of
//! [RFC 3447](https://www.rfc-editor.org/rfc/rfc3447#section-4).

use std::sync::LazyLock;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// The digest size of [`sha256`] in bytes.
pub const HASH_LEN: usize = 32;

/// The length of an encoded scalar in bytes.
pub const SCALAR_LEN: usize = 32;

/// Big-endian encoding of `r`, the order of the BLS12-381 scalar field.
///
/// `r = 52435875175126190479447740508185965837690552500527637822603658699938581184513`
pub const FIELD_ORDER_BYTES: [u8; SCALAR_LEN] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// The order of the BLS12-381 scalar field.
pub static FIELD_ORDER: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_bytes_be(&FIELD_ORDER_BYTES));

/// SHA-256 of `data`.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; HASH_LEN] {
    Sha256::digest(data.as_ref()).into()
}

/// `I2OSP(index, 4)`.
pub const fn i2osp_4(index: u32) -> [u8; 4] {
    index.to_be_bytes()
}

/// `I2OSP(v, 32)`.
///
/// Returns `None` if `v` does not fit in 32 bytes. Any value reduced modulo
/// [`FIELD_ORDER`] always fits.
pub fn i2osp_32(v: &BigUint) -> Option<[u8; SCALAR_LEN]> {
    let bytes = v.to_bytes_be();
    if bytes.len() > SCALAR_LEN {
        return None;
    }

    let mut out = [0u8; SCALAR_LEN];
    out[SCALAR_LEN - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

/// `OS2IP(data)`.
pub fn os2ip(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_matches_decimal() {
        let decimal = BigUint::parse_bytes(
            b"52435875175126190479447740508185965837690552500527637822603658699938581184513",
            10,
        )
        .unwrap();
        assert_eq!(*FIELD_ORDER, decimal);
    }

    #[test]
    fn i2osp_pads_on_the_left() {
        let out = i2osp_32(&BigUint::from(0x0102u32)).unwrap();
        assert_eq!(out[..30], [0u8; 30]);
        assert_eq!(out[30..], [0x01, 0x02]);

        assert_eq!(i2osp_32(&BigUint::ZERO), Some([0u8; 32]));
        assert_eq!(i2osp_4(0x0a0b0c0d), [0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn i2osp_rejects_oversized_values() {
        let too_big = BigUint::from(1u8) << 256;
        assert_eq!(i2osp_32(&too_big), None);

        let max = (BigUint::from(1u8) << 256) - 1u8;
        assert_eq!(i2osp_32(&max), Some([0xff; 32]));
    }

    #[test]
    fn os2ip_inverts_i2osp() {
        let r_minus_one = &*FIELD_ORDER - 1u8;
        let encoded = i2osp_32(&r_minus_one).unwrap();
        assert_eq!(os2ip(&encoded), r_minus_one);
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256(b""),
            [
                0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
                0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
                0x78, 0x52, 0xb8, 0x55,
            ]
        );
    }
}
