//! Well-known validator key paths.
//!
//! ```text
//! m / purpose / coin_type / account / use
//! ```
//!
//! | Path                        | Key              |
//! |-----------------------------|------------------|
//! | `m/12381/3600/{account}/0`   | Withdrawal key   |
//! | `m/12381/3600/{account}/0/0` | Signing key      |

use crate::DerivationPath;

/// Purpose index, named after the BLS12-381 curve.
pub const PURPOSE: u32 = 12381;

/// Coin type of the Ethereum consensus layer.
pub const ETH_COIN_TYPE: u32 = 3600;

/// Path `m/12381/3600/{account}`.
pub fn account_path(account: u32) -> DerivationPath {
    DerivationPath::master()
        .child(PURPOSE)
        .child(ETH_COIN_TYPE)
        .child(account)
}

/// Path of the withdrawal key of `account`: `m/12381/3600/{account}/0`.
pub fn withdrawal_key_path(account: u32) -> DerivationPath {
    account_path(account).child(0)
}

/// Path of the signing key of `account`: `m/12381/3600/{account}/0/0`.
pub fn signing_key_path(account: u32) -> DerivationPath {
    withdrawal_key_path(account).child(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(withdrawal_key_path(5).to_string(), "m/12381/3600/5/0");
        assert_eq!(signing_key_path(5).to_string(), "m/12381/3600/5/0/0");
        assert_eq!(account_path(u32::MAX).indices(), &[PURPOSE, ETH_COIN_TYPE, u32::MAX]);
    }
}
