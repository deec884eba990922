//! Hierarchical derivation of BLS12-381 secret keys.
//!
//! Implements the tree key derivation of [ERC-2333](https://eips.ethereum.org/EIPS/eip-2333)
//! (master key from a seed, child key from a parent key and an index) and the path traversal of
//! [ERC-2334](https://eips.ethereum.org/EIPS/eip-2334) on top of it. Derived keys are integers in
//! `[1, r)` where `r` is the order of the BLS12-381 scalar field; no curve arithmetic is done here.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bls_key_deriv::{derive_key_from_path, paths::signing_key_path, SecretKey};
//!
//! // One-shot: 32-byte big-endian key at a path string.
//! let key = derive_key_from_path(&seed, "m/12381/3600/0/0/0")?;
//!
//! // Typed paths and step-by-step derivation.
//! let signing = signing_key_path(0).derive(&seed)?;
//! let master = SecretKey::derive_master(&seed)?;
//! let child = master.derive_child(12381)?;
//! ```
//!
//! The seed is expected to come from a BIP-39 mnemonic and must be at least
//! [`MIN_SEED_LEN`] bytes.

pub mod codec;
mod derive;
mod errors;
mod keygen;
pub mod lamport;
mod path;
pub mod paths;


pub use derive::{
    derive_child_key, derive_master_key, SecretKey, MIN_SEED_LEN, SECRET_KEY_LEN,
};
pub use errors::DerivationError;
pub use keygen::{hkdf_mod_r, KEYGEN_SALT, OKM_LEN};
pub use lamport::{ikm_to_lamport_sk, parent_sk_to_lamport_pk};
pub use path::{derive_key_from_path, DerivationPath, MASTER_MARKER, PATH_SEPARATOR};
