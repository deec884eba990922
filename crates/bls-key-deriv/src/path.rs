//! Hierarchical derivation paths of the form `m/i1/i2/…`.
//!
//! The grammar is `"m" ("/" index)*` where every `index` is a decimal integer in `[0, 2^32)`.
//! Segments are never empty and the master marker `m` only appears first.
//!
//! Each call to [`DerivationPath::derive`] walks the whole path from the seed; nothing is cached
//! between calls.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{
    derive::{MIN_SEED_LEN, SECRET_KEY_LEN},
    DerivationError, SecretKey,
};

/// The first segment of every path.
pub const MASTER_MARKER: &str = "m";

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// A parsed derivation path: the master node followed by zero or more child indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// The path `m`.
    pub const fn master() -> Self {
        Self(Vec::new())
    }

    /// Extends the path by one child index.
    pub fn child(mut self, index: u32) -> Self {
        self.0.push(index);
        self
    }

    /// Child indices in traversal order, excluding the master node.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Number of child derivations below the master node.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this path is just `m`.
    pub fn is_master(&self) -> bool {
        self.0.is_empty()
    }

    /// Derives the secret key at this path from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::SeedTooShort`] if `seed` is shorter than [`MIN_SEED_LEN`], or
    /// any error of the underlying derivation.
    pub fn derive(&self, seed: &[u8]) -> Result<SecretKey, DerivationError> {
        debug!(path = %self, depth = self.depth(), "deriving secret key");

        let master = SecretKey::derive_master(seed)?;
        self.0
            .iter()
            .try_fold(master, |parent, &index| parent.derive_child(index))
    }
}

impl FromIterator<u32> for DerivationPath {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DerivationError::EmptyPath);
        }

        let mut indices = Vec::new();
        for (index, segment) in s.split(PATH_SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(DerivationError::EmptyPathSegment { index });
            }

            match (index, segment) {
                (0, MASTER_MARKER) => {}
                (_, MASTER_MARKER) => {
                    return Err(DerivationError::UnexpectedMasterMarker { index });
                }
                (0, _) => {
                    return Err(DerivationError::MissingMasterMarker {
                        segment: segment.to_owned(),
                    });
                }
                _ => indices.push(parse_child_index(index, segment)?),
            }
        }

        Ok(Self(indices))
    }
}

/// Parses a child segment. `u32::from_str` alone would also accept a leading `+`.
fn parse_child_index(index: usize, segment: &str) -> Result<u32, DerivationError> {
    let invalid = || DerivationError::InvalidChildIndex {
        index,
        segment: segment.to_owned(),
    };

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment.parse().map_err(|_| invalid())
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASTER_MARKER)?;
        for index in &self.0 {
            write!(f, "{PATH_SEPARATOR}{index}")?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Derives the secret key at `path` from `seed` and returns its 32-byte big-endian encoding.
///
/// # Errors
///
/// Returns [`DerivationError::EmptyPath`] for an empty path, [`DerivationError::SeedTooShort`] for
/// a seed shorter than [`MIN_SEED_LEN`], any parse error of [`DerivationPath`], or any error of
/// the underlying derivation. No key material is returned on error.
pub fn derive_key_from_path(
    seed: &[u8],
    path: &str,
) -> Result<[u8; SECRET_KEY_LEN], DerivationError> {
    if path.is_empty() {
        return Err(DerivationError::EmptyPath);
    }
    if seed.len() < MIN_SEED_LEN {
        return Err(DerivationError::SeedTooShort { len: seed.len() });
    }

    let path = path.parse::<DerivationPath>()?;
    Ok(path.derive(seed)?.to_bytes())
}
