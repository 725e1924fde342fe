//! CRC32/MD5/SHA-256 digest triple as reported by the hashing collaborator.

use serde::{Deserialize, Serialize};

/// Hex digests of one byte range. Empty strings mean "not computed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digests {
    pub crc32: String,
    pub md5: String,
    pub sha256: String,
}

impl Digests {
    pub fn new<C, M, S>(crc32: C, md5: M, sha256: S) -> Self
    where
        C: Into<String>,
        M: Into<String>,
        S: Into<String>,
    {
        Self {
            crc32: crc32.into(),
            md5: md5.into(),
            sha256: sha256.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.crc32.is_empty() && self.md5.is_empty() && self.sha256.is_empty()
    }
}
