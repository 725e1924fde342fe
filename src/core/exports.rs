//! Export table.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{num_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    pub name: String,
    pub address: Option<u64>,
    pub ordinal: Option<u64>,
}

impl Export {
    pub fn new<N: Into<String>>(name: N, address: u64) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
            ordinal: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTable {
    exports: Vec<Export>,
    pub exphash_crc32: String,
    pub exphash_md5: String,
    pub exphash_sha256: String,
}

impl ExportTable {
    pub fn add_export(&mut self, export: Export) {
        self.exports.push(export);
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    pub fn number_of_exports(&self) -> usize {
        self.exports.len()
    }

    pub fn has_records(&self) -> bool {
        !self.exports.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_exports`].
    pub fn export_name(&self, position: usize) -> &str {
        &self.exports[position].name
    }

    pub fn export_address_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.exports[position].address, radix)
    }

    pub fn export_ordinal_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.exports[position].ordinal, radix)
    }
}
