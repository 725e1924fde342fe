//! PE Rich header information.
//!
//! The Rich header sits between the DOS stub and the PE header and lists the
//! Microsoft toolchain components that produced the image. The parser decodes
//! it; this record keeps the decoded records, the raw decrypted bytes and the
//! digests computed over them.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{dec_str, num_str, Radix};

/// A single Rich header record: one toolchain component and its use count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichRecord {
    /// Product ID (high 16 bits of the first DWORD)
    pub product_id: Option<u16>,
    /// Build number (low 16 bits of the first DWORD)
    pub product_build: Option<u16>,
    /// Number of objects produced by this component
    pub number_of_uses: Option<u32>,
    /// Product name when the ID is known (e.g. `Utc1900_CPP`)
    pub product_name: String,
    /// Visual Studio release the product shipped with
    pub visual_studio_name: String,
}

impl RichRecord {
    pub fn new(product_id: u16, product_build: u16, number_of_uses: u32) -> Self {
        Self {
            product_id: Some(product_id),
            product_build: Some(product_build),
            number_of_uses: Some(number_of_uses),
            ..Default::default()
        }
    }
}

/// Decoded Rich header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichHeaderInfo {
    /// Hex rendering of the XOR key as stored after the `Rich` marker
    pub signature: String,
    /// File offset of the `DanS` marker
    pub offset: Option<u64>,
    /// XOR key
    pub key: Option<u64>,
    records: Vec<RichRecord>,
    /// Decrypted header bytes
    pub raw_bytes: Vec<u8>,
    pub crc32: String,
    pub md5: String,
    pub sha256: String,
}

impl RichHeaderInfo {
    pub fn add_record(&mut self, record: RichRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RichRecord] {
        &self.records
    }

    pub fn number_of_records(&self) -> usize {
        self.records.len()
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }

    pub fn key_str(&self, radix: Radix) -> String {
        num_str(self.key, radix)
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_records`].
    pub fn record_product_id_str(&self, position: usize) -> String {
        dec_str(self.records[position].product_id)
    }

    pub fn record_product_build_str(&self, position: usize) -> String {
        dec_str(self.records[position].product_build)
    }

    pub fn record_number_of_uses_str(&self, position: usize) -> String {
        dec_str(self.records[position].number_of_uses)
    }

    pub fn record_product_name(&self, position: usize) -> &str {
        &self.records[position].product_name
    }

    pub fn record_visual_studio_name(&self, position: usize) -> &str {
        &self.records[position].visual_studio_name
    }

    /// Raw bytes as lower-case hex, empty when none were stored.
    pub fn raw_bytes_str(&self) -> String {
        hex::encode(&self.raw_bytes)
    }
}
