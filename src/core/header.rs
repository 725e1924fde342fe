//! File header information.
//!
//! Collects the header-level facts reported by the format parser: identity
//! strings (version, OS/ABI, status), layout of the segment and section
//! tables, PE optional-header sizes and overlay placement.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::flags::FlagSet;
use crate::core::numeric::{dec_str, float_str, num_str, Radix};

/// Header-level information about the input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileHeader {
    /// Header timestamp as rendered by the parser
    pub time_stamp: String,
    /// Parser verdict on the header (e.g., "Correct", "Damaged")
    pub file_status: String,
    pub file_version: String,
    pub file_header_version: String,
    /// Target OS / ABI name
    pub os_abi: String,
    pub os_abi_version: String,
    /// File-level characteristics
    pub file_flags: FlagSet,
    /// PE DLL characteristics
    pub dll_flags: FlagSet,
    pub bits_in_byte: Option<u64>,
    pub bits_in_word: Option<u64>,
    /// Size of the format's main header
    pub file_header_size: Option<u64>,
    /// Program header table placement
    pub segment_table_offset: Option<u64>,
    pub segment_table_entry_size: Option<u64>,
    pub segment_table_size: Option<u64>,
    /// Segment count as declared in the header
    pub declared_segments: Option<u64>,
    /// Section header table placement
    pub section_table_offset: Option<u64>,
    pub section_table_entry_size: Option<u64>,
    pub section_table_size: Option<u64>,
    /// Section count as declared in the header
    pub declared_sections: Option<u64>,
    pub coff_file_header_size: Option<u64>,
    /// PE optional header size
    pub optional_header_size: Option<u64>,
    /// PE optional header checksum
    pub checksum: Option<u64>,
    pub stack_reserve_size: Option<u64>,
    pub stack_commit_size: Option<u64>,
    pub heap_reserve_size: Option<u64>,
    pub heap_commit_size: Option<u64>,
    /// `NumberOfRvaAndSizes`
    pub declared_data_directories: Option<u64>,
    pub declared_symbol_tables: Option<u64>,
    /// Data appended after the last mapped byte
    pub overlay_offset: Option<u64>,
    pub overlay_size: Option<u64>,
    /// Shannon entropy of the overlay in bits per byte
    pub overlay_entropy: Option<f64>,
}

impl FileHeader {
    /// Number of bits in a byte, in decimal
    pub fn bits_in_byte_str(&self) -> String {
        dec_str(self.bits_in_byte)
    }

    /// Number of bits in a machine word, in decimal
    pub fn bits_in_word_str(&self) -> String {
        dec_str(self.bits_in_word)
    }

    /// File header size in the requested radix
    pub fn file_header_size_str(&self, radix: Radix) -> String {
        num_str(self.file_header_size, radix)
    }

    /// Segment table offset in the requested radix
    pub fn segment_table_offset_str(&self, radix: Radix) -> String {
        num_str(self.segment_table_offset, radix)
    }

    /// Segment table entry size in the requested radix
    pub fn segment_table_entry_size_str(&self, radix: Radix) -> String {
        num_str(self.segment_table_entry_size, radix)
    }

    /// Segment table size in the requested radix
    pub fn segment_table_size_str(&self, radix: Radix) -> String {
        num_str(self.segment_table_size, radix)
    }

    /// Declared segments in decimal
    pub fn declared_segments_str(&self) -> String {
        dec_str(self.declared_segments)
    }

    /// Section table offset in the requested radix
    pub fn section_table_offset_str(&self, radix: Radix) -> String {
        num_str(self.section_table_offset, radix)
    }

    /// Section table entry size in the requested radix
    pub fn section_table_entry_size_str(&self, radix: Radix) -> String {
        num_str(self.section_table_entry_size, radix)
    }

    /// Section table size in the requested radix
    pub fn section_table_size_str(&self, radix: Radix) -> String {
        num_str(self.section_table_size, radix)
    }

    /// Declared sections in decimal
    pub fn declared_sections_str(&self) -> String {
        dec_str(self.declared_sections)
    }

    /// COFF file header size in the requested radix
    pub fn coff_file_header_size_str(&self, radix: Radix) -> String {
        num_str(self.coff_file_header_size, radix)
    }

    /// Optional header size in the requested radix
    pub fn optional_header_size_str(&self, radix: Radix) -> String {
        num_str(self.optional_header_size, radix)
    }
    /// Checksum, always hexadecimal with `0x` prefix
    pub fn checksum_str(&self) -> String {
        num_str(self.checksum, Radix::HexWithPrefix)
    }

    /// Stack reserve size in the requested radix
    pub fn stack_reserve_size_str(&self, radix: Radix) -> String {
        num_str(self.stack_reserve_size, radix)
    }

    /// Stack commit size in the requested radix
    pub fn stack_commit_size_str(&self, radix: Radix) -> String {
        num_str(self.stack_commit_size, radix)
    }

    /// Heap reserve size in the requested radix
    pub fn heap_reserve_size_str(&self, radix: Radix) -> String {
        num_str(self.heap_reserve_size, radix)
    }

    /// Heap commit size in the requested radix
    pub fn heap_commit_size_str(&self, radix: Radix) -> String {
        num_str(self.heap_commit_size, radix)
    }

    /// Declared data directories in decimal
    pub fn declared_data_directories_str(&self) -> String {
        dec_str(self.declared_data_directories)
    }

    /// Declared symbol tables in decimal
    pub fn declared_symbol_tables_str(&self) -> String {
        dec_str(self.declared_symbol_tables)
    }

    /// Overlay offset in the requested radix
    pub fn overlay_offset_str(&self, radix: Radix) -> String {
        num_str(self.overlay_offset, radix)
    }

    /// Overlay size in the requested radix
    pub fn overlay_size_str(&self, radix: Radix) -> String {
        num_str(self.overlay_size, radix)
    }

    /// Overlay entropy with `precision` decimal places
    pub fn overlay_entropy_str(&self, precision: usize) -> String {
        float_str(self.overlay_entropy, precision)
    }
}

/// Timestamps scattered across PE structures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeTimestamps {
    /// COFF file header `TimeDateStamp`
    pub coff_time: Option<u64>,
    /// Export directory `TimeDateStamp`
    pub export_time: Option<u64>,
    /// Resource directory `TimeDateStamp`
    pub resource_time: Option<u64>,
    /// Load configuration `TimeDateStamp`
    pub config_time: Option<u64>,
    /// One entry per debug directory record
    pub debug_times: Vec<u64>,
}

impl PeTimestamps {
    /// Render a UNIX timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
    ///
    /// Values outside the representable calendar range render as empty.
    pub fn utc_str(timestamp: Option<u64>) -> String {
        timestamp
            .and_then(|ts| i64::try_from(ts).ok())
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// COFF timestamp in UTC
    pub fn coff_time_str(&self) -> String {
        Self::utc_str(self.coff_time)
    }

    /// Export directory timestamp in UTC
    pub fn export_time_str(&self) -> String {
        Self::utc_str(self.export_time)
    }

    /// Resource directory timestamp in UTC
    pub fn resource_time_str(&self) -> String {
        Self::utc_str(self.resource_time)
    }

    /// Load configuration timestamp in UTC
    pub fn config_time_str(&self) -> String {
        Self::utc_str(self.config_time)
    }

    pub fn has_any(&self) -> bool {
        self.coff_time.is_some()
            || self.export_time.is_some()
            || self.resource_time.is_some()
            || self.config_time.is_some()
            || !self.debug_times.is_empty()
    }
}
