//! File layout: data directories, segments and sections.
//!
//! These mirror the program-header and section-header views of a binary as
//! reported by the format parser. Indices and sizes are kept as declared in
//! the file; nothing here is recomputed.

use serde::{Deserialize, Serialize};

use crate::core::digests::Digests;
use crate::core::flags::FlagSet;
use crate::core::numeric::{dec_str, float_str, num_str, Radix};

/// PE data directory entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDirectory {
    /// Directory name (e.g., "Import table")
    pub directory_type: String,
    /// Relative virtual address of the directory
    pub address: Option<u64>,
    /// Size of the directory in bytes
    pub size: Option<u64>,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new<T: Into<String>>(directory_type: T, address: u64, size: u64) -> Self {
        Self {
            directory_type: directory_type.into(),
            address: Some(address),
            size: Some(size),
        }
    }

    /// Directory address in the requested radix
    pub fn address_str(&self, radix: Radix) -> String {
        num_str(self.address, radix)
    }

    /// Directory size in the requested radix
    pub fn size_str(&self, radix: Radix) -> String {
        num_str(self.size, radix)
    }
}

/// Program header / load command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSegment {
    /// Position in the program header table
    pub index: Option<u64>,
    /// Segment type (e.g., "LOAD", "DYNAMIC")
    pub segment_type: String,
    /// File offset where segment data begins
    pub offset: Option<u64>,
    /// Virtual address the segment is mapped at
    pub virtual_address: Option<u64>,
    /// Physical address, where the format defines one
    pub physical_address: Option<u64>,
    /// Bytes occupied in the file
    pub size_in_file: Option<u64>,
    /// Bytes occupied once mapped
    pub size_in_memory: Option<u64>,
    /// Required alignment
    pub alignment: Option<u64>,
    /// Segment flags (permissions and format-specific bits)
    pub flags: FlagSet,
    /// Digests of the segment's file bytes
    pub hashes: Digests,
}

impl FileSegment {
    /// Program header index in decimal
    pub fn index_str(&self) -> String {
        dec_str(self.index)
    }

    /// File offset in the requested radix
    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }

    /// Virtual address in the requested radix
    pub fn virtual_address_str(&self, radix: Radix) -> String {
        num_str(self.virtual_address, radix)
    }

    /// Physical address in the requested radix
    pub fn physical_address_str(&self, radix: Radix) -> String {
        num_str(self.physical_address, radix)
    }

    /// Size in the file in the requested radix
    pub fn size_in_file_str(&self, radix: Radix) -> String {
        num_str(self.size_in_file, radix)
    }

    /// Size in memory in the requested radix
    pub fn size_in_memory_str(&self, radix: Radix) -> String {
        num_str(self.size_in_memory, radix)
    }

    /// Alignment in the requested radix
    pub fn alignment_str(&self, radix: Radix) -> String {
        num_str(self.alignment, radix)
    }
}

/// Section header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSection {
    /// Position in the section header table
    pub index: Option<u64>,
    /// Section name (e.g., ".text", ".data")
    pub name: String,
    /// Format-specific section type
    pub section_type: String,
    /// File offset where section data begins
    pub offset: Option<u64>,
    /// Bytes occupied in the file
    pub size_in_file: Option<u64>,
    /// Size of one entry for table sections
    pub entry_size: Option<u64>,
    /// Virtual address the section is mapped at
    pub start_address: Option<u64>,
    /// Bytes occupied once mapped
    pub size_in_memory: Option<u64>,
    /// COFF relocation table offset
    pub relocations_table_offset: Option<u64>,
    /// COFF relocation count
    pub number_of_relocations: Option<u64>,
    /// COFF line-number table offset
    pub line_numbers_table_offset: Option<u64>,
    /// COFF line-number count
    pub number_of_line_numbers: Option<u64>,
    /// Required alignment once mapped
    pub memory_alignment: Option<u64>,
    /// ELF `sh_link`
    pub link_to_another_section: Option<u64>,
    /// ELF `sh_info`
    pub extra_info: Option<u64>,
    pub line_offset: Option<u64>,
    pub relocations_line_offset: Option<u64>,
    /// Shannon entropy in bits per byte, as computed upstream
    pub entropy: Option<f64>,
    /// Section flags
    pub flags: FlagSet,
    /// Digests of the section's file bytes
    pub hashes: Digests,
}

impl FileSection {
    /// Create a new FileSection with only its index and name set
    pub fn new<N: Into<String>>(index: u64, name: N) -> Self {
        Self {
            index: Some(index),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Section header index in decimal
    pub fn index_str(&self) -> String {
        dec_str(self.index)
    }

    /// File offset in the requested radix
    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }

    /// Size in the file in the requested radix
    pub fn size_in_file_str(&self, radix: Radix) -> String {
        num_str(self.size_in_file, radix)
    }

    /// Entry size in the requested radix
    pub fn entry_size_str(&self, radix: Radix) -> String {
        num_str(self.entry_size, radix)
    }

    /// Start address in the requested radix
    pub fn start_address_str(&self, radix: Radix) -> String {
        num_str(self.start_address, radix)
    }

    /// Size in memory in the requested radix
    pub fn size_in_memory_str(&self, radix: Radix) -> String {
        num_str(self.size_in_memory, radix)
    }

    /// Relocation table offset in the requested radix
    pub fn relocations_table_offset_str(&self, radix: Radix) -> String {
        num_str(self.relocations_table_offset, radix)
    }

    /// Relocation count in decimal
    pub fn number_of_relocations_str(&self) -> String {
        dec_str(self.number_of_relocations)
    }

    /// Line-number table offset in the requested radix
    pub fn line_numbers_table_offset_str(&self, radix: Radix) -> String {
        num_str(self.line_numbers_table_offset, radix)
    }

    /// Line-number count in decimal
    pub fn number_of_line_numbers_str(&self) -> String {
        dec_str(self.number_of_line_numbers)
    }

    /// Memory alignment in the requested radix
    pub fn memory_alignment_str(&self, radix: Radix) -> String {
        num_str(self.memory_alignment, radix)
    }

    /// Linked section index in decimal
    pub fn link_to_another_section_str(&self) -> String {
        dec_str(self.link_to_another_section)
    }

    /// Extra info in the requested radix
    pub fn extra_info_str(&self, radix: Radix) -> String {
        num_str(self.extra_info, radix)
    }

    pub fn line_offset_str(&self, radix: Radix) -> String {
        num_str(self.line_offset, radix)
    }

    pub fn relocations_line_offset_str(&self, radix: Radix) -> String {
        num_str(self.relocations_line_offset, radix)
    }

    /// Entropy with `precision` decimal places
    pub fn entropy_str(&self, precision: usize) -> String {
        float_str(self.entropy, precision)
    }
}
