//! File format classification and byte order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The executable format detected for the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Portable Executable (Windows)
    PE,
    /// Executable and Linkable Format
    ELF,
    /// Common Object File Format
    COFF,
    /// Mach Object file format
    MachO,
    /// Intel HEX text image
    IntelHex,
    /// Raw binary data
    Raw,
    /// Unknown or unsupported format
    #[default]
    Unknown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::PE => write!(f, "PE"),
            Format::ELF => write!(f, "ELF"),
            Format::COFF => write!(f, "COFF"),
            Format::MachO => write!(f, "Mach-O"),
            Format::IntelHex => write!(f, "Intel HEX"),
            Format::Raw => write!(f, "Raw"),
            Format::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Byte order of the file or of a matched pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Endianness {
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "Little endian"),
            Endianness::Big => write!(f, "Big endian"),
        }
    }
}
