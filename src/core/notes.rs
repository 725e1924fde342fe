//! ELF note blocks and core-file information.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{num_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElfNote {
    pub note_type: Option<u64>,
    pub owner: String,
    pub description: String,
}

/// Notes of one `SHT_NOTE` section or `PT_NOTE` segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElfNotes {
    pub section_offset: Option<u64>,
    pub section_size: Option<u64>,
    pub name: String,
    /// Set when the block could not be fully decoded
    pub error_message: String,
    notes: Vec<ElfNote>,
}

impl ElfNotes {
    pub fn new<N: Into<String>>(name: N, section_offset: u64, section_size: u64) -> Self {
        Self {
            name: name.into(),
            section_offset: Some(section_offset),
            section_size: Some(section_size),
            ..Default::default()
        }
    }

    pub fn add_note(&mut self, note: ElfNote) {
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[ElfNote] {
        &self.notes
    }

    pub fn number_of_notes(&self) -> usize {
        self.notes.len()
    }

    pub fn is_malformed(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn section_offset_str(&self, radix: Radix) -> String {
        num_str(self.section_offset, radix)
    }

    pub fn section_size_str(&self, radix: Radix) -> String {
        num_str(self.section_size, radix)
    }
}

/// `NT_FILE` mapping of a core dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMapEntry {
    pub address: u64,
    pub size: u64,
    pub page: u64,
    pub path: String,
}

/// `NT_AUXV` entry, already resolved to its symbolic name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxVectorEntry {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreInfo {
    aux_vector: Vec<AuxVectorEntry>,
    file_map: Vec<FileMapEntry>,
}

impl CoreInfo {
    pub fn add_aux_vector_entry<N: Into<String>>(&mut self, name: N, value: u64) {
        self.aux_vector.push(AuxVectorEntry {
            name: name.into(),
            value,
        });
    }

    pub fn add_file_map_entry(&mut self, entry: FileMapEntry) {
        self.file_map.push(entry);
    }

    pub fn has_aux_vector(&self) -> bool {
        !self.aux_vector.is_empty()
    }

    pub fn has_file_map(&self) -> bool {
        !self.file_map.is_empty()
    }

    pub fn aux_vector(&self) -> &[AuxVectorEntry] {
        &self.aux_vector
    }

    pub fn file_map(&self) -> &[FileMapEntry] {
        &self.file_map
    }
}
