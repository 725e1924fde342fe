//! ELF dynamic sections.

use serde::{Deserialize, Serialize};

use crate::core::flags::FlagSet;
use crate::core::numeric::{dec_str, num_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicEntry {
    /// Tag name, e.g. `DT_NEEDED`
    pub entry_type: String,
    /// Human readable value, e.g. the needed library name
    pub description: String,
    pub value: Option<u64>,
    pub flags: FlagSet,
}

impl DynamicEntry {
    pub fn new<T: Into<String>>(entry_type: T, value: u64) -> Self {
        Self {
            entry_type: entry_type.into(),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn value_str(&self, radix: Radix) -> String {
        num_str(self.value, radix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicSection {
    pub name: String,
    pub declared_entries: Option<u64>,
    entries: Vec<DynamicEntry>,
}

impl DynamicSection {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_entry(&mut self, entry: DynamicEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DynamicEntry] {
        &self.entries
    }

    pub fn number_of_entries(&self) -> usize {
        self.entries.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_entries`].
    pub fn entry(&self, position: usize) -> &DynamicEntry {
        &self.entries[position]
    }

    pub fn declared_entries_str(&self) -> String {
        dec_str(self.declared_entries)
    }
}
