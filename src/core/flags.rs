//! Bit-flag fields with human-readable descriptors.
//!
//! Format parsers report flags as a raw value, the number of meaningful bits
//! and a list of (description, abbreviation) pairs for the bits that are set.
//! The same shape is shared by file flags, DLL characteristics, segment and
//! section flags and dynamic-entry flags.

use serde::{Deserialize, Serialize};

/// One decoded flag: long description plus short abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagDescriptor {
    pub description: String,
    pub abbreviation: String,
}

impl FlagDescriptor {
    pub fn new<D: Into<String>, A: Into<String>>(description: D, abbreviation: A) -> Self {
        Self {
            description: description.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Raw flags value, its width in bits and its decoded descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    /// Number of meaningful bits in `value`
    pub size: Option<u64>,
    /// Raw flags value
    pub value: Option<u64>,
    descriptors: Vec<FlagDescriptor>,
}

impl FlagSet {
    pub fn new(size: u64, value: u64) -> Self {
        Self {
            size: Some(size),
            value: Some(value),
            descriptors: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: u64) {
        self.size = Some(size);
    }

    pub fn set_value(&mut self, value: u64) {
        self.value = Some(value);
    }

    /// Render the flags as a bit string, most significant bit first.
    ///
    /// Returns an empty string unless both the width and the value are known.
    /// The width is clamped to the 64 bits `value` can hold.
    pub fn flags_str(&self) -> String {
        let (Some(size), Some(value)) = (self.size, self.value) else {
            return String::new();
        };
        (0..size.min(u64::BITS as u64))
            .rev()
            .map(|bit| if value & (1u64 << bit) != 0 { '1' } else { '0' })
            .collect()
    }

    pub fn add_descriptor<D: Into<String>, A: Into<String>>(
        &mut self,
        description: D,
        abbreviation: A,
    ) {
        self.descriptors
            .push(FlagDescriptor::new(description, abbreviation));
    }

    pub fn clear_descriptors(&mut self) {
        self.descriptors.clear();
    }

    pub fn number_of_descriptors(&self) -> usize {
        self.descriptors.len()
    }

    pub fn descriptors(&self) -> &[FlagDescriptor] {
        &self.descriptors
    }

    /// Descriptions and abbreviations as two parallel lists, in insertion order.
    pub fn descriptor_lists(&self) -> (Vec<String>, Vec<String>) {
        self.descriptors
            .iter()
            .map(|d| (d.description.clone(), d.abbreviation.clone()))
            .unzip()
    }
}
