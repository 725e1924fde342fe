//! Image loader simulation results.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{num_str, Radix};

/// Segment as mapped by the loader simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedSegment {
    pub index: u64,
    pub name: String,
    pub address: u64,
    pub size: u64,
}

impl LoadedSegment {
    pub fn new<N: Into<String>>(index: u64, name: N, address: u64, size: u64) -> Self {
        Self {
            index,
            name: name.into(),
            address,
            size,
        }
    }
}

/// Why the loader refused or degraded the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderErrorInfo {
    pub code: Option<u32>,
    /// Symbolic error name, e.g. `LDR_ERROR_FILE_TOO_SMALL`
    pub code_str: String,
    pub message: String,
    /// Whether the image would still be mapped by the OS loader
    pub is_loadable: bool,
}

impl LoaderErrorInfo {
    pub fn is_error(&self) -> bool {
        self.code.is_some_and(|c| c != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderInfo {
    pub base_address: Option<u64>,
    segments: Vec<LoadedSegment>,
    pub status_message: String,
    pub error_info: LoaderErrorInfo,
}

impl LoaderInfo {
    pub fn add_loaded_segment(&mut self, segment: LoadedSegment) {
        self.segments.push(segment);
    }

    pub fn loaded_segments(&self) -> &[LoadedSegment] {
        &self.segments
    }

    pub fn number_of_loaded_segments(&self) -> usize {
        self.segments.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_loaded_segments`].
    pub fn loaded_segment(&self, position: usize) -> &LoadedSegment {
        &self.segments[position]
    }

    pub fn base_address_str(&self, radix: Radix) -> String {
        num_str(self.base_address, radix)
    }

    pub fn number_of_loaded_segments_str(&self, radix: Radix) -> String {
        radix.render(self.segments.len() as u64)
    }
}
