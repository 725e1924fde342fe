//! Thread-local storage directory.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{num_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsInfo {
    pub raw_data_start: Option<u64>,
    pub raw_data_end: Option<u64>,
    pub index_address: Option<u64>,
    pub callbacks_address: Option<u64>,
    pub zero_fill_size: Option<u64>,
    pub characteristics: Option<u64>,
    callbacks: Vec<u64>,
}

impl TlsInfo {
    /// A TLS directory is considered present once any of its fields is known.
    pub fn is_used(&self) -> bool {
        self.raw_data_start.is_some()
            || self.raw_data_end.is_some()
            || self.index_address.is_some()
            || self.callbacks_address.is_some()
            || self.zero_fill_size.is_some()
            || self.characteristics.is_some()
            || !self.callbacks.is_empty()
    }

    pub fn add_callback(&mut self, address: u64) {
        self.callbacks.push(address);
    }

    pub fn callbacks(&self) -> &[u64] {
        &self.callbacks
    }

    pub fn number_of_callbacks(&self) -> usize {
        self.callbacks.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_callbacks`].
    pub fn callback_str(&self, position: usize, radix: Radix) -> String {
        radix.render(self.callbacks[position])
    }

    pub fn raw_data_start_str(&self, radix: Radix) -> String {
        num_str(self.raw_data_start, radix)
    }
    pub fn raw_data_end_str(&self, radix: Radix) -> String {
        num_str(self.raw_data_end, radix)
    }
    pub fn index_address_str(&self, radix: Radix) -> String {
        num_str(self.index_address, radix)
    }
    pub fn callbacks_address_str(&self, radix: Radix) -> String {
        num_str(self.callbacks_address, radix)
    }
    pub fn zero_fill_size_str(&self, radix: Radix) -> String {
        num_str(self.zero_fill_size, radix)
    }
    pub fn characteristics_str(&self, radix: Radix) -> String {
        num_str(self.characteristics, radix)
    }
}
