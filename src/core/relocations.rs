//! Relocation tables.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{dec_str, num_str, signed_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub symbol_name: String,
    pub offset: Option<u64>,
    pub symbol_value: Option<u64>,
    /// Format-specific relocation type number
    pub relocation_type: Option<u64>,
    pub addend: Option<i64>,
    pub calculated_value: Option<i64>,
}

impl Relocation {
    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }
    pub fn symbol_value_str(&self) -> String {
        dec_str(self.symbol_value)
    }
    pub fn type_str(&self) -> String {
        dec_str(self.relocation_type)
    }
    pub fn addend_str(&self) -> String {
        signed_str(self.addend, Radix::Dec)
    }
    pub fn calculated_value_str(&self) -> String {
        signed_str(self.calculated_value, Radix::Dec)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationTable {
    pub name: String,
    pub associated_symbol_table_name: String,
    pub associated_symbol_table_index: Option<u64>,
    pub applies_to_section_name: String,
    pub applies_to_section_index: Option<u64>,
    pub declared_relocations: Option<u64>,
    relocations: Vec<Relocation>,
}

impl RelocationTable {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_relocation(&mut self, relocation: Relocation) {
        self.relocations.push(relocation);
    }

    pub fn relocations(&self) -> &[Relocation] {
        &self.relocations
    }

    pub fn number_of_relocations(&self) -> usize {
        self.relocations.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_relocations`].
    pub fn relocation(&self, position: usize) -> &Relocation {
        &self.relocations[position]
    }

    pub fn declared_relocations_str(&self) -> String {
        dec_str(self.declared_relocations)
    }

    pub fn associated_symbol_table_index_str(&self) -> String {
        dec_str(self.associated_symbol_table_index)
    }

    pub fn applies_to_section_index_str(&self) -> String {
        dec_str(self.applies_to_section_index)
    }
}
