//! Symbol tables.
//!
//! A table keeps its symbols in insertion order together with zero or more
//! "special information" side tables: per-symbol columns that only some
//! formats provide (e.g. COFF storage class, ELF version). Each side table
//! carries one value per symbol.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{dec_str, num_str, Radix};

/// One symbol table entry as reported by the format parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol name (mangled names are kept as-is)
    pub name: String,
    /// Symbol type (e.g., "FUNC", "OBJECT")
    pub symbol_type: String,
    /// Binding (e.g., "GLOBAL", "LOCAL", "WEAK")
    pub bind: String,
    /// ELF `st_other` rendering
    pub other: String,
    /// Name or index of the section the symbol belongs to
    pub link_to_section: String,
    /// Position in the on-disk table
    pub index: Option<u64>,
    /// Virtual address of the symbol
    pub address: Option<u64>,
    /// Raw symbol value
    pub value: Option<u64>,
    /// Size in bytes
    pub size: Option<u64>,
}

impl Symbol {
    /// Create a new Symbol with only its name set
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Table index in decimal
    pub fn index_str(&self) -> String {
        dec_str(self.index)
    }

    /// Address in the requested radix
    pub fn address_str(&self, radix: Radix) -> String {
        num_str(self.address, radix)
    }

    /// Raw value in decimal
    pub fn value_str(&self) -> String {
        dec_str(self.value)
    }

    /// Size in decimal
    pub fn size_str(&self) -> String {
        dec_str(self.size)
    }
}

/// Extra per-symbol column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialInformation {
    pub description: String,
    pub abbreviation: String,
    values: Vec<String>,
}

impl SpecialInformation {
    /// Create an empty column with its heading
    pub fn new<D: Into<String>, A: Into<String>>(description: D, abbreviation: A) -> Self {
        Self {
            description: description.into(),
            abbreviation: abbreviation.into(),
            values: Vec::new(),
        }
    }

    /// Append the value for the next symbol
    pub fn add_value<V: Into<String>>(&mut self, value: V) {
        self.values.push(value.into());
    }

    /// Number of values in the column
    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_values`].
    pub fn value(&self, position: usize) -> &str {
        &self.values[position]
    }

    /// All values in symbol order
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Ordered symbols plus their side-table columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    /// Table name (e.g., ".symtab", ".dynsym", "COFF")
    pub name: String,
    /// File offset of the table
    pub offset: Option<u64>,
    /// Symbol count declared by the table header
    pub declared_symbols: Option<u64>,
    symbols: Vec<Symbol>,
    special_information: Vec<SpecialInformation>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a symbol; its position becomes its index
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Append a side-table column
    pub fn add_special_information(&mut self, info: SpecialInformation) {
        self.special_information.push(info);
    }

    /// Symbols in insertion order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of stored symbols
    pub fn number_of_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_symbols`].
    pub fn symbol(&self, position: usize) -> &Symbol {
        &self.symbols[position]
    }

    /// Side-table columns in insertion order
    pub fn special_information(&self) -> &[SpecialInformation] {
        &self.special_information
    }

    /// Number of side-table columns
    pub fn number_of_special_information(&self) -> usize {
        self.special_information.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_special_information`].
    pub fn special_information_at(&self, position: usize) -> &SpecialInformation {
        &self.special_information[position]
    }

    /// Table offset in the requested radix
    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }

    /// Declared symbol count in decimal
    pub fn declared_symbols_str(&self) -> String {
        dec_str(self.declared_symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_order() {
        let mut table = SymbolTable::new(".symtab");
        table.declared_symbols = Some(3);
        for (i, name) in ["_start", "main", "exit"].iter().enumerate() {
            let mut symbol = Symbol::new(*name);
            symbol.index = Some(i as u64);
            table.add_symbol(symbol);
        }

        assert_eq!(table.number_of_symbols(), 3);
        assert_eq!(table.symbol(1).name, "main");
        assert_eq!(table.symbol(2).index_str(), "2");
        assert_eq!(table.symbol(2).address_str(Radix::Hex), "");
        assert_eq!(table.declared_symbols_str(), "3");
        assert_eq!(table.offset_str(Radix::Hex), "");
    }

    #[test]
    fn test_special_information() {
        let mut table = SymbolTable::new("COFF");
        let mut storage = SpecialInformation::new("storage class", "sc");
        storage.add_value("EXTERNAL");
        storage.add_value("STATIC");
        table.add_special_information(storage);

        assert_eq!(table.number_of_special_information(), 1);
        let info = table.special_information_at(0);
        assert_eq!(info.abbreviation, "sc");
        assert_eq!(info.number_of_values(), 2);
        assert_eq!(info.value(1), "STATIC");
    }
}
