//! Import table and missing-dependency information.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::numeric::{num_str, Radix};

/// How an imported symbol is used by the importing module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportUsage {
    #[default]
    Unknown,
    Function,
    Object,
    File,
}

impl fmt::Display for ImportUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportUsage::Unknown => write!(f, "UNKNOWN"),
            ImportUsage::Function => write!(f, "FUNCTION"),
            ImportUsage::Object => write!(f, "OBJECT"),
            ImportUsage::File => write!(f, "FILE"),
        }
    }
}

/// One imported symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Symbol name; empty for ordinal-only imports
    pub name: String,
    /// Library the symbol is imported from
    pub library_name: String,
    pub usage: ImportUsage,
    /// Address of the import slot (IAT entry, GOT entry, ...)
    pub address: Option<u64>,
    /// Import ordinal, if imported by ordinal
    pub ordinal: Option<u64>,
}

impl Import {
    /// Create a new Import of `name` from `library_name`
    pub fn new<N: Into<String>, L: Into<String>>(name: N, library_name: L) -> Self {
        Self {
            name: name.into(),
            library_name: library_name.into(),
            ..Default::default()
        }
    }

    /// Set the import slot address
    pub fn with_address(mut self, address: u64) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the import ordinal
    pub fn with_ordinal(mut self, ordinal: u64) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Set how the symbol is used
    pub fn with_usage(mut self, usage: ImportUsage) -> Self {
        self.usage = usage;
        self
    }
}

/// Imports plus the import-hash digests computed over them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTable {
    libraries: Vec<String>,
    imports: Vec<Import>,
    missing_dependencies: Vec<String>,
    /// CRC32 of the normalized import list
    pub imphash_crc32: String,
    /// MD5 of the normalized import list (the classic imphash)
    pub imphash_md5: String,
    /// SHA-256 of the normalized import list
    pub imphash_sha256: String,
    /// TLSH of the normalized import list
    pub imphash_tlsh: String,
}

impl ImportTable {
    /// Append an imported library name
    pub fn add_library<S: Into<String>>(&mut self, name: S) {
        self.libraries.push(name.into());
    }

    /// Append an imported symbol
    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    /// Record a library the loader simulation could not resolve.
    pub fn add_missing_dependency<S: Into<String>>(&mut self, name: S) {
        self.missing_dependencies.push(name.into());
    }

    /// Imported library names in insertion order
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Imported symbols in insertion order
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Number of imported libraries
    pub fn number_of_libraries(&self) -> usize {
        self.libraries.len()
    }

    /// Number of imported symbols
    pub fn number_of_imports(&self) -> usize {
        self.imports.len()
    }

    /// Check if any symbol was imported
    pub fn has_records(&self) -> bool {
        !self.imports.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_imports`].
    pub fn import(&self, position: usize) -> &Import {
        &self.imports[position]
    }

    /// Name of the import at `position`
    pub fn import_name(&self, position: usize) -> &str {
        &self.imports[position].name
    }

    /// Library of the import at `position`
    pub fn import_library_name(&self, position: usize) -> &str {
        &self.imports[position].library_name
    }

    /// Usage of the import at `position`
    pub fn import_usage_str(&self, position: usize) -> String {
        self.imports[position].usage.to_string()
    }

    /// Slot address of the import at `position` in the requested radix
    pub fn import_address_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.imports[position].address, radix)
    }

    /// Ordinal of the import at `position` in the requested radix
    pub fn import_ordinal_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.imports[position].ordinal, radix)
    }

    /// Number of libraries the loader could not resolve
    pub fn number_of_missing_dependencies(&self) -> usize {
        self.missing_dependencies.len()
    }

    /// Name of the unresolved library at `position`
    pub fn missing_dependency(&self, position: usize) -> &str {
        &self.missing_dependencies[position]
    }
}
