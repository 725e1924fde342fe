//! The per-file result aggregate.
//!
//! [`ResultModel`] is filled by the analyzers of one introspection run and
//! then handed to the report renderers. Analyzers write through setters and
//! adders, one after the other; renderers only read.
//!
//! Collections are append-only: the position an element was added at is its
//! index for every later lookup. The only operations that reorder or shrink
//! anything after population are the pattern post-processing steps.
//!
//! # Indexed access
//!
//! Accessors taking `(table, index)` pairs do not return `Result`. Callers
//! derive indices from the matching `number_of_*` accessor, and an index
//! outside that range is a caller bug: it trips a debug assertion naming the
//! offending index and panics through slice indexing in release builds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::config::{FileInfoConfig, PatternPolicy};
use crate::core::certificate::CertificateTable;
use crate::core::digests::Digests;
use crate::core::dotnet::DotnetInfo;
use crate::core::dynamic::{DynamicEntry, DynamicSection};
use crate::core::exports::ExportTable;
use crate::core::header::{FileHeader, PeTimestamps};
use crate::core::identity::{Endianness, Format};
use crate::core::imports::ImportTable;
use crate::core::layout::{DataDirectory, FileSection, FileSegment};
use crate::core::loader::{LoadedSegment, LoaderErrorInfo, LoaderInfo};
use crate::core::notes::{CoreInfo, ElfNotes, FileMapEntry};
use crate::core::numeric::{Radix, UNSPECIFIED};
use crate::core::pattern::{Pattern, PatternSet};
use crate::core::pdb::PdbInfo;
use crate::core::relocations::{Relocation, RelocationTable};
use crate::core::resources::ResourceTable;
use crate::core::rich_header::RichHeaderInfo;
use crate::core::status::{ReturnCode, Severity, Status};
use crate::core::strings::{ExtractedString, StringSet};
use crate::core::symbols::{SpecialInformation, Symbol, SymbolTable};
use crate::core::tls::TlsInfo;
use crate::core::tools::ToolInfo;
use crate::core::visual_basic::VisualBasicInfo;
use crate::error::{FileInfoError, Result};
use crate::log_error;

/// Element at `index`, asserting the index contract in debug builds.
#[inline]
fn at<'a, T>(items: &'a [T], index: usize, what: &str) -> &'a T {
    debug_assert!(
        index < items.len(),
        "{} index {} out of range (count {})",
        what,
        index,
        items.len()
    );
    &items[index]
}

#[inline]
fn at_mut<'a, T>(items: &'a mut [T], index: usize, what: &str) -> &'a mut T {
    debug_assert!(
        index < items.len(),
        "{} index {} out of range (count {})",
        what,
        index,
        items.len()
    );
    &mut items[index]
}

/// The three independent pattern collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternCategory {
    Crypto,
    Malware,
    Other,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 3] = [
        PatternCategory::Crypto,
        PatternCategory::Malware,
        PatternCategory::Other,
    ];
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternCategory::Crypto => write!(f, "crypto"),
            PatternCategory::Malware => write!(f, "malware"),
            PatternCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PatternCategory {
    type Err = FileInfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "crypto" => Ok(PatternCategory::Crypto),
            "malware" => Ok(PatternCategory::Malware),
            "other" => Ok(PatternCategory::Other),
            _ => Err(FileInfoError::InvalidInput(format!(
                "unknown pattern category: {}",
                s
            ))),
        }
    }
}

/// One detected anomaly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Stable machine-readable identifier, e.g. `SizeOfHeadersTooSmall`
    pub identifier: String,
    pub description: String,
}

impl Anomaly {
    pub fn new<I: Into<String>, D: Into<String>>(identifier: I, description: D) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
        }
    }
}

/// Unified result of one introspection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultModel {
    pub file_path: String,
    pub format: Format,
    /// Detailed format name as reported by the parser, e.g. `PE32+`
    pub file_format: String,
    /// Word size class, e.g. `64-bit`
    pub file_class: String,
    /// Executable, shared library, object file, ...
    pub file_type: String,
    pub architecture: String,
    pub endianness: Option<Endianness>,
    /// Digests of the whole input file
    pub file_hashes: Digests,
    /// Digests of the raw section table
    pub section_table_hashes: Digests,
    pub telfhash: String,
    pub manifest: String,
    pub compact_manifest: String,

    pub header: FileHeader,
    pub pe_timestamps: PeTimestamps,
    pub tools: ToolInfo,
    pub rich_header: RichHeaderInfo,
    pub visual_basic: VisualBasicInfo,
    pub pdb: PdbInfo,
    pub imports: ImportTable,
    pub exports: ExportTable,
    pub resources: ResourceTable,
    pub tls: TlsInfo,
    pub core: CoreInfo,
    pub loader: LoaderInfo,
    pub dotnet: DotnetInfo,

    data_directories: Vec<DataDirectory>,
    segments: Vec<FileSegment>,
    sections: Vec<FileSection>,
    symbol_tables: Vec<SymbolTable>,
    relocation_tables: Vec<RelocationTable>,
    dynamic_sections: Vec<DynamicSection>,
    elf_notes: Vec<ElfNotes>,
    crypto_patterns: PatternSet,
    malware_patterns: PatternSet,
    other_patterns: PatternSet,
    strings: StringSet,
    anomalies: Vec<Anomaly>,

    certificate_table: Option<Arc<CertificateTable>>,
    signature_verified: Option<bool>,

    status: Status,
    messages: Vec<String>,
    deps_list_failed_to_load: String,

    policy: PatternPolicy,
}

impl ResultModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty aggregate using the pattern policy of `config`.
    pub fn with_config(config: &FileInfoConfig) -> Self {
        Self::with_policy(config.patterns.clone())
    }

    pub fn with_policy(policy: PatternPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn pattern_policy(&self) -> &PatternPolicy {
        &self.policy
    }

    // ---- status ----------------------------------------------------------

    /// Record an analyzer outcome. Lower-severity writes never replace a
    /// recorded failure; returns whether `code` was stored.
    pub fn set_status(&mut self, code: ReturnCode) -> bool {
        self.status.record(code)
    }

    pub fn status(&self) -> ReturnCode {
        self.status.code()
    }

    pub fn status_severity(&self) -> Severity {
        self.status.severity()
    }

    pub fn add_message<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        debug!(message = %message, "analyzer message");
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn number_of_messages(&self) -> usize {
        self.messages.len()
    }

    pub fn set_deps_list_failed_to_load<S: Into<String>>(&mut self, name: S) {
        let name = name.into();
        warn!(list = %name, "dependency list failed to load");
        self.deps_list_failed_to_load = name;
    }

    /// Name of the dependency list that could not be loaded, empty if none.
    pub fn deps_list_failed_to_load(&self) -> &str {
        &self.deps_list_failed_to_load
    }

    // ---- signatures ------------------------------------------------------

    pub fn set_certificate_table(&mut self, table: Arc<CertificateTable>) {
        self.certificate_table = Some(table);
    }

    pub fn certificate_table(&self) -> Option<&CertificateTable> {
        self.certificate_table.as_deref()
    }

    pub fn has_certificate_table(&self) -> bool {
        self.certificate_table.is_some()
    }

    pub fn is_signature_present(&self) -> bool {
        self.certificate_table
            .as_ref()
            .is_some_and(|t| !t.is_empty())
    }

    pub fn set_signature_verified(&mut self, verified: bool) {
        self.signature_verified = Some(verified);
    }

    /// `None` when no verification was attempted.
    pub fn signature_verified(&self) -> Option<bool> {
        self.signature_verified
    }

    /// Verification state rendered with the caller's spellings, or
    /// [`UNSPECIFIED`] when no verification was attempted.
    pub fn is_signature_verified_str(&self, t: &str, f: &str) -> String {
        match self.signature_verified {
            Some(true) => t.to_string(),
            Some(false) => f.to_string(),
            None => UNSPECIFIED.to_string(),
        }
    }

    // ---- layout ----------------------------------------------------------

    pub fn add_data_directory(&mut self, directory: DataDirectory) {
        self.data_directories.push(directory);
    }

    pub fn number_of_data_directories(&self) -> usize {
        self.data_directories.len()
    }

    pub fn data_directories(&self) -> &[DataDirectory] {
        &self.data_directories
    }

    pub fn data_directory(&self, index: usize) -> &DataDirectory {
        at(&self.data_directories, index, "data directory")
    }

    pub fn add_segment(&mut self, segment: FileSegment) {
        self.segments.push(segment);
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[FileSegment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> &FileSegment {
        at(&self.segments, index, "segment")
    }

    pub fn add_section(&mut self, section: FileSection) {
        self.sections.push(section);
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[FileSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> &FileSection {
        at(&self.sections, index, "section")
    }

    // ---- symbol tables ---------------------------------------------------

    pub fn add_symbol_table(&mut self, table: SymbolTable) {
        trace!(
            name = %table.name,
            symbols = table.number_of_symbols(),
            "symbol table added"
        );
        self.symbol_tables.push(table);
    }

    /// Append a symbol to an already added table.
    pub fn add_symbol(&mut self, table: usize, symbol: Symbol) {
        at_mut(&mut self.symbol_tables, table, "symbol table").add_symbol(symbol);
    }

    pub fn add_special_information(&mut self, table: usize, info: SpecialInformation) {
        at_mut(&mut self.symbol_tables, table, "symbol table").add_special_information(info);
    }

    pub fn number_of_symbol_tables(&self) -> usize {
        self.symbol_tables.len()
    }

    pub fn symbol_tables(&self) -> &[SymbolTable] {
        &self.symbol_tables
    }

    pub fn symbol_table(&self, table: usize) -> &SymbolTable {
        at(&self.symbol_tables, table, "symbol table")
    }

    pub fn number_of_symbols_in_table(&self, table: usize) -> usize {
        self.symbol_table(table).number_of_symbols()
    }

    pub fn symbol(&self, table: usize, index: usize) -> &Symbol {
        at(self.symbol_table(table).symbols(), index, "symbol")
    }

    pub fn symbol_name(&self, table: usize, index: usize) -> &str {
        &self.symbol(table, index).name
    }

    pub fn symbol_type(&self, table: usize, index: usize) -> &str {
        &self.symbol(table, index).symbol_type
    }

    pub fn symbol_address_str(&self, table: usize, index: usize, radix: Radix) -> String {
        self.symbol(table, index).address_str(radix)
    }

    pub fn symbol_size_str(&self, table: usize, index: usize) -> String {
        self.symbol(table, index).size_str()
    }

    pub fn number_of_special_information(&self, table: usize) -> usize {
        self.symbol_table(table).number_of_special_information()
    }

    pub fn special_information(&self, table: usize, info: usize) -> &SpecialInformation {
        at(
            self.symbol_table(table).special_information(),
            info,
            "special information",
        )
    }

    pub fn special_information_description(&self, table: usize, info: usize) -> &str {
        &self.special_information(table, info).description
    }

    pub fn special_information_abbreviation(&self, table: usize, info: usize) -> &str {
        &self.special_information(table, info).abbreviation
    }

    pub fn number_of_special_information_values(&self, table: usize, info: usize) -> usize {
        self.special_information(table, info).number_of_values()
    }

    pub fn special_information_value(&self, table: usize, info: usize, record: usize) -> &str {
        at::<String>(
            self.special_information(table, info).values(),
            record,
            "special information value",
        )
    }

    // ---- relocation tables -----------------------------------------------

    pub fn add_relocation_table(&mut self, table: RelocationTable) {
        trace!(
            name = %table.name,
            relocations = table.number_of_relocations(),
            "relocation table added"
        );
        self.relocation_tables.push(table);
    }

    pub fn add_relocation(&mut self, table: usize, relocation: Relocation) {
        at_mut(&mut self.relocation_tables, table, "relocation table").add_relocation(relocation);
    }

    pub fn number_of_relocation_tables(&self) -> usize {
        self.relocation_tables.len()
    }

    pub fn relocation_tables(&self) -> &[RelocationTable] {
        &self.relocation_tables
    }

    pub fn relocation_table(&self, table: usize) -> &RelocationTable {
        at(&self.relocation_tables, table, "relocation table")
    }

    pub fn number_of_relocations_in_table(&self, table: usize) -> usize {
        self.relocation_table(table).number_of_relocations()
    }

    pub fn relocation(&self, table: usize, index: usize) -> &Relocation {
        at(self.relocation_table(table).relocations(), index, "relocation")
    }

    pub fn relocation_symbol_name(&self, table: usize, index: usize) -> &str {
        &self.relocation(table, index).symbol_name
    }

    pub fn relocation_offset_str(&self, table: usize, index: usize, radix: Radix) -> String {
        self.relocation(table, index).offset_str(radix)
    }

    pub fn relocation_addend_str(&self, table: usize, index: usize) -> String {
        self.relocation(table, index).addend_str()
    }

    // ---- dynamic sections ------------------------------------------------

    pub fn add_dynamic_section(&mut self, section: DynamicSection) {
        trace!(
            name = %section.name,
            entries = section.number_of_entries(),
            "dynamic section added"
        );
        self.dynamic_sections.push(section);
    }

    pub fn add_dynamic_entry(&mut self, section: usize, entry: DynamicEntry) {
        at_mut(&mut self.dynamic_sections, section, "dynamic section").add_entry(entry);
    }

    pub fn number_of_dynamic_sections(&self) -> usize {
        self.dynamic_sections.len()
    }

    pub fn dynamic_sections(&self) -> &[DynamicSection] {
        &self.dynamic_sections
    }

    pub fn dynamic_section(&self, section: usize) -> &DynamicSection {
        at(&self.dynamic_sections, section, "dynamic section")
    }

    pub fn number_of_dynamic_entries_in_section(&self, section: usize) -> usize {
        self.dynamic_section(section).number_of_entries()
    }

    pub fn dynamic_entry(&self, section: usize, index: usize) -> &DynamicEntry {
        at(self.dynamic_section(section).entries(), index, "dynamic entry")
    }

    pub fn dynamic_entry_type(&self, section: usize, index: usize) -> &str {
        &self.dynamic_entry(section, index).entry_type
    }

    pub fn dynamic_entry_value_str(&self, section: usize, index: usize, radix: Radix) -> String {
        self.dynamic_entry(section, index).value_str(radix)
    }

    pub fn dynamic_entry_flags_str(&self, section: usize, index: usize) -> String {
        self.dynamic_entry(section, index).flags.flags_str()
    }

    // ---- notes, core files, loader ---------------------------------------

    pub fn add_elf_notes(&mut self, notes: ElfNotes) {
        self.elf_notes.push(notes);
    }

    pub fn elf_notes(&self) -> &[ElfNotes] {
        &self.elf_notes
    }

    pub fn number_of_elf_notes(&self) -> usize {
        self.elf_notes.len()
    }

    pub fn add_aux_vector_entry<N: Into<String>>(&mut self, name: N, value: u64) {
        self.core.add_aux_vector_entry(name, value);
    }

    pub fn add_file_map_entry(&mut self, entry: FileMapEntry) {
        self.core.add_file_map_entry(entry);
    }

    pub fn add_loaded_segment(&mut self, segment: LoadedSegment) {
        self.loader.add_loaded_segment(segment);
    }

    pub fn number_of_loaded_segments(&self) -> usize {
        self.loader.number_of_loaded_segments()
    }

    pub fn loaded_segment(&self, index: usize) -> &LoadedSegment {
        at(self.loader.loaded_segments(), index, "loaded segment")
    }

    pub fn set_loader_status_message<S: Into<String>>(&mut self, message: S) {
        self.loader.status_message = message.into();
    }

    pub fn set_loader_error_info(&mut self, info: LoaderErrorInfo) {
        self.loader.error_info = info;
    }

    // ---- strings and anomalies -------------------------------------------

    pub fn add_string(&mut self, string: ExtractedString) {
        self.strings.add(string);
    }

    pub fn set_strings(&mut self, strings: Vec<ExtractedString>) {
        trace!(count = strings.len(), "detected strings stored");
        let mut set = StringSet::default();
        set.extend(strings);
        self.strings = set;
    }

    pub fn strings(&self) -> &StringSet {
        &self.strings
    }

    pub fn number_of_detected_strings(&self) -> usize {
        self.strings.len()
    }

    pub fn has_strings(&self) -> bool {
        !self.strings.is_empty()
    }

    /// Replace the anomaly list.
    pub fn set_anomalies(&mut self, anomalies: Vec<Anomaly>) {
        self.anomalies = anomalies;
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    pub fn number_of_anomalies(&self) -> usize {
        self.anomalies.len()
    }

    pub fn anomaly_identifier(&self, index: usize) -> &str {
        &at(&self.anomalies, index, "anomaly").identifier
    }

    pub fn anomaly_description(&self, index: usize) -> &str {
        &at(&self.anomalies, index, "anomaly").description
    }

    // ---- patterns --------------------------------------------------------

    pub fn add_pattern(&mut self, category: PatternCategory, pattern: Pattern) {
        trace!(
            %category,
            name = %pattern.name,
            matches = pattern.number_of_matches(),
            "pattern added"
        );
        self.pattern_set_mut(category).add(pattern);
    }

    pub fn add_crypto_pattern(&mut self, pattern: Pattern) {
        self.add_pattern(PatternCategory::Crypto, pattern);
    }

    pub fn add_malware_pattern(&mut self, pattern: Pattern) {
        self.add_pattern(PatternCategory::Malware, pattern);
    }

    pub fn add_other_pattern(&mut self, pattern: Pattern) {
        self.add_pattern(PatternCategory::Other, pattern);
    }

    pub fn patterns(&self, category: PatternCategory) -> &PatternSet {
        match category {
            PatternCategory::Crypto => &self.crypto_patterns,
            PatternCategory::Malware => &self.malware_patterns,
            PatternCategory::Other => &self.other_patterns,
        }
    }

    fn pattern_set_mut(&mut self, category: PatternCategory) -> &mut PatternSet {
        match category {
            PatternCategory::Crypto => &mut self.crypto_patterns,
            PatternCategory::Malware => &mut self.malware_patterns,
            PatternCategory::Other => &mut self.other_patterns,
        }
    }

    pub fn crypto_patterns(&self) -> &PatternSet {
        &self.crypto_patterns
    }

    pub fn malware_patterns(&self) -> &PatternSet {
        &self.malware_patterns
    }

    pub fn other_patterns(&self) -> &PatternSet {
        &self.other_patterns
    }

    pub fn number_of_crypto_patterns(&self) -> usize {
        self.crypto_patterns.len()
    }

    pub fn number_of_malware_patterns(&self) -> usize {
        self.malware_patterns.len()
    }

    pub fn number_of_other_patterns(&self) -> usize {
        self.other_patterns.len()
    }

    pub fn crypto_pattern(&self, index: usize) -> &Pattern {
        at(self.crypto_patterns.patterns(), index, "crypto pattern")
    }

    pub fn malware_pattern(&self, index: usize) -> &Pattern {
        at(self.malware_patterns.patterns(), index, "malware pattern")
    }

    pub fn other_pattern(&self, index: usize) -> &Pattern {
        at(self.other_patterns.patterns(), index, "other pattern")
    }

    pub fn sort_pattern_matches(&mut self, category: PatternCategory) {
        let policy = self.policy.clone();
        let set = self.pattern_set_mut(category);
        set.sort(&policy);
        debug!(%category, patterns = set.len(), order = ?policy.order, "patterns sorted");
    }

    pub fn sort_crypto_pattern_matches(&mut self) {
        self.sort_pattern_matches(PatternCategory::Crypto);
    }

    pub fn sort_malware_pattern_matches(&mut self) {
        self.sort_pattern_matches(PatternCategory::Malware);
    }

    pub fn sort_other_pattern_matches(&mut self) {
        self.sort_pattern_matches(PatternCategory::Other);
    }

    /// Drop crypto patterns subsumed by a pattern of the same family.
    /// Returns the number of patterns removed.
    pub fn remove_redundant_crypto_rules(&mut self) -> usize {
        let removed = self.crypto_patterns.remove_redundant(&self.policy);
        debug!(
            removed,
            remaining = self.crypto_patterns.len(),
            "redundant crypto rules removed"
        );
        removed
    }

    /// The full pattern post-processing pass run once at the end of
    /// population: crypto redundancy removal, then sorting of all three sets.
    pub fn finalize_patterns(&mut self) {
        let span = crate::span_trace!("finalize_patterns");
        let _guard = span.enter();
        self.remove_redundant_crypto_rules();
        for category in PatternCategory::ALL {
            self.sort_pattern_matches(category);
        }
    }

    // ---- structured handoff ----------------------------------------------

    /// Serialize to a JSON string (field order is fixed, output is stable).
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            log_error!(FileInfoError::Serialization(format!(
                "JSON serialization error: {}",
                e
            )))
        })
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            log_error!(FileInfoError::Serialization(format!(
                "JSON serialization error: {}",
                e
            )))
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            log_error!(FileInfoError::Serialization(format!(
                "JSON deserialization error: {}",
                e
            )))
        })
    }
}
