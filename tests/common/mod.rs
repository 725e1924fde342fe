//! Shared fixtures: a populated PE-like result model.

use std::sync::Arc;

use fileinfo::core::certificate::{Certificate, CertificateTable};
use fileinfo::core::digests::Digests;
use fileinfo::core::dynamic::{DynamicEntry, DynamicSection};
use fileinfo::core::identity::{Endianness, Format};
use fileinfo::core::imports::{Import, ImportUsage};
use fileinfo::core::layout::{DataDirectory, FileSection};
use fileinfo::core::pattern::{Pattern, PatternMatch};
use fileinfo::core::relocations::{Relocation, RelocationTable};
use fileinfo::core::strings::{ExtractedString, StringFormat};
use fileinfo::core::symbols::{Symbol, SymbolTable};
use fileinfo::{Anomaly, ResultModel};
use sha2::{Digest, Sha256};

/// Bytes standing in for the analyzed file.
pub const SAMPLE_BYTES: &[u8] =
    b"MZ\x90\x00\x03\x00\x00\x00\x04\x00\x00\x00\xff\xff\x00\x00fileinfo-fixture";

/// Digests the hashing collaborator would report for `data`.
pub fn digests_of(data: &[u8]) -> Digests {
    Digests::new(
        "",
        format!("{:x}", md5::compute(data)),
        hex::encode(Sha256::digest(data)),
    )
}

/// Number of symbols added to table 0 by [`populated_model`].
pub const SYMBOL_COUNT: usize = 2_000;

/// A model filled the way a PE run would fill it.
pub fn populated_model() -> ResultModel {
    let mut model = ResultModel::new();
    model.file_path = "/samples/hello.exe".into();
    model.format = Format::PE;
    model.file_format = "PE32".into();
    model.file_class = "32-bit".into();
    model.file_type = "Executable file".into();
    model.architecture = "x86".into();
    model.endianness = Some(Endianness::Little);
    model.file_hashes = digests_of(SAMPLE_BYTES);

    model.header.time_stamp = "2020-09-13 12:26:40".into();
    model.header.declared_sections = Some(2);
    model.header.checksum = Some(0);
    model.pe_timestamps.coff_time = Some(1_600_000_000);

    model.add_data_directory(DataDirectory::new("Import table", 0x2000, 0x28));
    let mut text = FileSection::new(0, ".text");
    text.start_address = Some(0x1000);
    text.entropy = Some(6.02);
    model.add_section(text);
    model.add_section(FileSection::new(1, ".rdata"));

    model.imports.add_library("KERNEL32.dll");
    model.imports.add_import(
        Import::new("ExitProcess", "KERNEL32.dll")
            .with_address(0x40_2000)
            .with_usage(ImportUsage::Function),
    );

    model.add_symbol_table(SymbolTable::new("COFF"));
    for i in 0..SYMBOL_COUNT {
        let mut symbol = Symbol::new(format!("sym_{:05}", i));
        symbol.index = Some(i as u64);
        symbol.address = Some(0x40_1000 + i as u64 * 0x10);
        model.add_symbol(0, symbol);
    }

    let mut relocs = RelocationTable::new(".reloc");
    relocs.add_relocation(Relocation {
        symbol_name: "ExitProcess".into(),
        offset: Some(0x1002),
        relocation_type: Some(3),
        ..Default::default()
    });
    model.add_relocation_table(relocs);

    let mut dynamic = DynamicSection::new(".dynamic");
    dynamic.add_entry(DynamicEntry::new("DT_NEEDED", 1));
    model.add_dynamic_section(dynamic);

    model.add_crypto_pattern(
        Pattern::new("CRC32_table").with_match(PatternMatch::new(0x3000, 1024)),
    );
    model.add_crypto_pattern(
        Pattern::new("CRC32_table_le").with_match(PatternMatch::new(0x3000, 1024)),
    );
    model.add_other_pattern(Pattern::new("UPX_stub").with_match(PatternMatch::new(0x400, 32)));

    model.add_string(ExtractedString::new(StringFormat::Ascii, 0x2100, "KERNEL32.dll"));
    model.set_anomalies(vec![Anomaly::new(
        "ChecksumZero",
        "Optional header checksum is zero",
    )]);

    let mut certs = CertificateTable::new(vec![Certificate {
        subject: "CN=Acme Code Signing".into(),
        ..Default::default()
    }]);
    certs.signer_index = Some(0);
    model.set_certificate_table(Arc::new(certs));
    model.set_signature_verified(true);

    model
}
