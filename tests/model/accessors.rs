use fileinfo::core::layout::FileSegment;
use fileinfo::core::loader::LoadedSegment;
use fileinfo::core::notes::{ElfNote, ElfNotes, FileMapEntry};
use fileinfo::core::symbols::{SpecialInformation, Symbol, SymbolTable};
use fileinfo::{Radix, ResultModel, UNSPECIFIED};

use crate::common::{digests_of, populated_model, SAMPLE_BYTES, SYMBOL_COUNT};

const ALL_RADIXES: [Radix; 4] = [Radix::Dec, Radix::Hex, Radix::HexWithPrefix, Radix::Oct];

#[test]
fn absent_numerics_render_placeholder_for_every_radix() {
    let model = populated_model();
    let rdata = model.section(1);
    let segment = FileSegment::default();
    for radix in ALL_RADIXES {
        assert_eq!(rdata.start_address_str(radix), UNSPECIFIED);
        assert_eq!(rdata.size_in_file_str(radix), UNSPECIFIED);
        assert_eq!(segment.offset_str(radix), UNSPECIFIED);
        assert_eq!(model.header.heap_commit_size_str(radix), UNSPECIFIED);
        assert_eq!(model.tls.index_address_str(radix), UNSPECIFIED);
        assert_eq!(model.loader.base_address_str(radix), UNSPECIFIED);
        assert_eq!(model.rich_header.offset_str(radix), UNSPECIFIED);
    }
    assert_eq!(rdata.entropy_str(4), UNSPECIFIED);
}

#[test]
fn maximal_values_are_not_treated_as_absent() {
    let mut model = ResultModel::new();
    model.header.overlay_size = Some(u64::MAX);
    assert_eq!(model.header.overlay_size_str(Radix::Hex), "ffffffffffffffff");
    assert_ne!(model.header.overlay_size_str(Radix::Dec), UNSPECIFIED);
}

#[test]
fn collection_counts_match_adds() {
    let model = populated_model();
    assert_eq!(model.number_of_data_directories(), 1);
    assert_eq!(model.number_of_sections(), 2);
    assert_eq!(model.number_of_segments(), 0);
    assert_eq!(model.number_of_symbol_tables(), 1);
    assert_eq!(model.number_of_symbols_in_table(0), SYMBOL_COUNT);
    assert_eq!(model.number_of_relocation_tables(), 1);
    assert_eq!(model.number_of_relocations_in_table(0), 1);
    assert_eq!(model.number_of_dynamic_sections(), 1);
    assert_eq!(model.number_of_dynamic_entries_in_section(0), 1);
    assert_eq!(model.number_of_crypto_patterns(), 2);
    assert_eq!(model.number_of_other_patterns(), 1);
    assert_eq!(model.number_of_malware_patterns(), 0);
    assert_eq!(model.number_of_detected_strings(), 1);
    assert_eq!(model.number_of_anomalies(), 1);
    assert_eq!(model.imports.number_of_imports(), 1);
}

#[test]
fn element_i_is_the_ith_add() {
    let model = populated_model();
    for i in [0, 1, 17, SYMBOL_COUNT - 1] {
        assert_eq!(model.symbol_name(0, i), format!("sym_{:05}", i));
        assert_eq!(model.symbol(0, i).index_str(), i.to_string());
    }
    assert_eq!(model.section(0).name, ".text");
    assert_eq!(model.section(1).name, ".rdata");
    assert_eq!(model.symbol_address_str(0, 1, Radix::HexWithPrefix), "0x401010");
    assert_eq!(model.relocation_symbol_name(0, 0), "ExitProcess");
    assert_eq!(model.relocation_offset_str(0, 0, Radix::Hex), "1002");
    assert_eq!(model.relocation_addend_str(0, 0), UNSPECIFIED);
    assert_eq!(model.dynamic_entry_type(0, 0), "DT_NEEDED");
    assert_eq!(model.dynamic_entry_value_str(0, 0, Radix::Dec), "1");
    assert_eq!(model.dynamic_entry_flags_str(0, 0), "");
    assert_eq!(model.anomaly_identifier(0), "ChecksumZero");
    assert_eq!(model.anomaly_description(0), "Optional header checksum is zero");
}

#[test]
fn five_symbols_scenario() {
    let mut model = ResultModel::new();
    model.add_symbol_table(SymbolTable::new(".symtab"));
    let names = ["a", "b", "c", "d", "e"];
    for name in names {
        model.add_symbol(0, Symbol::new(name));
    }
    assert_eq!(model.number_of_symbols_in_table(0), 5);
    assert_eq!(model.symbol_name(0, 4), "e");

    let index_past_end = std::panic::catch_unwind(|| model.symbol_name(0, 5).to_string());
    assert!(index_past_end.is_err());
}

#[test]
fn special_information_is_addressed_by_three_indices() {
    let mut model = ResultModel::new();
    model.add_symbol_table(SymbolTable::new("COFF"));
    model.add_symbol(0, Symbol::new("_main"));
    model.add_symbol(0, Symbol::new("_exit"));
    let mut class = SpecialInformation::new("storage class", "sc");
    class.add_value("EXTERNAL");
    class.add_value("STATIC");
    model.add_special_information(0, class);

    assert_eq!(model.number_of_special_information(0), 1);
    assert_eq!(model.special_information_description(0, 0), "storage class");
    assert_eq!(model.special_information_abbreviation(0, 0), "sc");
    assert_eq!(model.number_of_special_information_values(0, 0), 2);
    assert_eq!(model.special_information_value(0, 0, 1), "STATIC");
}

#[test]
fn delegated_collections_keep_order() {
    let mut model = ResultModel::new();
    model.add_loaded_segment(LoadedSegment::new(0, ".text", 0x1000, 0x200));
    model.add_loaded_segment(LoadedSegment::new(1, ".data", 0x2000, 0x80));
    model.add_aux_vector_entry("AT_PHDR", 0x40);
    model.add_file_map_entry(FileMapEntry {
        address: 0x40_0000,
        size: 0x1000,
        page: 0,
        path: "/bin/sh".into(),
    });
    let mut notes = ElfNotes::new(".note.ABI-tag", 0x254, 0x20);
    notes.add_note(ElfNote {
        note_type: Some(1),
        owner: "GNU".into(),
        description: "ABI tag".into(),
    });
    model.add_elf_notes(notes);
    model.set_loader_status_message("image loaded");

    assert_eq!(model.number_of_loaded_segments(), 2);
    assert_eq!(model.loaded_segment(1).name, ".data");
    assert_eq!(model.core.aux_vector()[0].name, "AT_PHDR");
    assert_eq!(model.core.file_map()[0].path, "/bin/sh");
    assert_eq!(model.number_of_elf_notes(), 1);
    assert_eq!(model.elf_notes()[0].notes()[0].owner, "GNU");
    assert_eq!(model.loader.status_message, "image loaded");
}

#[test]
fn signature_state_and_certificates() {
    let model = populated_model();
    assert!(model.is_signature_present());
    assert_eq!(model.signature_verified(), Some(true));
    assert_eq!(model.is_signature_verified_str("Yes", "No"), "Yes");
    let signer = model.certificate_table().and_then(|t| t.signer());
    assert_eq!(signer.map(|c| c.subject.as_str()), Some("CN=Acme Code Signing"));

    let empty = ResultModel::new();
    assert!(!empty.has_certificate_table());
    assert_eq!(empty.is_signature_verified_str("Yes", "No"), UNSPECIFIED);
}

#[test]
fn file_digests_are_stored_verbatim() {
    let model = populated_model();
    let expected = digests_of(SAMPLE_BYTES);
    assert_eq!(model.file_hashes, expected);
    assert_eq!(model.file_hashes.md5.len(), 32);
    assert_eq!(model.file_hashes.sha256.len(), 64);
    assert!(model.section_table_hashes.is_empty());
}
