use fileinfo::ResultModel;

use crate::common::populated_model;

#[test]
fn json_output_is_stable_for_same_input() {
    let j1 = populated_model().to_json_string().expect("json1");
    let j2 = populated_model().to_json_string().expect("json2");
    assert_eq!(j1, j2, "JSON outputs differ across identical runs");
}

#[test]
fn json_roundtrip_preserves_model() {
    let mut model = populated_model();
    model.finalize_patterns();
    let json = model.to_json_string_pretty().expect("json");
    let back = ResultModel::from_json_str(&json).expect("from json");
    assert_eq!(back, model);
    assert_eq!(back.symbol_name(0, 3), "sym_00003");
    assert_eq!(back.number_of_crypto_patterns(), 1);
    assert!(back.is_signature_present());
}

#[test]
fn detection_order_does_not_change_finalized_output() {
    use fileinfo::core::pattern::{Pattern, PatternMatch};

    let hits = [
        ("RC4_sbox", 0x40, 256),
        ("AES_Te0", 0x800, 1024),
        ("AES_Te0_le", 0x800, 1024),
        ("MD5_T", 0x200, 256),
    ];
    let build = |reverse: bool| {
        let mut model = ResultModel::new();
        let mut order: Vec<_> = hits.iter().collect();
        if reverse {
            order.reverse();
        }
        for (name, offset, size) in order {
            model.add_crypto_pattern(
                Pattern::new(*name).with_match(PatternMatch::new(*offset, *size)),
            );
        }
        model.finalize_patterns();
        model.to_json_string().expect("json")
    };
    assert_eq!(build(false), build(true));
}

#[test]
fn sibling_rules_on_one_table_survive_in_any_detection_order() {
    use fileinfo::core::pattern::{Pattern, PatternMatch};

    let hits = [
        ("CRC32_le", 0x3000, 1024),
        ("CRC32_be", 0x3000, 1024),
        ("MD5_T", 0x200, 256),
    ];
    let build = |reverse: bool| {
        let mut model = ResultModel::new();
        let mut order: Vec<_> = hits.iter().collect();
        if reverse {
            order.reverse();
        }
        for (name, offset, size) in order {
            model.add_crypto_pattern(
                Pattern::new(*name).with_match(PatternMatch::new(*offset, *size)),
            );
        }
        model.finalize_patterns();
        model
    };

    let forward = build(false);
    let backward = build(true);
    assert_eq!(
        forward.to_json_string().expect("forward json"),
        backward.to_json_string().expect("backward json")
    );
    let names: Vec<&str> = forward
        .crypto_patterns()
        .patterns()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["CRC32_be", "CRC32_le", "MD5_T"]);
}

#[test]
fn empty_object_deserializes_to_default() {
    let model = ResultModel::from_json_str("{}").expect("defaults");
    assert_eq!(model, ResultModel::new());
}
