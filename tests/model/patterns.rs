use fileinfo::core::pattern::{Pattern, PatternMatch};
use fileinfo::{PatternCategory, PatternOrder, PatternPolicy, ResultModel};

fn hit(name: &str, offset: u64, size: u64) -> Pattern {
    Pattern::new(name).with_match(PatternMatch::new(offset, size))
}

fn crypto_names(model: &ResultModel) -> Vec<String> {
    model
        .crypto_patterns()
        .patterns()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn variant_rule_replaces_base_rule() {
    let mut model = ResultModel::new();
    model.add_crypto_pattern(hit("X", 0, 16));
    model.add_crypto_pattern(hit("X-variant", 0, 32));

    assert_eq!(model.remove_redundant_crypto_rules(), 1);
    assert_eq!(model.number_of_crypto_patterns(), 1);
    assert_eq!(model.crypto_pattern(0).name, "X-variant");
}

#[test]
fn redundancy_removal_is_idempotent_and_never_grows() {
    let mut model = ResultModel::new();
    let detections = [
        ("SHA256_K", 0x100, 256),
        ("SHA256_K_be", 0x100, 256),
        ("SHA256", 0x100, 64),
        ("MD5_T", 0x400, 256),
        ("AES_Te0", 0x800, 1024),
        ("AES_Te0", 0x800, 1024),
        ("AES_Td0", 0xc00, 1024),
    ];
    for (name, offset, size) in detections {
        model.add_crypto_pattern(hit(name, offset, size));
    }
    let before = model.number_of_crypto_patterns();

    model.remove_redundant_crypto_rules();
    let once = crypto_names(&model);
    assert!(once.len() <= before);
    assert_eq!(once, vec!["SHA256_K_be", "MD5_T", "AES_Te0", "AES_Td0"]);

    assert_eq!(model.remove_redundant_crypto_rules(), 0);
    assert_eq!(crypto_names(&model), once);
}

#[test]
fn only_crypto_set_is_deduplicated() {
    let mut model = ResultModel::new();
    model.add_malware_pattern(hit("Trojan", 0, 8));
    model.add_malware_pattern(hit("Trojan-Dropper", 0, 64));
    model.remove_redundant_crypto_rules();
    assert_eq!(model.number_of_malware_patterns(), 2);
}

#[test]
fn sorting_is_idempotent_and_preserves_multiset() {
    let mut model = ResultModel::new();
    let detections = [
        ("ZLIB_lengths", 0x900, 29),
        ("CRC32", 0x100, 1024),
        ("BASE64_table", 0x50, 64),
        ("CRC32", 0x20, 1024),
    ];
    for (name, offset, size) in detections {
        model.add_crypto_pattern(hit(name, offset, size));
    }
    let mut before: Vec<Pattern> = model.crypto_patterns().patterns().to_vec();

    model.sort_crypto_pattern_matches();
    let once = model.crypto_patterns().clone();
    model.sort_crypto_pattern_matches();
    assert_eq!(model.crypto_patterns(), &once);

    let mut after: Vec<Pattern> = once.patterns().to_vec();
    let by_name_then_offset = |a: &Pattern, b: &Pattern| {
        a.name
            .cmp(&b.name)
            .then(a.matches()[0].offset.cmp(&b.matches()[0].offset))
    };
    before.sort_by(by_name_then_offset);
    after.sort_by(by_name_then_offset);
    assert_eq!(before, after);

    let order: Vec<(String, Option<u64>)> = once
        .patterns()
        .iter()
        .map(|p| (p.name.clone(), p.matches()[0].offset))
        .collect();
    assert_eq!(
        order,
        vec![
            ("BASE64_table".to_string(), Some(0x50)),
            ("CRC32".to_string(), Some(0x20)),
            ("CRC32".to_string(), Some(0x100)),
            ("ZLIB_lengths".to_string(), Some(0x900)),
        ]
    );
}

#[test]
fn sort_order_comes_from_policy() {
    let policy = PatternPolicy {
        order: PatternOrder::OffsetThenName,
        ..Default::default()
    };
    let mut model = ResultModel::with_policy(policy);
    model.add_other_pattern(hit("A", 0x300, 4));
    model.add_other_pattern(hit("B", 0x100, 4));
    model.sort_other_pattern_matches();

    assert_eq!(model.other_pattern(0).name, "B");
    assert_eq!(model.other_pattern(1).name, "A");
}

#[test]
fn sets_are_sorted_independently() {
    let mut model = ResultModel::new();
    model.add_malware_pattern(hit("b", 0, 1));
    model.add_malware_pattern(hit("a", 0, 1));
    model.add_other_pattern(hit("b", 0, 1));
    model.add_other_pattern(hit("a", 0, 1));

    model.sort_pattern_matches(PatternCategory::Malware);
    assert_eq!(model.malware_pattern(0).name, "a");
    assert_eq!(model.other_pattern(0).name, "b");
}

#[test]
fn custom_family_separators() {
    let policy = PatternPolicy {
        family_separators: vec![':'],
        ..Default::default()
    };
    let mut model = ResultModel::with_policy(policy);
    // with ':' as the only separator these are different families
    model.add_crypto_pattern(hit("X", 0, 16));
    model.add_crypto_pattern(hit("X-variant", 0, 32));
    model.add_crypto_pattern(hit("Y", 100, 4));
    model.add_crypto_pattern(hit("Y:ext", 100, 4));

    assert_eq!(model.remove_redundant_crypto_rules(), 1);
    assert_eq!(crypto_names(&model), vec!["X", "X-variant", "Y:ext"]);
}
