use rayon::prelude::*;
use std::sync::Arc;

use fileinfo::Radix;

use crate::common::{populated_model, SYMBOL_COUNT};

fn render_symbols(model: &fileinfo::ResultModel, table: usize) -> Vec<String> {
    (0..model.number_of_symbols_in_table(table))
        .map(|i| {
            format!(
                "{} {}",
                model.symbol_name(table, i),
                model.symbol_address_str(table, i, Radix::HexWithPrefix)
            )
        })
        .collect()
}

#[test]
fn frozen_model_renders_identically_from_many_threads() {
    let mut model = populated_model();
    model.finalize_patterns();
    let model = Arc::new(model);
    let reference = render_symbols(&model, 0);
    assert_eq!(reference.len(), SYMBOL_COUNT);

    let outputs: Vec<Vec<String>> = (0..16)
        .into_par_iter()
        .map(|_| render_symbols(&model, 0))
        .collect();
    assert!(outputs.iter().all(|o| *o == reference));
}

#[test]
fn json_is_identical_across_threads() {
    let model = Arc::new(populated_model());
    let reference = model.to_json_string().unwrap();
    let all_equal = (0..8)
        .into_par_iter()
        .map(|_| model.to_json_string().unwrap())
        .all(|json| json == reference);
    assert!(all_equal);
}
