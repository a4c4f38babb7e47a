// tests/integration/grapheme_policy.rs
use length_rules::prelude::*;

use crate::common::{evaluate, failed, passed};

const COMBINED: &str = "e\u{0301}";

fn text_elements(options: &mut LengthOptions) {
    options.use_text_elements();
}

#[test]
fn combined_character_measures_one_or_two() {
    assert_eq!(CountingMode::Graphemes.measure(COMBINED), 1usize);
    assert_eq!(CountingMode::default().measure(COMBINED), 2usize);
}

#[test]
fn minimum_one_accepts_under_both_policies() {
    let raw = LengthRule::<()>::minimum(1);
    let graphemes = LengthRule::<()>::minimum_with(1, text_elements);
    assert_eq!(evaluate(&raw, &(), Some(COMBINED)), passed());
    assert_eq!(evaluate(&graphemes, &(), Some(COMBINED)), passed());
}

#[test]
fn exact_one_accepts_only_under_text_elements() {
    let raw = LengthRule::<()>::exact(1);
    let graphemes = LengthRule::<()>::exact_with(1, text_elements);
    assert_eq!(evaluate(&raw, &(), Some(COMBINED)), failed(1, 1, 2));
    assert_eq!(evaluate(&graphemes, &(), Some(COMBINED)), passed());
}

#[test]
fn family_emoji_is_one_grapheme() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let rule = LengthRule::<()>::maximum_with(1, text_elements).expect("valid max");
    assert_eq!(evaluate(&rule, &(), Some(family)), passed());

    let utf16 = LengthRule::<()>::maximum_with(1, |o| {
        o.counting(CountingMode::Utf16CodeUnits);
    })
    .expect("valid max");
    assert_eq!(evaluate(&utf16, &(), Some(family)), failed(0, 1, 8));
}

#[test]
fn options_can_switch_back_to_raw() {
    let rule = LengthRule::<()>::exact_with(1, |o| {
        o.use_text_elements().use_raw_length();
    });
    assert_eq!(rule.options().counting, CountingMode::Chars);
}
