// tests/integration/scenarios.rs
use length_rules::prelude::*;

use crate::common::{evaluate, failed, passed};

#[test]
fn length_two_to_five_accepts_four() {
    let rule = LengthRule::<()>::new(2, 5).expect("valid bounds");
    assert_eq!(evaluate(&rule, &(), Some("abcd")), passed());
}

#[test]
fn length_two_to_five_rejects_one() {
    let rule = LengthRule::<()>::new(2, 5).expect("valid bounds");
    assert_eq!(evaluate(&rule, &(), Some("a")), failed(2, 5, 1));
}

#[test]
fn exact_three() {
    let rule = LengthRule::<()>::exact(3);
    assert_eq!(evaluate(&rule, &(), Some("abc")), passed());
    assert_eq!(evaluate(&rule, &(), Some("ab")), failed(3, 3, 2));
}

#[test]
fn maximum_four_accepts_empty() {
    let rule = LengthRule::<()>::maximum(4).expect("valid max");
    assert_eq!(evaluate(&rule, &(), Some("")), passed());
    assert_eq!(evaluate(&rule, &(), Some("abcde")), failed(0, 4, 5));
}

#[test]
fn minimum_three_rejects_two() {
    let rule = LengthRule::<()>::minimum(3);
    assert_eq!(evaluate(&rule, &(), Some("ab")), failed(3, -1, 2));
}

#[test]
fn absent_value_passes_every_rule() {
    let rules = [
        LengthRule::<()>::new(2, 5).expect("valid bounds"),
        LengthRule::exact(3),
        LengthRule::maximum(0).expect("valid max"),
        LengthRule::minimum(100),
    ];
    for rule in &rules {
        assert_eq!(evaluate(rule, &(), None), passed(), "{}", rule.name());
    }
}

#[test]
fn construction_rejects_max_below_min() {
    let err = LengthRule::<()>::new(5, 4).expect_err("max < min");
    assert_eq!(err.argument(), Some("max"));
    assert!(err.to_string().contains("max should be larger than min."));
}

#[test]
fn rules_share_the_static_bounds_capability() {
    let rules: Vec<Box<dyn LengthBounds>> = vec![
        Box::new(LengthRule::<()>::new(1, 9).expect("valid bounds")),
        Box::new(LengthRule::<()>::exact(4)),
        Box::new(LengthRule::<()>::maximum(7).expect("valid max")),
        Box::new(LengthRule::<()>::minimum(2)),
    ];
    let bounds: Vec<_> = rules
        .iter()
        .map(|r| r.static_bounds().map(|(min, max)| (min.value(), max.value())))
        .collect();
    assert_eq!(bounds, vec![Some((1, 9)), Some((4, 4)), Some((0, 7)), Some((2, -1))]);
}

#[test]
fn rules_work_behind_the_framework_trait() {
    let rules: Vec<Box<dyn PropertyValidator<()>>> = vec![
        Box::new(LengthRule::<()>::exact(2)),
        Box::new(LengthRule::<()>::minimum(1)),
    ];
    let mut context = PropertyContext::new(&());
    let verdicts: Vec<_> = rules.iter().map(|r| r.is_valid(&mut context, Some("xyz"))).collect();
    assert_eq!(verdicts, vec![false, true]);
    assert_eq!(context.formatter().argument(MAX_LENGTH), Some(&ArgumentValue::Integer(2)));
}
