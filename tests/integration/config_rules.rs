// tests/integration/config_rules.rs
use length_rules::{DomainError, LengthRulesError, prelude::*};

use crate::common::{evaluate, failed, passed};

#[test]
fn configured_rules_behave_like_constructed_ones() {
    let configs = LengthRuleConfig::list_from_json_str(
        r#"[
            {"rule": "length", "min": 2, "max": 5},
            {"rule": "exact", "length": 3},
            {"rule": "maximum", "max": 4},
            {"rule": "minimum", "min": 3}
        ]"#,
    )
    .expect("parses");
    let rules: Vec<LengthRule<()>> = configs.iter().map(LengthRuleConfig::build).collect::<Result<_, _>>().expect("builds");

    assert_eq!(evaluate(&rules[0], &(), Some("a")), failed(2, 5, 1));
    assert_eq!(evaluate(&rules[1], &(), Some("abc")), passed());
    assert_eq!(evaluate(&rules[2], &(), Some("")), passed());
    assert_eq!(evaluate(&rules[3], &(), Some("ab")), failed(3, -1, 2));
}

#[test]
fn configured_grapheme_counting() {
    let rule: LengthRule<()> = LengthRuleConfig::new(RuleBounds::Exact { length: 1 })
        .with_counting(CountingMode::Graphemes)
        .build()
        .expect("builds");
    assert_eq!(evaluate(&rule, &(), Some("e\u{0301}")), passed());
}

#[test]
fn invalid_config_surfaces_domain_error() {
    let err = LengthRuleConfig::from_json_str(r#"{"rule": "maximum", "max": -4}"#)
        .and_then(|c| c.build::<()>())
        .expect_err("negative max");
    assert!(err.to_string().contains("max should be larger than min."));
    let LengthRulesError::Context { source, .. } = err else {
        panic!("expected context wrapper");
    };
    assert!(matches!(*source, LengthRulesError::Domain(DomainError::InvalidConfiguration { .. })));
}

#[test]
fn config_serializes_back_to_the_same_shape() {
    let config = LengthRuleConfig::new(RuleBounds::Minimum { min: 3 });
    let json = serde_json::to_value(config).expect("serializes");
    assert_eq!(json, serde_json::json!({"rule": "minimum", "min": 3, "counting": "chars"}));
}
