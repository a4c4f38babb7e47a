/// tests/common/mod.rs
// Shared fixtures for integration tests.
use length_rules::prelude::*;

/// Parent object with bounds stored as plain fields.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Limits {
    pub a: i64,
    pub b: i64,
}

/// Outcome of one evaluation: verdict plus the three measurement arguments, if any.
#[allow(dead_code)]
#[derive(Debug, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub total: Option<i64>,
    pub argument_count: usize,
}

#[allow(dead_code)]
pub fn evaluate<T>(rule: &LengthRule<T>, parent: &T, value: Option<&str>) -> Verdict {
    let mut context = PropertyContext::new(parent);
    let valid = rule.is_valid(&mut context, value);
    let formatter = context.into_formatter();
    let int = |name| formatter.argument(name).and_then(ArgumentValue::as_integer);
    Verdict {
        valid,
        min: int(MIN_LENGTH),
        max: int(MAX_LENGTH),
        total: int(TOTAL_LENGTH),
        argument_count: formatter.len(),
    }
}

#[allow(dead_code)]
pub fn passed() -> Verdict {
    Verdict { valid: true, min: None, max: None, total: None, argument_count: 0 }
}

#[allow(dead_code)]
pub fn failed(min: i64, max: i64, total: i64) -> Verdict {
    Verdict { valid: false, min: Some(min), max: Some(max), total: Some(total), argument_count: 3 }
}
