// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};

use length_rules_shared_kernel::{DomainError, ErrorContext, LengthBound, Result};

use crate::{CountingMode, LengthOptions, LengthRule};

/// Bounds of a declaratively configured rule, tagged by `rule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleBounds {
    Length { min: i64, max: i64 },
    Exact { length: i64 },
    Maximum { max: i64 },
    Minimum { min: i64 },
}

/// A fixed-bound length rule described as data.
///
/// ```yaml
/// rule: length
/// min: 2
/// max: 5
/// counting: graphemes
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRuleConfig {
    #[serde(flatten)]
    pub bounds: RuleBounds,
    #[serde(default)]
    pub counting: CountingMode,
}

impl LengthRuleConfig {
    pub fn new(bounds: RuleBounds) -> Self {
        Self { bounds, counting: CountingMode::default() }
    }

    #[must_use]
    pub fn with_counting(mut self, counting: CountingMode) -> Self {
        self.counting = counting;
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("parsing length rule config")
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).context("parsing length rule config")
    }

    /// Parses a list of rule definitions, e.g. one per form field.
    pub fn list_from_json_str(input: &str) -> Result<Vec<Self>> {
        serde_json::from_str(input).context("parsing length rule config list")
    }

    /// Builds the rule this config describes.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for bounds no rule can be built from: an inconsistent `length` or
    /// `maximum` pair (the constructor's reason is kept), or an `exact` length or `minimum` below
    /// the `-1` sentinel.
    pub fn build<T: ?Sized>(&self) -> Result<LengthRule<T>> {
        let options = LengthOptions { counting: self.counting };
        let rule = match self.bounds {
            RuleBounds::Length { min, max } => LengthRule::new(min, max).map_err(rejected),
            RuleBounds::Exact { length } if below_sentinel(length) => Err(negative("length", length)),
            RuleBounds::Exact { length } => Ok(LengthRule::exact(length)),
            RuleBounds::Maximum { max } => LengthRule::maximum(max).map_err(rejected),
            RuleBounds::Minimum { min } if below_sentinel(min) => Err(negative("min", min)),
            RuleBounds::Minimum { min } => Ok(LengthRule::minimum(min)),
        };
        rule.map(|rule| rule.with_options(options))
            .with_context(|| format!("building {:?} rule", self.bounds))
    }
}

fn below_sentinel(value: i64) -> bool {
    value < LengthBound::UNBOUNDED.value()
}

fn negative(field: &str, value: i64) -> DomainError {
    DomainError::InvalidConfiguration { reason: format!("{field} must be -1 or non-negative, got {value}") }
}

fn rejected(err: DomainError) -> DomainError {
    DomainError::InvalidConfiguration { reason: err.to_string() }
}

impl From<RuleBounds> for LengthRuleConfig {
    fn from(bounds: RuleBounds) -> Self {
        Self::new(bounds)
    }
}
