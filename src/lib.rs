//! # length_rules
//!
//! String length validation rules for object-validation frameworks.
//!
//! A rule checks that a property's string value has a length between a minimum and a
//! maximum. Bounds are either fixed at construction or computed from the object being
//! validated, and length is counted either as raw length or as user-perceived characters.
//!
//! ```
//! use length_rules::prelude::*;
//!
//! struct Profile {
//!     nickname: String,
//! }
//!
//! let rule = LengthRule::<Profile>::new(2, 5).expect("max is not below min");
//! let profile = Profile { nickname: "a".into() };
//! let mut context = PropertyContext::new(&profile);
//!
//! assert!(!rule.is_valid(&mut context, Some(profile.nickname.as_str())));
//! assert_eq!(context.formatter().argument(TOTAL_LENGTH), Some(&ArgumentValue::Integer(1)));
//! ```

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use length_rules_domain as domain;
pub use length_rules_infra as infra;
pub use length_rules_ports as ports;
pub use length_rules_shared_kernel as shared;

pub use length_rules_domain::{
    BoundFn, BoundSpec, CountingMode, LengthMeasurement, LengthOptions, LengthRule, LengthRuleConfig, LengthRuleKind,
    RuleBounds,
};
pub use length_rules_infra::{PropertyContext, StaticLocalizer};
pub use length_rules_ports::{
    ArgumentValue, LengthBounds, Localizer, MAX_LENGTH, MIN_LENGTH, MessageFormatter, PropertyValidator,
    TOTAL_LENGTH, ValidationContext,
};
pub use length_rules_shared_kernel::{
    DomainError, ErrorContext, InfrastructureError, LengthBound, LengthRulesError, Result, TextLength,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to build and evaluate rules.
pub mod prelude {
    pub use crate::{
        ArgumentValue, CountingMode, LengthBound, LengthBounds, LengthOptions, LengthRule, LengthRuleConfig,
        MAX_LENGTH, MIN_LENGTH, PropertyContext, PropertyValidator, RuleBounds, TOTAL_LENGTH, ValidationContext,
    };
}
