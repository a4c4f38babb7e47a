//! # Domain
//!
//! Length rules: how a string is measured, where its bounds come from and how the two are
//! judged together.
//!
//! One generic [`LengthRule`] does all the work. The exact, maximum-only and minimum-only
//! flavours are constructor presets that pin one or both bounds.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bounds;
pub mod config;
pub mod counting;
mod presets;
pub mod rule;

pub use bounds::{BoundFn, BoundSpec};
pub use config::{LengthRuleConfig, RuleBounds};
pub use counting::{CountingMode, LengthOptions};
pub use rule::{LengthMeasurement, LengthRule, LengthRuleKind};
