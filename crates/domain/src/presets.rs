// crates/domain/src/presets.rs
//! Exact, maximum-only and minimum-only rules. Each preset only pins bounds and picks a
//! name; evaluation is the generic [`LengthRule`] logic.

use length_rules_shared_kernel::{DomainResult, LengthBound};

use crate::{BoundSpec, LengthOptions, LengthRule, LengthRuleKind};

impl<T: ?Sized> LengthRule<T> {
    /// `min = max = length`.
    pub fn exact(length: i64) -> Self {
        Self::exact_with(length, |_| {})
    }

    pub fn exact_with(length: i64, configure: impl FnOnce(&mut LengthOptions)) -> Self {
        let bound = LengthBound::new(length);
        Self::from_parts(
            LengthRuleKind::Exact,
            BoundSpec::Fixed { min: bound, max: bound },
            LengthOptions::configured(configure),
        )
    }

    /// One function drives both bounds, so they always move together.
    pub fn exact_dynamic<F>(length: F) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::exact_dynamic_with(length, |_| {})
    }

    pub fn exact_dynamic_with<F>(length: F, configure: impl FnOnce(&mut LengthOptions)) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::from_parts(LengthRuleKind::Exact, BoundSpec::dynamic_length(length), LengthOptions::configured(configure))
    }

    /// `min = 0`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming `max` when `max` is negative but not `-1`.
    pub fn maximum(max: i64) -> DomainResult<Self> {
        Self::maximum_with(max, |_| {})
    }

    pub fn maximum_with(max: i64, configure: impl FnOnce(&mut LengthOptions)) -> DomainResult<Self> {
        let bounds = BoundSpec::fixed(LengthBound::ZERO.value(), max)?;
        Ok(Self::from_parts(LengthRuleKind::Maximum, bounds, LengthOptions::configured(configure)))
    }

    pub fn maximum_dynamic<F>(max: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::maximum_dynamic_with(max, |_| {})
    }

    /// The zero floor is a closure over `T`, hence `T: 'static`.
    pub fn maximum_dynamic_with<F>(max: F, configure: impl FnOnce(&mut LengthOptions)) -> Self
    where
        T: 'static,
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::from_parts(
            LengthRuleKind::Maximum,
            BoundSpec::dynamic(|_: &T| LengthBound::ZERO.value(), max),
            LengthOptions::configured(configure),
        )
    }

    /// `max = -1`.
    pub fn minimum(min: i64) -> Self {
        Self::minimum_with(min, |_| {})
    }

    pub fn minimum_with(min: i64, configure: impl FnOnce(&mut LengthOptions)) -> Self {
        Self::from_parts(
            LengthRuleKind::Minimum,
            BoundSpec::Fixed { min: LengthBound::new(min), max: LengthBound::UNBOUNDED },
            LengthOptions::configured(configure),
        )
    }

    pub fn minimum_dynamic<F>(min: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::minimum_dynamic_with(min, |_| {})
    }

    pub fn minimum_dynamic_with<F>(min: F, configure: impl FnOnce(&mut LengthOptions)) -> Self
    where
        T: 'static,
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::from_parts(
            LengthRuleKind::Minimum,
            BoundSpec::dynamic(min, |_: &T| LengthBound::UNBOUNDED.value()),
            LengthOptions::configured(configure),
        )
    }
}
