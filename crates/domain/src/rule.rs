// crates/domain/src/rule.rs
use std::fmt;

use length_rules_ports::{
    LengthBounds, MAX_LENGTH, MIN_LENGTH, PropertyValidator, TOTAL_LENGTH, ValidationContext,
};
use length_rules_shared_kernel::{DomainResult, LengthBound, TextLength};
use log::{debug, trace};

use crate::{BoundSpec, LengthOptions};

/// Which preset a rule was built from. Only affects the reported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRuleKind {
    Length,
    Exact,
    Maximum,
    Minimum,
}

impl LengthRuleKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "LengthValidator",
            Self::Exact => "ExactLengthValidator",
            Self::Maximum => "MaximumLengthValidator",
            Self::Minimum => "MinimumLengthValidator",
        }
    }
}

impl fmt::Display for LengthRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounds used for one decision together with the measured length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMeasurement {
    pub min: LengthBound,
    pub max: LengthBound,
    pub total: TextLength,
}

impl LengthMeasurement {
    pub fn is_within_bounds(&self) -> bool {
        self.min.admits_as_min(self.total) && self.max.admits_as_max(self.total)
    }
}

/// Checks that a string's length lies between a minimum and a maximum.
///
/// Built once, then evaluated any number of times. Evaluation never mutates the rule; all
/// failure reporting lands on the caller's context.
pub struct LengthRule<T: ?Sized> {
    kind: LengthRuleKind,
    bounds: BoundSpec<T>,
    options: LengthOptions,
}

impl<T: ?Sized> LengthRule<T> {
    pub(crate) fn from_parts(kind: LengthRuleKind, bounds: BoundSpec<T>, options: LengthOptions) -> Self {
        Self { kind, bounds, options }
    }

    /// Fixed bounds; `max == -1` leaves the length unbounded above.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming `max` when `max != -1` and `max < min`.
    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        Self::new_with(min, max, |_| {})
    }

    pub fn new_with(min: i64, max: i64, configure: impl FnOnce(&mut LengthOptions)) -> DomainResult<Self> {
        let bounds = BoundSpec::fixed(min, max)?;
        Ok(Self::from_parts(LengthRuleKind::Length, bounds, LengthOptions::configured(configure)))
    }

    /// Bounds computed from the parent object on each call.
    pub fn dynamic<Min, Max>(min: Min, max: Max) -> Self
    where
        Min: Fn(&T) -> i64 + Send + Sync + 'static,
        Max: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::dynamic_with(min, max, |_| {})
    }

    pub fn dynamic_with<Min, Max>(min: Min, max: Max, configure: impl FnOnce(&mut LengthOptions)) -> Self
    where
        Min: Fn(&T) -> i64 + Send + Sync + 'static,
        Max: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::from_parts(LengthRuleKind::Length, BoundSpec::dynamic(min, max), LengthOptions::configured(configure))
    }

    /// Replaces the counting options wholesale.
    #[must_use]
    pub fn with_options(mut self, options: LengthOptions) -> Self {
        self.options = options;
        self
    }

    /// Swaps in a computed bound pair after construction. Static bounds are no longer
    /// reported afterwards.
    ///
    /// The kind is left alone, so an exact rule given two independent functions keeps its
    /// exact name while accepting a range. Use [`LengthRule::set_dynamic_length`] to keep
    /// both bounds equal.
    pub fn set_dynamic_bounds<Min, Max>(&mut self, min: Min, max: Max)
    where
        Min: Fn(&T) -> i64 + Send + Sync + 'static,
        Max: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        debug!("{}: switching to computed bounds", self.kind);
        self.bounds = BoundSpec::dynamic(min, max);
    }

    /// Swaps in one computed length used as both bounds.
    pub fn set_dynamic_length<F>(&mut self, length: F)
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        debug!("{}: switching to a computed length", self.kind);
        self.bounds = BoundSpec::dynamic_length(length);
    }

    pub fn kind(&self) -> LengthRuleKind {
        self.kind
    }

    pub fn options(&self) -> &LengthOptions {
        &self.options
    }

    pub fn bounds(&self) -> &BoundSpec<T> {
        &self.bounds
    }

    pub fn resolve_bounds(&self, parent: &T) -> (LengthBound, LengthBound) {
        self.bounds.resolve(parent)
    }

    pub fn measure(&self, parent: &T, value: &str) -> LengthMeasurement {
        let (min, max) = self.resolve_bounds(parent);
        let total = self.options.measure(value);
        trace!("{}: length {total} against [{min}, {max}] ({:?})", self.kind, self.options.counting);
        LengthMeasurement { min, max, total }
    }
}

impl<T: ?Sized> PropertyValidator<T> for LengthRule<T> {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn is_valid(&self, context: &mut dyn ValidationContext<T>, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return true;
        };

        let measurement = self.measure(context.instance_to_validate(), value);
        if measurement.is_within_bounds() {
            return true;
        }

        debug!(
            "{}: length {} outside [{}, {}]",
            self.kind, measurement.total, measurement.min, measurement.max
        );
        context
            .message_formatter()
            .append_argument(MIN_LENGTH, measurement.min)
            .append_argument(MAX_LENGTH, measurement.max)
            .append_argument(TOTAL_LENGTH, measurement.total);
        false
    }
}

impl<T: ?Sized> LengthBounds for LengthRule<T> {
    fn static_bounds(&self) -> Option<(LengthBound, LengthBound)> {
        self.bounds.static_bounds()
    }
}

impl<T: ?Sized> Clone for LengthRule<T> {
    fn clone(&self) -> Self {
        Self { kind: self.kind, bounds: self.bounds.clone(), options: self.options }
    }
}

impl<T: ?Sized> fmt::Debug for LengthRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthRule")
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("options", &self.options)
            .finish()
    }
}
