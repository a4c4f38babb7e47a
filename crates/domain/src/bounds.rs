// crates/domain/src/bounds.rs
use std::{fmt, sync::Arc};

use length_rules_shared_kernel::{DomainError, DomainResult, LengthBound};

/// Bound computed from the parent object on every validation call.
pub type BoundFn<T> = Arc<dyn Fn(&T) -> i64 + Send + Sync>;

/// Where a rule's bounds come from.
///
/// The dynamic pair is stored together so a rule can never end up with one computed and one
/// fixed bound.
pub enum BoundSpec<T: ?Sized> {
    Fixed { min: LengthBound, max: LengthBound },
    Dynamic { min: BoundFn<T>, max: BoundFn<T> },
}

impl<T: ?Sized> BoundSpec<T> {
    /// Fixed bounds; `max` must be `-1` or at least `min`.
    pub fn fixed(min: i64, max: i64) -> DomainResult<Self> {
        let (min, max) = (LengthBound::new(min), LengthBound::new(max));
        if !max.is_unbounded() && max < min {
            return Err(DomainError::invalid_argument("max", "max should be larger than min."));
        }
        Ok(Self::Fixed { min, max })
    }

    /// Computed bounds. No consistency check is possible here: a pair that yields
    /// `max < min` makes every value fail.
    pub fn dynamic<Min, Max>(min: Min, max: Max) -> Self
    where
        Min: Fn(&T) -> i64 + Send + Sync + 'static,
        Max: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::Dynamic { min: Arc::new(min), max: Arc::new(max) }
    }

    /// One computed length used as both bounds.
    pub fn dynamic_length<F>(length: F) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        let shared: BoundFn<T> = Arc::new(length);
        Self::Dynamic { min: Arc::clone(&shared), max: shared }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }

    /// Literal stored bounds, only available for the fixed form.
    pub fn static_bounds(&self) -> Option<(LengthBound, LengthBound)> {
        match self {
            Self::Fixed { min, max } => Some((*min, *max)),
            Self::Dynamic { .. } => None,
        }
    }

    /// Effective bounds for one validation call.
    pub fn resolve(&self, parent: &T) -> (LengthBound, LengthBound) {
        match self {
            Self::Fixed { min, max } => (*min, *max),
            Self::Dynamic { min, max } => (LengthBound::new(min(parent)), LengthBound::new(max(parent))),
        }
    }
}

impl<T: ?Sized> Clone for BoundSpec<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed { min, max } => Self::Fixed { min: *min, max: *max },
            Self::Dynamic { min, max } => Self::Dynamic { min: Arc::clone(min), max: Arc::clone(max) },
        }
    }
}

impl<T: ?Sized> fmt::Debug for BoundSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { min, max } => f.debug_struct("Fixed").field("min", min).field("max", max).finish(),
            Self::Dynamic { .. } => f.write_str("Dynamic { .. }"),
        }
    }
}
