// crates/ports/src/validator.rs
use length_rules_shared_kernel::LengthBound;

use crate::{Localizer, ValidationContext};

/// Surface a property rule offers to the validation framework.
pub trait PropertyValidator<T: ?Sized>: Send + Sync {
    /// Stable identifier used for error-code lookup and diagnostics.
    fn name(&self) -> &'static str;

    /// Judges `value`. Failures are reported through the context, never as errors.
    fn is_valid(&self, context: &mut dyn ValidationContext<T>, value: Option<&str>) -> bool;

    fn default_message_template(&self, localizer: &dyn Localizer, error_code: Option<&str>) -> String {
        let code = error_code.unwrap_or_else(|| self.name());
        localizer
            .message_template(code, self.name())
            .unwrap_or_else(|| self.name().to_string())
    }
}

/// Static bounds shared by every length rule flavour.
///
/// Rules whose bounds are computed from the parent object report `None`.
pub trait LengthBounds {
    fn static_bounds(&self) -> Option<(LengthBound, LengthBound)>;

    fn min(&self) -> Option<LengthBound> {
        self.static_bounds().map(|(min, _)| min)
    }

    fn max(&self) -> Option<LengthBound> {
        self.static_bounds().map(|(_, max)| max)
    }
}
