// crates/ports/src/localization.rs

/// Source of default message templates.
///
/// Rendering the template is the caller's concern; rules only pick which template to ask for.
pub trait Localizer: Send + Sync {
    /// Looks up the template registered under `error_code`. `rule_name` is passed along so
    /// implementations can fall back to a per-rule default.
    fn message_template(&self, error_code: &str, rule_name: &str) -> Option<String>;
}
