// crates/infra/src/localization.rs
use std::collections::HashMap;

use length_rules_ports::Localizer;
use length_rules_shared_kernel::{InfraResult, InfrastructureError};
use log::debug;
use serde::{Deserialize, Serialize};

const ENGLISH_TEMPLATES: [(&str, &str); 4] = [
    (
        "LengthValidator",
        "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. You entered {TotalLength} characters.",
    ),
    (
        "ExactLengthValidator",
        "'{PropertyName}' must be {MaxLength} characters in length. You entered {TotalLength} characters.",
    ),
    (
        "MaximumLengthValidator",
        "The length of '{PropertyName}' must be {MaxLength} characters or fewer. You entered {TotalLength} characters.",
    ),
    (
        "MinimumLengthValidator",
        "The length of '{PropertyName}' must be at least {MinLength} characters. You entered {TotalLength} characters.",
    ),
];

/// In-memory template table keyed by error code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticLocalizer {
    templates: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default English templates for the four length rules.
    pub fn english() -> Self {
        ENGLISH_TEMPLATES
            .iter()
            .fold(Self::new(), |localizer, (code, template)| localizer.with_template(*code, *template))
    }

    /// Loads a `{ "code": "template" }` JSON object.
    pub fn from_json_str(input: &str) -> InfraResult<Self> {
        serde_json::from_str(input).map_err(InfrastructureError::from)
    }

    #[must_use]
    pub fn with_template(mut self, error_code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(error_code, template);
        self
    }

    pub fn insert(&mut self, error_code: impl Into<String>, template: impl Into<String>) -> Option<String> {
        self.templates.insert(error_code.into(), template.into())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Localizer for StaticLocalizer {
    fn message_template(&self, error_code: &str, rule_name: &str) -> Option<String> {
        if let Some(template) = self.templates.get(error_code) {
            return Some(template.clone());
        }
        debug!("no template for '{error_code}', falling back to '{rule_name}'");
        self.templates.get(rule_name).cloned()
    }
}
