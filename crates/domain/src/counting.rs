// crates/domain/src/counting.rs
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use length_rules_shared_kernel::TextLength;

/// How the length of a candidate string is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingMode {
    /// Unicode scalar values. An astral character such as an emoji counts 1 here; pick
    /// [`CountingMode::Utf16CodeUnits`] to match hosts that count it as a surrogate pair of 2.
    #[default]
    Chars,
    /// UTF-16 code units, as counted by clients that store strings in UTF-16.
    Utf16CodeUnits,
    /// UTF-8 bytes.
    Bytes,
    /// Extended grapheme clusters (user-perceived characters).
    Graphemes,
}

impl CountingMode {
    #[inline]
    pub fn measure(self, value: &str) -> TextLength {
        let length = match self {
            Self::Chars => value.chars().count(),
            Self::Utf16CodeUnits => value.encode_utf16().count(),
            Self::Bytes => value.len(),
            Self::Graphemes => value.graphemes(true).count(),
        };
        TextLength::new(length)
    }

    pub const fn is_text_element(self) -> bool {
        matches!(self, Self::Graphemes)
    }
}

/// Counting configuration handed to a rule's configuration callback at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthOptions {
    pub counting: CountingMode,
}

impl LengthOptions {
    /// Count user-perceived characters instead of raw length.
    pub fn use_text_elements(&mut self) -> &mut Self {
        self.counting = CountingMode::Graphemes;
        self
    }

    pub fn use_raw_length(&mut self) -> &mut Self {
        self.counting = CountingMode::Chars;
        self
    }

    pub fn counting(&mut self, mode: CountingMode) -> &mut Self {
        self.counting = mode;
        self
    }

    pub(crate) fn configured(configure: impl FnOnce(&mut Self)) -> Self {
        let mut options = Self::default();
        configure(&mut options);
        options
    }

    #[inline]
    pub fn measure(&self, value: &str) -> TextLength {
        self.counting.measure(value)
    }
}
