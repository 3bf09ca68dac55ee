//! Configuration for parsing and formatting call numbers.
//!
//! [`ParseOptions`] controls how lenient the lexer is with letter case, and
//! [`FormatStyle`] controls the punctuation a call number is rendered with.

use serde::{Deserialize, Serialize};

/// Options for parsing call numbers.
///
/// # Examples
///
/// ```
/// use lc_callnum::{LcCallNumber, ParseOptions};
///
/// let strict = ParseOptions::new().with_auto_uppercase(false);
/// assert!(LcCallNumber::parse_with("qa76", &strict).is_err());
/// assert!(LcCallNumber::parse_with("qa76", &ParseOptions::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Accept lowercase class and cutter letters, storing them upper-cased.
    ///
    /// Enabled by default. Marks, suffixes and words always keep their case.
    pub auto_uppercase: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            auto_uppercase: true,
        }
    }
}

impl ParseOptions {
    /// Creates parse options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether lowercase class and cutter letters are accepted.
    #[must_use]
    pub const fn with_auto_uppercase(mut self, enabled: bool) -> Self {
        self.auto_uppercase = enabled;
        self
    }
}

/// Punctuation style used when rendering a call number.
///
/// The presets cover the common layouts for `QA76.76 .C65 A37 1986`:
///
/// | Preset        | Rendering                     |
/// |---------------|-------------------------------|
/// | [`compact`]   | `QA76.76.C65A37 1986`         |
/// | [`canonical`] | `QA76.76 .C65 A37 1986`       |
/// | [`pocket`]    | `QA 76.76 .C65 A37 1986`      |
/// | [`spine`]     | pocket layout, one line each  |
///
/// [`compact`]: FormatStyle::compact
/// [`canonical`]: FormatStyle::canonical
/// [`pocket`]: FormatStyle::pocket
/// [`spine`]: FormatStyle::spine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatStyle {
    /// Character placed between sections.
    pub separator: char,

    /// Separate the class letters from the class number.
    pub split_subject: bool,

    /// Separate consecutive cutters from each other.
    pub split_cutters: bool,

    /// Put the separator before the cutter point that opens the cutters.
    pub split_sections: bool,

    /// Put a cutter point, instead of the separator, after a cutter's trailing date.
    pub extra_cutpoint: bool,
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self::compact()
    }
}

impl FormatStyle {
    /// Creates the default (compact) style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No optional separators: `QA76.76.C65A37 1986`.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            separator: ' ',
            split_subject: false,
            split_cutters: false,
            split_sections: false,
            extra_cutpoint: false,
        }
    }

    /// Cutters split from the caption and from each other: `QA76.76 .C65 A37 1986`.
    ///
    /// This is the style used by `Display`, and the one a formatted call number
    /// always parses back from.
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            separator: ' ',
            split_subject: false,
            split_cutters: true,
            split_sections: true,
            extra_cutpoint: false,
        }
    }

    /// Every section split, as printed on a pocket label: `QA 76.76 .C65 A37 1986`.
    #[must_use]
    pub const fn pocket() -> Self {
        Self {
            separator: ' ',
            split_subject: true,
            split_cutters: true,
            split_sections: true,
            extra_cutpoint: false,
        }
    }

    /// The pocket layout with one section per line, as printed on a spine label.
    #[must_use]
    pub const fn spine() -> Self {
        Self::pocket().with_separator('\n')
    }

    /// Sets the section separator.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets whether the class letters are separated from the class number.
    #[must_use]
    pub const fn with_split_subject(mut self, enabled: bool) -> Self {
        self.split_subject = enabled;
        self
    }

    /// Sets whether consecutive cutters are separated.
    #[must_use]
    pub const fn with_split_cutters(mut self, enabled: bool) -> Self {
        self.split_cutters = enabled;
        self
    }

    /// Sets whether the cutters are separated from the caption.
    #[must_use]
    pub const fn with_split_sections(mut self, enabled: bool) -> Self {
        self.split_sections = enabled;
        self
    }

    /// Sets whether a cutter point follows a cutter's trailing date.
    #[must_use]
    pub const fn with_extra_cutpoint(mut self, enabled: bool) -> Self {
        self.extra_cutpoint = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        assert!(ParseOptions::default().auto_uppercase);
        assert!(!ParseOptions::new().with_auto_uppercase(false).auto_uppercase);
        assert_eq!(FormatStyle::default(), FormatStyle::compact());
    }

    #[test]
    fn test_presets() {
        let pocket = FormatStyle::pocket();
        assert!(pocket.split_subject && pocket.split_cutters && pocket.split_sections);
        assert!(!pocket.extra_cutpoint);

        let spine = FormatStyle::spine();
        assert_eq!(spine.separator, '\n');
        assert_eq!(spine.with_separator(' '), pocket);

        let canonical = FormatStyle::canonical();
        assert!(!canonical.split_subject);
        assert!(canonical.split_cutters && canonical.split_sections);
    }

    #[test]
    fn test_builder_pattern() {
        let style = FormatStyle::new()
            .with_separator('/')
            .with_split_subject(true)
            .with_split_cutters(true)
            .with_split_sections(true)
            .with_extra_cutpoint(true);
        assert_eq!(style.separator, '/');
        assert!(style.split_subject);
        assert!(style.split_cutters);
        assert!(style.split_sections);
        assert!(style.extra_cutpoint);
    }
}
