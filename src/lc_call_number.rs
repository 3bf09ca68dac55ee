//! The public entry point: an owned, parsed Library of Congress call number.

use crate::call_number::CallNumber;
use crate::compare::{compare_call_numbers, CallNumberOrdering};
use crate::config::{FormatStyle, ParseOptions};
use crate::error::{CallNumberError, Result};
use crate::format;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A Library of Congress call number.
///
/// Parsing, formatting and comparison all go through this type. Equality and
/// ordering follow shelving order: two values are equal when they compare
/// [`Same`](CallNumberOrdering::Same), even if they were written differently.
///
/// # Examples
///
/// ```
/// use lc_callnum::{CallNumberOrdering, FormatStyle, LcCallNumber};
///
/// let broad: LcCallNumber = "QA76".parse()?;
/// let narrow: LcCallNumber = "qa76.76 .e5 c45 2007e".parse()?;
///
/// assert!(broad.includes(&narrow));
/// assert!(broad < narrow);
/// assert_eq!(broad.compare_detailed(&narrow), CallNumberOrdering::Specifying);
/// assert_eq!(narrow.to_string(), "QA76.76 .E5 C45 2007e");
/// assert_eq!(narrow.format(&FormatStyle::compact()), "QA76.76.E5C45 2007e");
/// # Ok::<(), lc_callnum::CallNumberError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LcCallNumber {
    number: CallNumber,
}

impl LcCallNumber {
    /// Parse a call number with the default options.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a well-formed call number; see
    /// [`CallNumberError`].
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, &ParseOptions::default())
    }

    /// Parse a call number with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a well-formed call number; see
    /// [`CallNumberError`].
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self> {
        match CallNumber::parse_with(input, options) {
            Ok(number) => Ok(LcCallNumber { number }),
            Err(err) => {
                log::debug!("rejected call number {:?}: {}", input, err);
                Err(err)
            }
        }
    }

    /// The parsed structure.
    #[must_use]
    pub const fn call_number(&self) -> &CallNumber {
        &self.number
    }

    /// Render in the given style.
    #[must_use]
    pub fn format(&self, style: &FormatStyle) -> String {
        format::format_call_number(&self.number, style)
    }

    /// Byte length of the rendering in the given style.
    #[must_use]
    pub fn formatted_len(&self, style: &FormatStyle) -> usize {
        format::formatted_len(&self.number, style)
    }

    /// Render into `buf`, returning the byte length of the full rendering.
    ///
    /// Output that does not fit is dropped, so a return value larger than
    /// `buf.len()` means the buffer was too small. An empty `buf` only measures.
    pub fn format_into(&self, style: &FormatStyle, buf: &mut [u8]) -> usize {
        format::format_into(&self.number, style, buf)
    }

    /// Shelving order, with subdivisions reported as `Ascending`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> CallNumberOrdering {
        compare_call_numbers(&self.number, &other.number, false)
    }

    /// Shelving order, reporting subdivisions of `self` as `Specifying`.
    #[must_use]
    pub fn compare_detailed(&self, other: &Self) -> CallNumberOrdering {
        compare_call_numbers(&self.number, &other.number, true)
    }

    /// Whether `self` and `other` shelve as the same call number.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare_detailed(other).is_same()
    }

    /// Whether `other` is a subdivision of `self`'s subject.
    #[must_use]
    pub fn includes(&self, other: &Self) -> bool {
        self.compare_detailed(other).is_specifying()
    }
}

impl From<CallNumber> for LcCallNumber {
    fn from(number: CallNumber) -> Self {
        LcCallNumber { number }
    }
}

impl From<LcCallNumber> for CallNumber {
    fn from(number: LcCallNumber) -> Self {
        number.number
    }
}

impl FromStr for LcCallNumber {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LcCallNumber {
    type Error = CallNumberError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LcCallNumber {
    type Error = CallNumberError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<LcCallNumber> for String {
    fn from(number: LcCallNumber) -> Self {
        number.to_string()
    }
}

impl fmt::Display for LcCallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_call_number(f, &self.number, &FormatStyle::canonical())
    }
}

impl PartialEq for LcCallNumber {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for LcCallNumber {}

impl PartialOrd for LcCallNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LcCallNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).linear()
    }
}
