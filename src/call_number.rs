//! The structured form of a Library of Congress call number.
//!
//! A [`CallNumber`] is assembled by the parser from its parts in shelving
//! order: a [`Caption`], up to three [`Cutter`]s, up to two leading
//! [`Special`] segments, and any further special segments in a remainder
//! list. Text fields are [`BoundedStr`]s; an empty field is an absent one.
//!
//! The component types are plain data with public fields. [`CallNumber`]
//! itself keeps its fields private so that its structural invariants hold for
//! every value, including deserialized ones.

use crate::bounded::BoundedStr;
use crate::config::ParseOptions;
use crate::error::{CallNumberError, Result};
use crate::parser;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Maximum number of cutters in a call number.
pub const MAX_CUTTERS: usize = 3;

/// Maximum number of leading special segments before the remainder starts.
pub const MAX_SPECIALS: usize = 2;

/// Second year of a date span, and the character that joined it to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    /// `-` or `/`
    pub separator: char,
    /// Four-digit or abbreviated two-digit year
    pub year: BoundedStr<4>,
}

/// A publication date such as `1986`, `1990-1995` or `2007e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Date {
    /// Four-digit year
    pub year: BoundedStr<4>,
    /// Optional closing year of a span
    pub span: Option<DateSpan>,
    /// Up to three letters directly after the year(s)
    pub mark: BoundedStr<3>,
}

impl Date {
    /// Numeric value of the (first) year, `0` when absent.
    #[must_use]
    pub fn year_value(&self) -> u64 {
        self.year.to_number()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.year)?;
        if let Some(span) = &self.span {
            write!(f, "{}{}", span.separator, span.year)?;
        }
        f.write_str(&self.mark)
    }
}

impl FromStr for Date {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "date", parser::special_date)
    }
}

/// An ordinal qualifier such as `2nd` or `1st.ed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ordinal {
    /// The digits
    pub number: BoundedStr<16>,
    /// Letters after the digits, possibly with embedded periods
    pub suffix: BoundedStr<8>,
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suffix)
    }
}

impl FromStr for Ordinal {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "ordinal", parser::special_ordinal)
    }
}

/// Either a [`Date`] or an [`Ordinal`], as found after a caption or a cutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOrOrdinal {
    /// A date
    Date(Date),
    /// An ordinal
    Ordinal(Ordinal),
}

impl DateOrOrdinal {
    /// The date, if this is one.
    #[must_use]
    pub const fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(date) => Some(date),
            Self::Ordinal(_) => None,
        }
    }

    /// The ordinal, if this is one.
    #[must_use]
    pub const fn as_ordinal(&self) -> Option<&Ordinal> {
        match self {
            Self::Date(_) => None,
            Self::Ordinal(ordinal) => Some(ordinal),
        }
    }
}

impl fmt::Display for DateOrOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => date.fmt(f),
            Self::Ordinal(ordinal) => ordinal.fmt(f),
        }
    }
}

/// The classification root: class letters, class number, and an optional
/// trailing date or ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Caption {
    /// One to three uppercase class letters
    pub letters: BoundedStr<3>,
    /// Up to four digits of the class number
    pub integer: BoundedStr<4>,
    /// Digits after the decimal point of the class number
    pub decimal: BoundedStr<16>,
    /// Date or ordinal following the class number
    pub dateord: Option<DateOrOrdinal>,
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letters, self.integer)?;
        if !self.decimal.is_empty() {
            write!(f, ".{}", self.decimal)?;
        }
        if let Some(dateord) = &self.dateord {
            write!(f, " {dateord}")?;
        }
        Ok(())
    }
}

/// A cutter number such as `E5` or `B6a`, with an optional trailing date or ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cutter {
    /// Uppercase initial letter
    pub letter: char,
    /// Digits after the letter
    pub number: BoundedStr<16>,
    /// Lowercase work mark directly after the digits
    pub mark: BoundedStr<3>,
    /// Date or ordinal qualifying this cutter
    pub dateord: Option<DateOrOrdinal>,
}

impl Cutter {
    /// The letter and number as one string, for example `"E5"`.
    ///
    /// Returned as a bounded string so comparison never allocates.
    #[must_use]
    pub fn key(&self) -> BoundedStr<17> {
        let mut key = BoundedStr::new();
        if self.letter.is_ascii() {
            key.push(self.letter as u8);
        }
        for c in self.number.as_bytes() {
            key.push(*c);
        }
        key
    }
}

impl fmt::Display for Cutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.number, self.mark)?;
        if let Some(dateord) = &self.dateord {
            write!(f, " {dateord}")?;
        }
        Ok(())
    }
}

impl FromStr for Cutter {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "cutter", parser::standalone_cutter)
    }
}

/// A volume designation such as `v. 2` or `v. 1, etc.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Volume {
    /// Lowercase abbreviation before the period
    pub prefix: BoundedStr<16>,
    /// Volume number
    pub number: BoundedStr<16>,
    /// Followed by `, etc.`
    pub has_etc: bool,
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.prefix, self.number)?;
        if self.has_etc {
            f.write_str(", etc.")?;
        }
        Ok(())
    }
}

impl FromStr for Volume {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "volume", parser::volume)
    }
}

/// A supplement or index designation such as `Suppl. 2` or `Index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Supplement {
    /// Capitalized word
    pub prefix: BoundedStr<16>,
    /// The word is abbreviated with a trailing period
    pub is_abbreviation: bool,
    /// Optional number
    pub number: BoundedStr<16>,
    /// Followed by `, etc.`
    pub has_etc: bool,
}

impl fmt::Display for Supplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if self.is_abbreviation {
            f.write_str(".")?;
        }
        if !self.number.is_empty() {
            write!(f, " {}", self.number)?;
        }
        if self.has_etc {
            f.write_str(", etc.")?;
        }
        Ok(())
    }
}

impl FromStr for Supplement {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "supplement", parser::supplement)
    }
}

/// A trailing qualifier after the cutters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// Publication date
    Date(Date),
    /// Edition or other ordinal
    Ordinal(Ordinal),
    /// Volume designation
    Volume(Volume),
    /// Supplement or index
    Supplement(Supplement),
    /// Any other token
    Word(BoundedStr<24>),
}

impl Special {
    /// Name of the segment kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Ordinal(_) => "ordinal",
            Self::Volume(_) => "volume",
            Self::Supplement(_) => "supplement",
            Self::Word(_) => "word",
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => date.fmt(f),
            Self::Ordinal(ordinal) => ordinal.fmt(f),
            Self::Volume(volume) => volume.fmt(f),
            Self::Supplement(supplement) => supplement.fmt(f),
            Self::Word(word) => f.write_str(word),
        }
    }
}

impl FromStr for Special {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_component(s, "special segment", parser::special)
    }
}

/// A parsed Library of Congress call number.
///
/// Values only come out of a successful parse (or a deserialization that
/// passes the same structural checks), and are immutable afterwards.
///
/// # Examples
///
/// ```
/// use lc_callnum::CallNumber;
///
/// let number: CallNumber = "QA76.76 .E5 C45 2007e".parse().unwrap();
/// assert_eq!(number.caption().letters, "QA");
/// assert_eq!(number.cutters().len(), 2);
/// assert_eq!(number.specials()[0].to_string(), "2007e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CallNumberParts")]
pub struct CallNumber {
    caption: Caption,
    cutters: SmallVec<[Cutter; MAX_CUTTERS]>,
    specials: SmallVec<[Special; MAX_SPECIALS]>,
    remainder: Vec<Special>,
}

impl CallNumber {
    /// Assemble a call number from parts the parser has already validated.
    pub(crate) fn from_parsed(
        caption: Caption,
        cutters: SmallVec<[Cutter; MAX_CUTTERS]>,
        specials: SmallVec<[Special; MAX_SPECIALS]>,
        remainder: Vec<Special>,
    ) -> Self {
        CallNumber {
            caption,
            cutters,
            specials,
            remainder,
        }
    }

    /// Parse a call number with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is empty, does not start with class
    /// letters, or has text left over after the last recognized segment.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self> {
        parser::parse_call_number(input, options)
    }

    /// The classification root.
    #[must_use]
    pub const fn caption(&self) -> &Caption {
        &self.caption
    }

    /// The cutters, in order.
    #[must_use]
    pub fn cutters(&self) -> &[Cutter] {
        &self.cutters
    }

    /// The first one or two special segments after the cutters.
    #[must_use]
    pub fn specials(&self) -> &[Special] {
        &self.specials
    }

    /// Special segments beyond the first two.
    #[must_use]
    pub fn remainder(&self) -> &[Special] {
        &self.remainder
    }

    /// All special segments: the leading ones followed by the remainder.
    pub fn segments(&self) -> impl Iterator<Item = &Special> {
        self.specials.iter().chain(self.remainder.iter())
    }
}

impl FromStr for CallNumber {
    type Err = CallNumberError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

/// Unchecked mirror of [`CallNumber`] used to validate deserialized values.
#[derive(Deserialize)]
struct CallNumberParts {
    caption: Caption,
    #[serde(default)]
    cutters: Vec<Cutter>,
    #[serde(default)]
    specials: Vec<Special>,
    #[serde(default)]
    remainder: Vec<Special>,
}

impl TryFrom<CallNumberParts> for CallNumber {
    type Error = CallNumberError;

    fn try_from(parts: CallNumberParts) -> Result<Self> {
        let invalid = |reason: &str| Err(CallNumberError::InvalidStructure(reason.to_string()));
        let caption = &parts.caption;
        if caption.letters.is_empty() || !caption.letters.bytes().all(|c| c.is_ascii_uppercase()) {
            return invalid("class letters must be one to three uppercase letters");
        }
        if !caption.integer.bytes().all(|c| c.is_ascii_digit())
            || !caption.decimal.bytes().all(|c| c.is_ascii_digit())
        {
            return invalid("class number must be digits");
        }
        if caption.integer.is_empty() && !caption.decimal.is_empty() {
            return invalid("decimal without a class number");
        }
        if parts.cutters.len() > MAX_CUTTERS {
            return invalid("more than three cutters");
        }
        for (index, cutter) in parts.cutters.iter().enumerate() {
            if !cutter.letter.is_ascii_uppercase() || cutter.number.is_empty() {
                return invalid("cutter must be an uppercase letter followed by digits");
            }
            if cutter.dateord.is_some() && index + 1 == parts.cutters.len() {
                return invalid("only a cutter followed by another cutter carries a date");
            }
        }
        if parts.specials.len() > MAX_SPECIALS {
            return invalid("more than two leading special segments");
        }
        if !parts.remainder.is_empty() && parts.specials.len() < MAX_SPECIALS {
            return invalid("remainder before the leading special segments are filled");
        }
        Ok(CallNumber {
            caption: parts.caption,
            cutters: parts.cutters.into_iter().collect(),
            specials: parts.specials.into_iter().collect(),
            remainder: parts.remainder,
        })
    }
}
