//! Shelving order and subject inclusion between call numbers.
//!
//! Two call numbers are compared field by field in shelving order. Each field
//! yields one of the four [`CallNumberOrdering`] values:
//!
//! - text fields (class letters, decimal, cutters, suffixes, marks, words) use a
//!   case-insensitive comparison in which a left value that is a proper prefix
//!   of the right value is [`Specifying`](CallNumberOrdering::Specifying);
//! - numeric fields (class number, years, volume numbers) compare as numbers,
//!   with an absent value counting as zero and no specifying case.
//!
//! `Ascending` and `Descending` settle the comparison. `Same` moves on to the
//! next field. `Specifying` also moves on, but only stays `Specifying` while
//! the left call number has nothing more to say: as soon as a later field is
//! present on the left, the right value is no longer a subdivision of the left
//! and the result becomes `Ascending`.

use crate::bounded::BoundedStr;
use crate::call_number::{
    CallNumber, Cutter, Date, DateOrOrdinal, Ordinal, Special, Supplement, Volume, MAX_CUTTERS,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Four-valued ordering between two call numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallNumberOrdering {
    /// The left call number sorts after the right one.
    Descending,
    /// The call numbers are equivalent.
    Same,
    /// The left call number sorts before the right one.
    Ascending,
    /// The right call number is a subdivision within the left one's subject,
    /// and so also sorts after it.
    Specifying,
}

impl CallNumberOrdering {
    /// The plain ordering, with `Specifying` read as `Less`.
    #[must_use]
    pub const fn linear(self) -> Ordering {
        match self {
            Self::Descending => Ordering::Greater,
            Self::Same => Ordering::Equal,
            Self::Ascending | Self::Specifying => Ordering::Less,
        }
    }

    /// Whether this is `Same`.
    #[must_use]
    pub const fn is_same(self) -> bool {
        matches!(self, Self::Same)
    }

    /// Whether this is `Specifying`.
    #[must_use]
    pub const fn is_specifying(self) -> bool {
        matches!(self, Self::Specifying)
    }

    /// Read `Specifying` as `Ascending`.
    #[must_use]
    pub const fn collapse(self) -> Self {
        match self {
            Self::Specifying => Self::Ascending,
            other => other,
        }
    }
}

impl From<Ordering> for CallNumberOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Ascending,
            Ordering::Equal => Self::Same,
            Ordering::Greater => Self::Descending,
        }
    }
}

impl fmt::Display for CallNumberOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descending => write!(f, "descending"),
            Self::Same => write!(f, "same"),
            Self::Ascending => write!(f, "ascending"),
            Self::Specifying => write!(f, "specifying"),
        }
    }
}

/// Compare two call numbers.
///
/// With `specify` off, `Specifying` is reported as `Ascending`.
#[must_use]
pub fn compare_call_numbers(
    left: &CallNumber,
    right: &CallNumber,
    specify: bool,
) -> CallNumberOrdering {
    let (lc, rc) = (left.caption(), right.caption());
    let (l_year, r_year) = (dateord_year(lc.dateord.as_ref()), dateord_year(rc.dateord.as_ref()));
    let (l_ordinal, r_ordinal) = (
        dateord_ordinal(lc.dateord.as_ref()),
        dateord_ordinal(rc.dateord.as_ref()),
    );

    let mut chain = Chain::new()
        .text(&lc.letters, &rc.letters)
        .number(&lc.integer, &rc.integer)
        .text(&lc.decimal, &rc.decimal)
        .number(&l_year, &r_year)
        .number(&l_ordinal.number, &r_ordinal.number)
        .text(&l_ordinal.suffix, &r_ordinal.suffix);

    for index in 0..MAX_CUTTERS {
        let (l_cutter, r_cutter) = (left.cutters().get(index), right.cutters().get(index));
        let l_key = l_cutter.map(Cutter::key).unwrap_or_default();
        let r_key = r_cutter.map(Cutter::key).unwrap_or_default();
        let l_year = dateord_year(l_cutter.and_then(|c| c.dateord.as_ref()));
        let r_year = dateord_year(r_cutter.and_then(|c| c.dateord.as_ref()));
        chain = chain.text(&l_key, &r_key).number(&l_year, &r_year);
    }

    chain = chain.dateord(lc.dateord.as_ref(), rc.dateord.as_ref());
    for index in 0..MAX_CUTTERS {
        let (l_cutter, r_cutter) = (left.cutters().get(index), right.cutters().get(index));
        let l_mark = l_cutter.map(|c| c.mark).unwrap_or_default();
        let r_mark = r_cutter.map(|c| c.mark).unwrap_or_default();
        chain = chain.text(&l_mark, &r_mark).dateord(
            l_cutter.and_then(|c| c.dateord.as_ref()),
            r_cutter.and_then(|c| c.dateord.as_ref()),
        );
    }

    let mut l_segments = left.segments();
    let mut r_segments = right.segments();
    while !chain.is_settled() {
        match (l_segments.next(), r_segments.next()) {
            (None, None) => break,
            (l, r) => chain = chain.segment(l, r),
        }
    }

    let result = chain.finish();
    if specify {
        result
    } else {
        result.collapse()
    }
}

/// Case-insensitive comparison of `left` against `right` in which a proper
/// prefix on the left is `Specifying`.
///
/// # Examples
///
/// ```
/// use lc_callnum::{compare_text, CallNumberOrdering};
///
/// assert_eq!(compare_text("QA", "qa"), CallNumberOrdering::Same);
/// assert_eq!(compare_text("Q", "QA"), CallNumberOrdering::Specifying);
/// assert_eq!(compare_text("QA", "Q"), CallNumberOrdering::Descending);
/// assert_eq!(compare_text("76", "9"), CallNumberOrdering::Ascending);
/// ```
#[must_use]
pub fn compare_text(left: &str, right: &str) -> CallNumberOrdering {
    let mut l = left.bytes().map(|c| c.to_ascii_uppercase());
    let mut r = right.bytes().map(|c| c.to_ascii_uppercase());
    loop {
        match (l.next(), r.next()) {
            (None, None) => return CallNumberOrdering::Same,
            (None, Some(_)) => return CallNumberOrdering::Specifying,
            (Some(_), None) => return CallNumberOrdering::Descending,
            (Some(a), Some(b)) if a != b => return a.cmp(&b).into(),
            _ => {}
        }
    }
}

/// Comparison in progress.
#[derive(Debug, Clone, Copy)]
struct Chain(CallNumberOrdering);

impl Chain {
    const fn new() -> Self {
        Chain(CallNumberOrdering::Same)
    }

    const fn finish(self) -> CallNumberOrdering {
        self.0
    }

    const fn is_settled(self) -> bool {
        matches!(
            self.0,
            CallNumberOrdering::Ascending | CallNumberOrdering::Descending
        )
    }

    /// Fold in one field. `left_present` tells whether the left call number
    /// has this field; `compare` runs only while everything so far is `Same`.
    fn field(self, left_present: bool, compare: impl FnOnce() -> CallNumberOrdering) -> Self {
        match self.0 {
            CallNumberOrdering::Same => Chain(compare()),
            CallNumberOrdering::Specifying if left_present => Chain(CallNumberOrdering::Ascending),
            _ => self,
        }
    }

    fn text(self, left: &str, right: &str) -> Self {
        self.field(!left.is_empty(), || compare_text(left, right))
    }

    fn number<const N: usize>(self, left: &BoundedStr<N>, right: &BoundedStr<N>) -> Self {
        self.field(!left.is_empty(), || {
            left.to_number().cmp(&right.to_number()).into()
        })
    }

    fn flag(self, left: bool, right: bool) -> Self {
        self.field(left, || left.cmp(&right).into())
    }

    /// Fold in an optional part: absent on the left only is `Specifying`,
    /// absent on the right only is `Descending`.
    fn optional<T>(
        self,
        left: Option<&T>,
        right: Option<&T>,
        compare: impl FnOnce(&T, &T) -> CallNumberOrdering,
    ) -> Self {
        self.field(left.is_some(), || match (left, right) {
            (None, None) => CallNumberOrdering::Same,
            (None, Some(_)) => CallNumberOrdering::Specifying,
            (Some(_), None) => CallNumberOrdering::Descending,
            (Some(l), Some(r)) => compare(l, r),
        })
    }

    fn dateord(self, left: Option<&DateOrOrdinal>, right: Option<&DateOrOrdinal>) -> Self {
        self.optional(left, right, compare_dateord)
    }

    fn segment(self, left: Option<&Special>, right: Option<&Special>) -> Self {
        self.optional(left, right, compare_special)
    }
}

fn dateord_year(dateord: Option<&DateOrOrdinal>) -> BoundedStr<4> {
    dateord
        .and_then(DateOrOrdinal::as_date)
        .map(|date| date.year)
        .unwrap_or_default()
}

fn dateord_ordinal(dateord: Option<&DateOrOrdinal>) -> Ordinal {
    dateord
        .and_then(DateOrOrdinal::as_ordinal)
        .copied()
        .unwrap_or_default()
}

fn compare_date(left: &Date, right: &Date) -> CallNumberOrdering {
    let l_span = left.span.map(|span| span.year).unwrap_or_default();
    let r_span = right.span.map(|span| span.year).unwrap_or_default();
    Chain::new()
        .number(&left.year, &right.year)
        .number(&l_span, &r_span)
        .text(&left.mark, &right.mark)
        .finish()
}

fn compare_ordinal(left: &Ordinal, right: &Ordinal) -> CallNumberOrdering {
    Chain::new()
        .number(&left.number, &right.number)
        .text(&left.suffix, &right.suffix)
        .finish()
}

/// Ordinals sort before dates.
fn compare_dateord(left: &DateOrOrdinal, right: &DateOrOrdinal) -> CallNumberOrdering {
    match (left, right) {
        (DateOrOrdinal::Date(l), DateOrOrdinal::Date(r)) => compare_date(l, r),
        (DateOrOrdinal::Ordinal(l), DateOrOrdinal::Ordinal(r)) => compare_ordinal(l, r),
        (DateOrOrdinal::Ordinal(_), DateOrOrdinal::Date(_)) => CallNumberOrdering::Ascending,
        (DateOrOrdinal::Date(_), DateOrOrdinal::Ordinal(_)) => CallNumberOrdering::Descending,
    }
}

fn compare_volume(left: &Volume, right: &Volume) -> CallNumberOrdering {
    Chain::new()
        .text(&left.prefix, &right.prefix)
        .number(&left.number, &right.number)
        .flag(left.has_etc, right.has_etc)
        .finish()
}

fn compare_supplement(left: &Supplement, right: &Supplement) -> CallNumberOrdering {
    Chain::new()
        .text(&left.prefix, &right.prefix)
        .flag(left.is_abbreviation, right.is_abbreviation)
        .number(&left.number, &right.number)
        .flag(left.has_etc, right.has_etc)
        .finish()
}

/// Shelving rank of a special segment kind.
const fn special_rank(segment: &Special) -> u8 {
    match segment {
        Special::Date(_) => 0,
        Special::Word(_) => 1,
        Special::Ordinal(_) => 2,
        Special::Volume(_) => 3,
        Special::Supplement(_) => 4,
    }
}

fn compare_special(left: &Special, right: &Special) -> CallNumberOrdering {
    match (left, right) {
        (Special::Date(l), Special::Date(r)) => compare_date(l, r),
        (Special::Word(l), Special::Word(r)) => compare_text(l, r),
        (Special::Ordinal(l), Special::Ordinal(r)) => compare_ordinal(l, r),
        (Special::Volume(l), Special::Volume(r)) => compare_volume(l, r),
        (Special::Supplement(l), Special::Supplement(r)) => compare_supplement(l, r),
        _ => special_rank(left).cmp(&special_rank(right)).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CallNumberOrdering::{Ascending, Descending, Same, Specifying};

    fn detailed(left: &str, right: &str) -> CallNumberOrdering {
        let left: CallNumber = left.parse().unwrap();
        let right: CallNumber = right.parse().unwrap();
        compare_call_numbers(&left, &right, true)
    }

    #[test]
    fn test_compare_text() {
        assert_eq!(compare_text("", ""), Same);
        assert_eq!(compare_text("", "A"), Specifying);
        assert_eq!(compare_text("A", ""), Descending);
        assert_eq!(compare_text("HQ", "QA"), Ascending);
        assert_eq!(compare_text("st", "ST"), Same);
    }

    #[test]
    fn test_linear() {
        assert_eq!(Specifying.linear(), Ordering::Less);
        assert_eq!(Ascending.linear(), Ordering::Less);
        assert_eq!(Same.linear(), Ordering::Equal);
        assert_eq!(Descending.linear(), Ordering::Greater);
        assert_eq!(Specifying.collapse(), Ascending);
        assert_eq!(Descending.collapse(), Descending);
    }

    #[test]
    fn test_caption_fields() {
        assert_eq!(detailed("HQ76", "QA76"), Ascending);
        assert_eq!(detailed("QA76", "QA76.76"), Specifying);
        assert_eq!(detailed("QA76.76", "QA76"), Descending);
        assert_eq!(detailed("QA76.76", "QA76.9"), Ascending);
        assert_eq!(detailed("P35", "P112"), Ascending);
        assert_eq!(detailed("Q", "QA76"), Specifying);
        assert_eq!(detailed("QA", "QA76"), Ascending);
        assert_eq!(detailed("QA76.76", "qa76.76"), Same);
    }

    #[test]
    fn test_specify_flag() {
        let left: CallNumber = "QA76".parse().unwrap();
        let right: CallNumber = "QA76.76".parse().unwrap();
        assert_eq!(compare_call_numbers(&left, &right, false), Ascending);
    }

    #[test]
    fn test_specifying_ends_when_left_continues() {
        assert_eq!(detailed("QA76 .E5", "QA76.76"), Ascending);
        assert_eq!(detailed("QA76", "QA76.76 .E5 2007"), Specifying);
    }

    #[test]
    fn test_caption_dates_and_ordinals() {
        assert_eq!(detailed("KF4558 1787", "KF4558 1791"), Ascending);
        assert_eq!(detailed("KF4558 2nd", "KF4558 15th"), Ascending);
        assert_eq!(detailed("KF4558 15th", "KF4558 1787"), Ascending);
        assert_eq!(detailed("KF4558 1787", "KF4558 15th"), Descending);
    }

    #[test]
    fn test_cutters() {
        assert_eq!(detailed("QA76 .E5", "QA76 .E55"), Specifying);
        assert_eq!(detailed("QA76 .E5", "QA76 .E6"), Ascending);
        assert_eq!(detailed("QA76 .E5", "QA76 .E5 C45"), Specifying);
        assert_eq!(detailed("QA76 .E5 C45", "QA76 .E5 B9"), Descending);
        assert_eq!(detailed("G1234 .B6 1999 .C5", "G1234 .B6 2001 .C5"), Ascending);
        assert_eq!(detailed("PR6019.O9 U4", "PR6019.O9 U4a"), Specifying);
    }

    #[test]
    fn test_specials() {
        assert_eq!(detailed("QA76 .E5 2007", "QA76 .E5 2007e"), Specifying);
        assert_eq!(detailed("QA76 .E5 2007", "QA76 .E5 2008"), Ascending);
        assert_eq!(detailed("QA76 .E5 2007 v. 2", "QA76 .E5 2007 v. 10"), Ascending);
        assert_eq!(detailed("QA76 .E5 2007", "QA76 .E5 2007 v. 2"), Specifying);
        assert_eq!(detailed("QA76 .E5 2007 v. 2", "QA76 .E5 2007"), Descending);
        assert_eq!(detailed("QA76 .E5 2007", "QA76 .E5 ed."), Ascending);
        assert_eq!(detailed("QA76 .E5 v. 2", "QA76 .E5 2nd"), Descending);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(
            detailed("QA76 .E5 2007 v. 2 Suppl.", "QA76 .E5 2007 v. 2 Index"),
            Descending
        );
        assert_eq!(
            detailed("QA76 .E5 2007 v. 2", "QA76 .E5 2007 v. 2 Index"),
            Specifying
        );
    }
}
