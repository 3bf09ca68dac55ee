//! Recursive-descent grammar for Library of Congress call numbers.
//!
//! Every production takes a [`Cursor`] by value and returns the parsed value
//! together with the advanced cursor, or `None` without side effects. A
//! caller that wants to try an alternative simply keeps using the cursor it
//! already had.
//!
//! The grammar, in order:
//!
//! 1. caption root: class letters, optional space, class number, optional `.decimal`
//! 2. caption trailer: a date or an ordinal
//! 3. up to three cutters, the first optionally introduced by `.`
//! 4. up to two leading special segments, each after a space
//! 5. any number of remainder special segments, each after a space
//!
//! The whole input must be consumed, save for trailing whitespace.

use crate::bounded::BoundedStr;
use crate::call_number::{
    CallNumber, Caption, Cutter, Date, DateOrOrdinal, DateSpan, Ordinal, Special, Supplement,
    Volume, MAX_CUTTERS, MAX_SPECIALS,
};
use crate::chars::{is_alpha, is_digit, is_lower, is_not_space, is_upper, is_year_separator};
use crate::config::ParseOptions;
use crate::cursor::Cursor;
use crate::error::{CallNumberError, Result};
use smallvec::SmallVec;

/// Longest alphabetic run in an ordinal suffix before or between periods.
const SUFFIX_RUN: usize = 3;

/// What may directly follow a date or an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// A word break.
    Word,
    /// A word break or a cutter point, as after a caption or a cutter.
    WordOrCutpoint,
}

impl Boundary {
    fn accepts(self, cursor: Cursor<'_>) -> bool {
        match self {
            Self::Word => cursor.peek_break(),
            Self::WordOrCutpoint => cursor.peek_break() || cursor.peek_cutpoint(),
        }
    }
}

/// Parse a complete call number.
///
/// # Errors
///
/// - [`CallNumberError::Empty`] when the input holds nothing but whitespace
/// - [`CallNumberError::MissingClass`] when no class letters start the input
/// - [`CallNumberError::TrailingInput`] when text remains after the last segment
pub fn parse_call_number(input: &str, options: &ParseOptions) -> Result<CallNumber> {
    let start = Cursor::new(input, options.auto_uppercase).skip_space();
    if start.is_at_end() {
        return Err(CallNumberError::Empty);
    }

    let (caption, cursor) = caption(start).ok_or(CallNumberError::MissingClass {
        offset: start.offset(),
    })?;
    log::trace!("caption {} ends at {}", caption, cursor.offset());

    let (cutters, cursor) = cutters(cursor);
    if !cutters.is_empty() {
        log::trace!("{} cutter(s) end at {}", cutters.len(), cursor.offset());
    }

    let (specials, cursor) = special_list(cursor, Some(MAX_SPECIALS));
    let (remainder, cursor) = if specials.len() == MAX_SPECIALS {
        special_list(cursor, None)
    } else {
        (Vec::new(), cursor)
    };
    if !specials.is_empty() {
        log::trace!(
            "{} special segment(s) and {} remainder segment(s) end at {}",
            specials.len(),
            remainder.len(),
            cursor.offset()
        );
    }

    let end = cursor.skip_space();
    if !end.is_at_end() {
        return Err(CallNumberError::TrailingInput {
            offset: end.offset(),
            remaining: String::from_utf8_lossy(end.remaining()).into_owned(),
        });
    }

    Ok(CallNumber::from_parsed(
        caption,
        cutters,
        specials.into_iter().collect(),
        remainder,
    ))
}

/// Run one production over the whole of `input`.
///
/// Surrounding whitespace is ignored, and case folding is on.
///
/// # Errors
///
/// [`CallNumberError::InvalidComponent`] when the production fails or leaves
/// input unconsumed.
pub fn parse_component<T>(
    input: &str,
    component: &'static str,
    production: impl Fn(Cursor<'_>) -> Option<(T, Cursor<'_>)>,
) -> Result<T> {
    let start = Cursor::new(input, true).skip_space();
    production(start)
        .filter(|(_, next)| next.skip_space().is_at_end())
        .map(|(value, _)| value)
        .ok_or_else(|| CallNumberError::InvalidComponent {
            component,
            value: input.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Caption

fn caption(cursor: Cursor<'_>) -> Option<(Caption, Cursor<'_>)> {
    let (mut caption, cursor) = caption_root(cursor)?;
    let (dateord, cursor) = match caption_trailer(cursor) {
        Some((dateord, next)) => (Some(dateord), next),
        None => (None, cursor),
    };
    caption.dateord = dateord;
    Some((caption, cursor))
}

fn caption_root(cursor: Cursor<'_>) -> Option<(Caption, Cursor<'_>)> {
    let (letters, after_letters) = cursor.scan_upper::<3>()?;
    if after_letters.peek_is(is_alpha) {
        return None;
    }
    let mut caption = Caption {
        letters,
        ..Caption::default()
    };

    let Some((integer, after_integer)) = after_letters.skip_space().scan_run::<4>(is_digit) else {
        return Some((caption, after_letters));
    };
    caption.integer = integer;

    let decimal = after_integer
        .read_point()
        .and_then(|next| next.scan_run::<16>(is_digit));
    match decimal {
        Some((decimal, next)) => {
            caption.decimal = decimal;
            Some((caption, next))
        }
        None => Some((caption, after_integer)),
    }
}

/// The date or ordinal after the class number.
///
/// The separating space may only be left out when the class number does not
/// end right where the trailer starts.
fn caption_trailer(cursor: Cursor<'_>) -> Option<(DateOrOrdinal, Cursor<'_>)> {
    let start = cursor.skip_space();
    if start.offset() == cursor.offset() && cursor.follows(is_digit) {
        return None;
    }
    date_or_ordinal(start)
}

fn date_or_ordinal(cursor: Cursor<'_>) -> Option<(DateOrOrdinal, Cursor<'_>)> {
    if let Some((date, next)) = date(cursor, Boundary::WordOrCutpoint) {
        return Some((DateOrOrdinal::Date(date), next));
    }
    caption_ordinal(cursor).map(|(ordinal, next)| (DateOrOrdinal::Ordinal(ordinal), next))
}

// ---------------------------------------------------------------------------
// Dates and ordinals

/// A four-digit year, not followed by another digit.
fn year(cursor: Cursor<'_>) -> Option<(BoundedStr<4>, Cursor<'_>)> {
    let (year, next) = cursor.scan_run::<4>(is_digit)?;
    (year.len() == 4 && !next.peek_is(is_digit)).then_some((year, next))
}

/// The closing year of a span: four digits, or two for an abbreviated year.
fn span(cursor: Cursor<'_>) -> Option<(DateSpan, Cursor<'_>)> {
    let (separator, next) = cursor.read_char(is_year_separator)?;
    let (year, next) = next.scan_run::<4>(is_digit)?;
    if !matches!(year.len(), 2 | 4) || next.peek_is(is_digit) {
        return None;
    }
    let span = DateSpan {
        separator: char::from(separator),
        year,
    };
    Some((span, next))
}

fn date(cursor: Cursor<'_>, boundary: Boundary) -> Option<(Date, Cursor<'_>)> {
    let (year, next) = year(cursor)?;
    let (span, next) = match span(next) {
        Some((span, after)) => (Some(span), after),
        None => (None, next),
    };
    let (mark, next) = next
        .scan_run::<3>(is_alpha)
        .unwrap_or((BoundedStr::new(), next));
    boundary
        .accepts(next)
        .then_some((Date { year, span, mark }, next))
}

/// A date in special-segment position, which must end at a word break.
pub fn special_date(cursor: Cursor<'_>) -> Option<(Date, Cursor<'_>)> {
    date(cursor, Boundary::Word)
}

/// An ordinal after a caption or a cutter: `2nd`, or `2d.` at a word break.
fn caption_ordinal(cursor: Cursor<'_>) -> Option<(Ordinal, Cursor<'_>)> {
    let (number, next) = cursor.scan_run::<16>(is_digit)?;
    let mut suffix = BoundedStr::new();
    let mut next = next.scan_append(&mut suffix, is_alpha, identity, SUFFIX_RUN)?;
    if let Some(after_point) = next.read_point() {
        if after_point.peek_break() && suffix.push(b'.') {
            next = after_point;
        }
    }
    Boundary::WordOrCutpoint
        .accepts(next)
        .then_some((Ordinal { number, suffix }, next))
}

/// An ordinal in special-segment position.
///
/// The suffix may carry abbreviation periods, as in `1st.ed` or `2nd.`.
pub fn special_ordinal(cursor: Cursor<'_>) -> Option<(Ordinal, Cursor<'_>)> {
    let (number, next) = cursor.scan_run::<16>(is_digit)?;
    let mut suffix = BoundedStr::new();
    let mut next = next.scan_append(&mut suffix, is_alpha, identity, SUFFIX_RUN)?;
    while let Some(after_point) = next.read_point() {
        if !suffix.push(b'.') {
            break;
        }
        next = after_point
            .scan_append(&mut suffix, is_alpha, identity, SUFFIX_RUN)
            .unwrap_or(after_point);
    }
    next.peek_break().then_some((Ordinal { number, suffix }, next))
}

fn identity(c: u8) -> u8 {
    c
}

// ---------------------------------------------------------------------------
// Cutters

/// A cutter letter, its digits, and an optional lowercase work mark.
fn cutter_body(cursor: Cursor<'_>) -> Option<(Cutter, Cursor<'_>)> {
    let (letter, next) = cursor.read_upper()?;
    let (number, next) = next.scan_run::<16>(is_digit)?;
    let (mark, next) = next
        .scan_run::<3>(is_lower)
        .unwrap_or((BoundedStr::new(), next));
    let cutter = Cutter {
        letter: char::from(letter),
        number,
        mark,
        dateord: None,
    };
    Some((cutter, next))
}

/// A cutter after the first one.
///
/// With `needs_separator`, a space or a cutter point must come first.
fn following_cutter(cursor: Cursor<'_>, needs_separator: bool) -> Option<(Cutter, Cursor<'_>)> {
    let spaced = cursor.skip_space();
    let pointed = spaced.read_point();
    if needs_separator && spaced.offset() == cursor.offset() && pointed.is_none() {
        return None;
    }
    cutter_body(pointed.unwrap_or(spaced))
}

/// The date or ordinal after a cutter, separated by a space.
fn cutter_dateord(cursor: Cursor<'_>) -> Option<(DateOrOrdinal, Cursor<'_>)> {
    date_or_ordinal(cursor.read_space()?)
}

/// Up to three cutters.
///
/// A date or ordinal after a cutter belongs to that cutter only when another
/// cutter follows it; otherwise it is left for the special segments.
fn cutters(cursor: Cursor<'_>) -> (SmallVec<[Cutter; MAX_CUTTERS]>, Cursor<'_>) {
    let mut list = SmallVec::new();
    let lead = cursor.skip_space();
    let lead = lead.read_point().unwrap_or(lead);
    let Some((mut current, mut next)) = cutter_body(lead) else {
        return (list, cursor);
    };

    while list.len() + 1 < MAX_CUTTERS {
        let dated = cutter_dateord(next).and_then(|(dateord, after)| {
            following_cutter(after, true).map(|(following, rest)| (dateord, following, rest))
        });
        if let Some((dateord, following, rest)) = dated {
            current.dateord = Some(dateord);
            list.push(current);
            current = following;
            next = rest;
            continue;
        }
        match following_cutter(next, !current.mark.is_empty()) {
            Some((following, rest)) => {
                list.push(current);
                current = following;
                next = rest;
            }
            None => break,
        }
    }
    list.push(current);
    (list, next)
}

/// A single cutter with an optional trailing date or ordinal.
pub fn standalone_cutter(cursor: Cursor<'_>) -> Option<(Cutter, Cursor<'_>)> {
    let (mut cutter, next) = cutter_body(cursor)?;
    match cutter_dateord(next) {
        Some((dateord, after)) => {
            cutter.dateord = Some(dateord);
            Some((cutter, after))
        }
        None => Some((cutter, next)),
    }
}

// ---------------------------------------------------------------------------
// Special segments

/// Special segments, each after a space, up to `limit` of them.
fn special_list(cursor: Cursor<'_>, limit: Option<usize>) -> (Vec<Special>, Cursor<'_>) {
    let mut list = Vec::new();
    let mut cursor = cursor;
    while limit.map_or(true, |limit| list.len() < limit) {
        let Some((segment, next)) = cursor.read_space().and_then(special) else {
            break;
        };
        list.push(segment);
        cursor = next;
    }
    (list, cursor)
}

/// One special segment: date, ordinal, volume, supplement, or word, in that order.
pub fn special(cursor: Cursor<'_>) -> Option<(Special, Cursor<'_>)> {
    if let Some((date, next)) = special_date(cursor) {
        return Some((Special::Date(date), next));
    }
    if let Some((ordinal, next)) = special_ordinal(cursor) {
        return Some((Special::Ordinal(ordinal), next));
    }
    if let Some((volume, next)) = volume(cursor) {
        return Some((Special::Volume(volume), next));
    }
    if let Some((supplement, next)) = supplement(cursor) {
        return Some((Special::Supplement(supplement), next));
    }
    word(cursor).map(|(word, next)| (Special::Word(word), next))
}

/// A volume: a lowercase abbreviation, a period, then digits, as in `v. 2` or `v.2`.
pub fn volume(cursor: Cursor<'_>) -> Option<(Volume, Cursor<'_>)> {
    let (prefix, next) = cursor.scan_run::<16>(is_lower)?;
    let next = next.read_point()?.skip_space();
    let (number, next) = next.scan_run::<16>(is_digit)?;
    let (has_etc, next) = match next.read_etc() {
        Some(after) => (true, after),
        None => (false, next),
    };
    let volume = Volume {
        prefix,
        number,
        has_etc,
    };
    next.peek_break().then_some((volume, next))
}

/// A supplement: a capitalized word, an optional abbreviation period, an
/// optional number, and an optional `, etc.`.
pub fn supplement(cursor: Cursor<'_>) -> Option<(Supplement, Cursor<'_>)> {
    let mut prefix = BoundedStr::<16>::new();
    let next = cursor.scan_append(&mut prefix, is_upper, identity, 1)?;
    let next = next.scan_append(&mut prefix, is_lower, identity, usize::MAX)?;
    if next.peek_is(is_alpha) {
        return None;
    }

    let (is_abbreviation, next) = match next.read_point() {
        Some(after) => (true, after),
        None => (false, next),
    };

    let number_start = if is_abbreviation {
        Some(next.skip_space())
    } else {
        next.read_space()
    };
    let (number, next) = number_start
        .and_then(|start| start.scan_run::<16>(is_digit))
        .filter(|(_, after)| after.peek_break() || after.read_etc().is_some())
        .unwrap_or((BoundedStr::new(), next));

    let (has_etc, next) = match next.read_etc() {
        Some(after) => (true, after),
        None => (false, next),
    };
    let supplement = Supplement {
        prefix,
        is_abbreviation,
        number,
        has_etc,
    };
    next.peek_break().then_some((supplement, next))
}

/// Any other token up to the next word break.
fn word(cursor: Cursor<'_>) -> Option<(BoundedStr<24>, Cursor<'_>)> {
    let (word, next) = cursor.scan_run::<24>(is_not_space)?;
    next.peek_break().then_some((word, next))
}
