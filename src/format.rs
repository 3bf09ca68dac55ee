//! Rendering call numbers as text.
//!
//! [`write_call_number`] writes to any [`fmt::Write`] sink. On top of it,
//! [`format_call_number`] builds a `String`, and [`format_into`] fills a
//! caller-supplied byte buffer the way `snprintf` does: it writes what fits
//! and reports the length the whole rendering needs, so a zero-length buffer
//! measures without writing anything.

use crate::call_number::{CallNumber, Cutter, DateOrOrdinal, Special};
use crate::config::FormatStyle;
use std::fmt::{self, Write};

/// Write `number` to `out` in the given style.
///
/// Components are written in grammar order, and absent components are left
/// out together with the separator that would have introduced them.
///
/// # Errors
///
/// Returns an error only when `out` does.
pub fn write_call_number<W: Write>(
    out: &mut W,
    number: &CallNumber,
    style: &FormatStyle,
) -> fmt::Result {
    let caption = number.caption();
    out.write_str(&caption.letters)?;
    if !caption.integer.is_empty() {
        if style.split_subject {
            out.write_char(style.separator)?;
        }
        out.write_str(&caption.integer)?;
        if !caption.decimal.is_empty() {
            write!(out, ".{}", caption.decimal)?;
        }
    }
    if let Some(dateord) = &caption.dateord {
        write!(out, "{}{}", style.separator, dateord)?;
    }

    let after_point = caption.dateord.as_ref().is_some_and(ends_with_point);
    write_cutters(out, number.cutters(), style, after_point)?;

    for segment in number.segments() {
        write_special(out, segment, style)?;
    }
    Ok(())
}

/// Write the cutters, each introduced the way the parser will read it back.
///
/// `after_point` is set when the caption trailer ends with an abbreviation
/// period, which must not run into the cutter point.
fn write_cutters<W: Write>(
    out: &mut W,
    cutters: &[Cutter],
    style: &FormatStyle,
    after_point: bool,
) -> fmt::Result {
    let mut needs_period = true;
    let mut needs_separator = style.split_sections || after_point;
    for cutter in cutters {
        if needs_period {
            if needs_separator {
                out.write_char(style.separator)?;
            }
            out.write_char('.')?;
        } else if needs_separator {
            out.write_char(style.separator)?;
        }

        write!(out, "{}{}{}", cutter.letter, cutter.number, cutter.mark)?;
        if let Some(dateord) = &cutter.dateord {
            write!(out, "{}{}", style.separator, dateord)?;
        }

        let has_mark = !cutter.mark.is_empty();
        let has_date = cutter.dateord.is_some();
        needs_separator = style.split_cutters
            || has_mark
            || cutter.dateord.as_ref().is_some_and(ends_with_point)
            || (has_date && (!style.extra_cutpoint || style.split_sections));
        needs_period = has_date && style.extra_cutpoint;
    }
    Ok(())
}

/// Whether the rendered date or ordinal ends with a period, as `2nd.` does.
fn ends_with_point(dateord: &DateOrOrdinal) -> bool {
    matches!(dateord, DateOrOrdinal::Ordinal(ordinal) if ordinal.suffix.ends_with('.'))
}

fn write_special<W: Write>(out: &mut W, segment: &Special, style: &FormatStyle) -> fmt::Result {
    write!(out, "{}{}", style.separator, segment)
}

/// Render `number` as a `String`.
#[must_use]
pub fn format_call_number(number: &CallNumber, style: &FormatStyle) -> String {
    let mut text = String::with_capacity(formatted_len(number, style));
    // Writing to a String cannot fail.
    let _ = write_call_number(&mut text, number, style);
    text
}

/// Byte length of `number` rendered in the given style.
#[must_use]
pub fn formatted_len(number: &CallNumber, style: &FormatStyle) -> usize {
    let mut counter = LengthCounter(0);
    let _ = write_call_number(&mut counter, number, style);
    counter.0
}

/// Render `number` into `buf`, returning the length of the full rendering.
///
/// Bytes that do not fit are dropped. When the return value is larger than
/// `buf.len()` the output was truncated; an empty `buf` only measures.
pub fn format_into(number: &CallNumber, style: &FormatStyle, buf: &mut [u8]) -> usize {
    let mut writer = SliceWriter {
        buf,
        written: 0,
        needed: 0,
    };
    let _ = write_call_number(&mut writer, number, style);
    writer.needed
}

/// Sink that only counts bytes.
struct LengthCounter(usize);

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Sink that fills a byte slice and keeps counting once it is full.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    needed: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.written;
        let take = s.len().min(room);
        self.buf[self.written..self.written + take].copy_from_slice(&s.as_bytes()[..take]);
        self.written += take;
        self.needed += s.len();
        Ok(())
    }
}
