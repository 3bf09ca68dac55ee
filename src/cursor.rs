//! Backtrackable lexer over call number text.
//!
//! A [`Cursor`] is a small `Copy` value: a view of the input plus a byte
//! offset. Every scanner takes the cursor by value and hands back an advanced
//! copy on success, so a production backtracks by simply going on with the
//! cursor it saved before trying an alternative. A scanner never looks past
//! the capacity of its destination buffer and never allocates.

use crate::bounded::BoundedStr;
use crate::chars::{
    is_alpha, is_close_angle, is_colon, is_comma, is_dash, is_open_angle, is_point, is_slash,
    is_space, is_stop, is_upper, CharPredicate,
};

/// A position within call number input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
    fold_case: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    ///
    /// With `fold_case`, scanners for uppercase letters also accept lowercase
    /// letters and copy them upper-cased.
    #[must_use]
    pub fn new(input: &'a str, fold_case: bool) -> Self {
        Cursor {
            input: input.as_bytes(),
            offset: 0,
            fold_case,
        }
    }

    /// Byte offset from the start of the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Whether uppercase scanners fold lowercase input.
    #[must_use]
    pub const fn folds_case(&self) -> bool {
        self.fold_case
    }

    /// The unconsumed input, up to the end or the first stop character.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        let rest = self.input.get(self.offset..).unwrap_or_default();
        let end = rest.iter().position(|c| is_stop(*c)).unwrap_or(rest.len());
        &rest[..end]
    }

    /// Whether the input is exhausted or the next character is a stop character.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().map_or(true, is_stop)
    }

    /// The next character, if any.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Whether the next character satisfies `pred`.
    #[must_use]
    pub fn peek_is(&self, pred: CharPredicate) -> bool {
        self.peek().is_some_and(pred)
    }

    /// Whether the character just before the cursor satisfies `pred`.
    #[must_use]
    pub fn follows(&self, pred: CharPredicate) -> bool {
        self.offset
            .checked_sub(1)
            .and_then(|index| self.input.get(index))
            .is_some_and(|c| pred(*c))
    }

    /// Whether the cursor sits on a word break: end of input, whitespace, or a stop character.
    ///
    /// Used after a token to make sure it is not immediately followed by more
    /// content of the same kind.
    #[must_use]
    pub fn peek_break(&self) -> bool {
        self.peek().map_or(true, |c| is_space(c) || is_stop(c))
    }

    /// Whether the cursor sits on a cutter point: a `.` directly followed by a letter.
    #[must_use]
    pub fn peek_cutpoint(&self) -> bool {
        self.peek_is(is_point) && self.input.get(self.offset + 1).is_some_and(|c| is_alpha(*c))
    }

    fn advanced(self, step: usize) -> Self {
        Cursor {
            offset: self.offset + step,
            ..self
        }
    }

    /// Append a run of characters matching `pred` to `dst`.
    ///
    /// At most `limit` characters are taken, and never more than `dst` has
    /// room for. Each character passes through `map` before it is stored.
    /// Fails, leaving `dst` untouched, when nothing matches.
    pub fn scan_append<const N: usize>(
        self,
        dst: &mut BoundedStr<N>,
        pred: CharPredicate,
        map: fn(u8) -> u8,
        limit: usize,
    ) -> Option<Self> {
        let mut taken = 0;
        while taken < limit && !dst.is_full() {
            match self.input.get(self.offset + taken) {
                Some(&c) if pred(c) && dst.push(map(c)) => taken += 1,
                _ => break,
            }
        }
        if taken == 0 {
            return None;
        }
        let next = self.advanced(taken);
        if (taken == limit || dst.is_full()) && next.peek_is(pred) {
            log::trace!(
                "run truncated at {} characters, offset {}",
                taken,
                next.offset
            );
        }
        Some(next)
    }

    /// Scan a maximal run of characters matching `pred`, at most `N` of them.
    ///
    /// A run longer than `N` stops at the capacity; the rest is left for the
    /// next scanner. Fails when nothing matches.
    #[must_use]
    pub fn scan_run<const N: usize>(self, pred: CharPredicate) -> Option<(BoundedStr<N>, Self)> {
        let mut text = BoundedStr::new();
        let next = self.scan_append(&mut text, pred, identity, N)?;
        Some((text, next))
    }

    /// Scan a run of uppercase letters, at most `N` of them.
    ///
    /// In case-folding mode lowercase letters are accepted too and stored
    /// upper-cased.
    #[must_use]
    pub fn scan_upper<const N: usize>(self) -> Option<(BoundedStr<N>, Self)> {
        let mut text = BoundedStr::new();
        let next = self.scan_append(&mut text, self.upper_predicate(), upcase, N)?;
        Some((text, next))
    }

    /// Read one character matching `pred`.
    #[must_use]
    pub fn read_char(self, pred: CharPredicate) -> Option<(u8, Self)> {
        let c = self.peek().filter(|c| pred(*c))?;
        Some((c, self.advanced(1)))
    }

    /// Read one uppercase letter, folding lowercase in case-folding mode.
    #[must_use]
    pub fn read_upper(self) -> Option<(u8, Self)> {
        let (c, next) = self.read_char(self.upper_predicate())?;
        Some((c.to_ascii_uppercase(), next))
    }

    /// Skip zero or more whitespace characters.
    #[must_use]
    pub fn skip_space(self) -> Self {
        let count = self
            .input
            .get(self.offset..)
            .unwrap_or_default()
            .iter()
            .take_while(|c| is_space(**c))
            .count();
        self.advanced(count)
    }

    /// Read one or more whitespace characters.
    #[must_use]
    pub fn read_space(self) -> Option<Self> {
        let next = self.skip_space();
        (next.offset > self.offset).then_some(next)
    }

    /// Read a `.`.
    #[must_use]
    pub fn read_point(self) -> Option<Self> {
        self.read_char(is_point).map(|(_, next)| next)
    }

    /// Read a `-`.
    #[must_use]
    pub fn read_dash(self) -> Option<Self> {
        self.read_char(is_dash).map(|(_, next)| next)
    }

    /// Read a `/`.
    #[must_use]
    pub fn read_slash(self) -> Option<Self> {
        self.read_char(is_slash).map(|(_, next)| next)
    }

    /// Read a `,`.
    #[must_use]
    pub fn read_comma(self) -> Option<Self> {
        self.read_char(is_comma).map(|(_, next)| next)
    }

    /// Read a `:`.
    #[must_use]
    pub fn read_colon(self) -> Option<Self> {
        self.read_char(is_colon).map(|(_, next)| next)
    }

    /// Read a `<`.
    #[must_use]
    pub fn read_open_angle(self) -> Option<Self> {
        self.read_char(is_open_angle).map(|(_, next)| next)
    }

    /// Read a `>`.
    #[must_use]
    pub fn read_close_angle(self) -> Option<Self> {
        self.read_char(is_close_angle).map(|(_, next)| next)
    }

    /// Read the exact text `literal`.
    #[must_use]
    pub fn read_literal(self, literal: &str) -> Option<Self> {
        self.input
            .get(self.offset..)
            .is_some_and(|rest| rest.starts_with(literal.as_bytes()))
            .then(|| self.advanced(literal.len()))
    }

    /// Read `, etc.`: a comma, at least one space, and the word `etc.`.
    #[must_use]
    pub fn read_etc(self) -> Option<Self> {
        self.read_comma()?.read_space()?.read_literal("etc.")
    }

    fn upper_predicate(&self) -> CharPredicate {
        if self.fold_case {
            is_alpha
        } else {
            is_upper
        }
    }
}

fn identity(c: u8) -> u8 {
    c
}

fn upcase(c: u8) -> u8 {
    c.to_ascii_uppercase()
}
