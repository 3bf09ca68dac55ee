//! Fixed-capacity ASCII strings for call number fields.
//!
//! Every text field of a call number has a small upper bound on its length
//! (three class letters, four integer digits, sixteen decimal digits, ...).
//! [`BoundedStr`] stores such a field inline, without allocating, and an
//! empty value means the field is absent.

use crate::error::CallNumberError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// An inline ASCII string holding at most `N` characters.
///
/// Bytes past the current length are always zero, so the derived equality
/// and hashing agree with string equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedStr<N> {
    /// The maximum number of characters.
    pub const CAPACITY: usize = N;

    /// Create an empty value.
    #[must_use]
    pub const fn new() -> Self {
        BoundedStr {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Create a value from `s`, or `None` when `s` is longer than `N` or not ASCII.
    #[must_use]
    pub fn try_from_str(s: &str) -> Option<Self> {
        if s.len() > N || !s.is_ascii() {
            return None;
        }
        let mut value = Self::new();
        value.bytes[..s.len()].copy_from_slice(s.as_bytes());
        value.len = s.len();
        Some(value)
    }

    /// Append one ASCII character.
    ///
    /// Returns `false`, leaving the value unchanged, when the value is full or
    /// `c` is not ASCII.
    pub fn push(&mut self, c: u8) -> bool {
        if self.is_full() || !c.is_ascii() {
            return false;
        }
        self.bytes[self.len] = c;
        self.len += 1;
        true
    }

    /// The text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// The text as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of characters held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the field is absent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether no more characters fit.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// The decimal value of the digits in this field, `0` when empty.
    ///
    /// Non-digit characters are ignored. Values beyond `u64::MAX` saturate,
    /// which cannot happen for the sixteen-digit fields of a call number.
    #[must_use]
    pub fn to_number(&self) -> u64 {
        self.as_bytes()
            .iter()
            .filter(|c| c.is_ascii_digit())
            .fold(0u64, |acc, c| {
                acc.saturating_mul(10).saturating_add(u64::from(c - b'0'))
            })
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for BoundedStr<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedStr<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> TryFrom<&str> for BoundedStr<N> {
    type Error = CallNumberError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(s).ok_or_else(|| {
            CallNumberError::InvalidStructure(format!(
                "'{s}' does not fit in {N} ASCII characters"
            ))
        })
    }
}

impl<const N: usize> Serialize for BoundedStr<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedStr<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}
