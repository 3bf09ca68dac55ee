#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
//! # LC Call Numbers
//!
//! Parse, format and shelve Library of Congress call numbers such as
//! `QA76.76 .E5 C45 2007e`.
//!
//! ## Quick Start
//!
//! ```
//! use lc_callnum::{CallNumberOrdering, FormatStyle, LcCallNumber};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let class: LcCallNumber = "QA76".parse()?;
//! let book = LcCallNumber::parse("QA76.76 .E5 C45 2007e")?;
//!
//! // Shelving order and subject inclusion
//! assert!(class < book);
//! assert!(class.includes(&book));
//! assert_eq!(book.compare_detailed(&class), CallNumberOrdering::Descending);
//!
//! // Rendering
//! assert_eq!(book.format(&FormatStyle::pocket()), "QA 76.76 .E5 C45 2007e");
//! assert_eq!(book.formatted_len(&FormatStyle::pocket()), 22);
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting the Structure
//!
//! ```
//! use lc_callnum::{CallNumber, Special};
//!
//! let number: CallNumber = "QA76.76 .E5 C45 2007e".parse().unwrap();
//! let caption = number.caption();
//! assert_eq!((caption.letters.as_str(), caption.integer.as_str()), ("QA", "76"));
//! assert_eq!(caption.decimal, "76");
//! assert_eq!(number.cutters()[1].to_string(), "C45");
//! assert!(matches!(number.specials()[0], Special::Date(date) if date.mark == "e"));
//! ```
//!
//! ## Modules
//!
//! - [`chars`] — Character classes recognized by the lexer
//! - [`bounded`] — Fixed-capacity strings for call number fields
//! - [`cursor`] — Backtrackable lexer
//! - [`parser`] — Call number grammar
//! - [`call_number`] — Parsed call number structure (`CallNumber`, `Caption`, `Cutter`, ...)
//! - [`format`] — Rendering and length measurement
//! - [`compare`] — Four-valued shelving comparison
//! - [`lc_call_number`] — The `LcCallNumber` entry point
//! - [`config`] — Parse options and format styles
//! - [`error`] — Error types and result type

pub mod bounded;
/// Parsed call number structure (`CallNumber`, `Caption`, `Cutter`, ...)
pub mod call_number;
pub mod chars;
pub mod compare;
pub mod config;
pub mod cursor;
pub mod error;
pub mod format;
pub mod lc_call_number;
pub mod parser;

pub use bounded::BoundedStr;
pub use call_number::{
    CallNumber, Caption, Cutter, Date, DateOrOrdinal, DateSpan, Ordinal, Special, Supplement,
    Volume,
};
pub use compare::{compare_call_numbers, compare_text, CallNumberOrdering};
pub use config::{FormatStyle, ParseOptions};
pub use error::{CallNumberError, Result};
pub use lc_call_number::LcCallNumber;
