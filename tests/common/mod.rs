//! Common test helpers and utilities shared across test suite.

#![allow(dead_code)]

use lc_callnum::{CallNumber, LcCallNumber};
use proptest::prelude::*;

/// Parses a call number that the test expects to be valid.
pub fn lc(input: &str) -> LcCallNumber {
    LcCallNumber::parse(input).unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"))
}

/// Parses the structure of a call number that the test expects to be valid.
pub fn structure(input: &str) -> CallNumber {
    input
        .parse()
        .unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"))
}

/// A shelf of call numbers in correct shelving order.
///
/// Covers class letters, numeric class numbers, decimals, cutters, dates,
/// volumes and supplements.
pub const SHELF: &[&str] = &[
    "BF21 .A1",
    "E169.1 .B6",
    "HQ76",
    "HQ76.25 .S6 1990",
    "P35",
    "P112",
    "PR6019 .O9 U4 1986",
    "Q",
    "QA",
    "QA76",
    "QA76.76",
    "QA76.76 .C65 A37 1986",
    "QA76.76 .E5",
    "QA76.76 .E5 C45 2007",
    "QA76.76 .E5 C45 2007e",
    "QA76.76 .E5 C45 2007e v. 2",
    "QA76.76 .E5 C45 2007e v. 10",
    "QA76.9",
    "QA76.9 .D3 1999",
    "QA77",
];

/// Strategy for a date: a year, an optional `-` or `/` span, and an optional mark.
pub fn date_text() -> impl Strategy<Value = String> {
    "(19|20)[0-9]{2}([-/]((19|20)[0-9]{2}|[0-9]{2}))?[a-z]{0,2}"
}

/// Strategy for an ordinal, sometimes abbreviated with a trailing period.
pub fn ordinal_text() -> impl Strategy<Value = String> {
    "[1-9][0-9]?(st|nd|rd|th|d)\\.?"
}

/// Strategy for the date or ordinal after a class number or a cutter.
pub fn dateord_text() -> impl Strategy<Value = String> {
    prop_oneof![date_text(), ordinal_text()]
}

/// Strategy for well-formed call numbers.
///
/// Generated strings put the caption, its trailer, up to three cutters
/// (with work marks and dates between them) and trailing segments in
/// grammar order, so every one of them parses. A caption without a class
/// number is never directly followed by a bare number, which would read as
/// the class number.
pub fn call_number_text() -> impl Strategy<Value = String> {
    let letters = "[A-Z]{1,3}";
    let class_number = proptest::option::of((
        "[1-9][0-9]{0,3}",
        proptest::option::of("[0-9]{1,6}"),
        proptest::option::of(dateord_text()),
    ));
    let cutter = (
        "[A-Z][0-9]{1,4}",
        "[a-z]{0,2}",
        proptest::option::of(dateord_text()),
        any::<bool>(),
    );
    let cutters = proptest::collection::vec(cutter, 0..=3);
    let special = prop_oneof![
        date_text(),
        ordinal_text(),
        "v\\. [0-9]{1,3}(, etc\\.)?",
        "Suppl\\.( [0-9])?(, etc\\.)?",
        Just("Index".to_string()),
        "[a-z]{2,8}",
    ];
    let specials = proptest::collection::vec(special, 0..=4);

    (letters, class_number, cutters, specials).prop_map(
        |(letters, class_number, cutters, mut specials)| {
            let mut text = letters;
            match class_number {
                Some((integer, decimal, trailer)) => {
                    text.push_str(&integer);
                    if let Some(decimal) = decimal {
                        text.push('.');
                        text.push_str(&decimal);
                    }
                    if let Some(trailer) = trailer {
                        text.push(' ');
                        text.push_str(&trailer);
                    }
                }
                None if cutters.is_empty() => {
                    specials.retain(|segment| !segment.starts_with(|c: char| c.is_ascii_digit()));
                }
                None => {}
            }
            let last = cutters.len().saturating_sub(1);
            for (index, (body, mark, dateord, pointed)) in cutters.into_iter().enumerate() {
                text.push_str(if index == 0 || pointed { " ." } else { " " });
                text.push_str(&body);
                text.push_str(&mark);
                if let Some(dateord) = dateord.filter(|_| index < last) {
                    text.push(' ');
                    text.push_str(&dateord);
                }
            }
            for segment in specials {
                text.push(' ');
                text.push_str(&segment);
            }
            text
        },
    )
}
