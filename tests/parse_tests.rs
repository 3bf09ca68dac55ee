//! Parsing tests against real-world call numbers.

mod common;

use common::structure;
use lc_callnum::{
    CallNumber, CallNumberError, Cutter, DateOrOrdinal, LcCallNumber, ParseOptions, Special,
};

#[test]
fn test_parse_full_call_number() {
    let number = structure("QA76.76 .E5 C45 2007e");
    let caption = number.caption();
    assert_eq!(caption.letters, "QA");
    assert_eq!(caption.integer, "76");
    assert_eq!(caption.decimal, "76");
    assert!(caption.dateord.is_none());

    let cutters: Vec<_> = number
        .cutters()
        .iter()
        .map(|c| (c.letter, c.number.as_str()))
        .collect();
    assert_eq!(cutters, [('E', "5"), ('C', "45")]);
    assert!(number.cutters()[1].dateord.is_none());

    match number.specials() {
        [Special::Date(date)] => {
            assert_eq!(date.year, "2007");
            assert_eq!(date.mark, "e");
            assert!(date.span.is_none());
        }
        other => panic!("expected a single date, got {other:?}"),
    }
    assert!(number.remainder().is_empty());
}

#[test]
fn test_digits_before_letters_fail() {
    assert_eq!(
        "76QA".parse::<CallNumber>(),
        Err(CallNumberError::MissingClass { offset: 0 })
    );
}

#[test]
fn test_common_shapes() {
    let cases: &[(&str, &str, usize, usize)] = &[
        // input, class, cutters, trailing segments
        ("KF", "KF", 0, 0),
        ("E169.1 .B6", "E169.1", 1, 0),
        ("HQ76.25 .S6 1990", "HQ76.25", 1, 1),
        ("PS3545.I345 Z4 1990", "PS3545", 2, 1),
        ("BX1751.2 .A1 1990-1995", "BX1751.2", 1, 1),
        ("Z675.U5 L4 1990 v. 2", "Z675", 2, 2),
        ("QA76.73.J38 S53 2001 2nd ed.", "QA76.73", 2, 3),
    ];
    for &(input, class, cutters, segments) in cases {
        let number = structure(input);
        let caption = number.caption();
        let mut rendered = format!("{}{}", caption.letters, caption.integer);
        if !caption.decimal.is_empty() {
            rendered = format!("{rendered}.{}", caption.decimal);
        }
        assert_eq!(rendered, class, "class of {input}");
        assert_eq!(number.cutters().len(), cutters, "cutters of {input}");
        assert_eq!(number.segments().count(), segments, "segments of {input}");
    }
}

#[test]
fn test_caption_trailers() {
    let number = structure("KF4558 1787 .A2");
    assert!(matches!(
        number.caption().dateord,
        Some(DateOrOrdinal::Date(date)) if date.year == "1787"
    ));

    let number = structure("JK1 4th .B5");
    match number.caption().dateord {
        Some(DateOrOrdinal::Ordinal(ordinal)) => {
            assert_eq!(ordinal.number, "4");
            assert_eq!(ordinal.suffix, "th");
        }
        other => panic!("expected an ordinal, got {other:?}"),
    }
}

#[test]
fn test_dated_cutter() {
    let number = structure("G3804.N4 1999 .A5");
    assert!(number.caption().dateord.is_none());
    let first: &Cutter = &number.cutters()[0];
    assert_eq!(first.key(), "N4");
    assert!(matches!(first.dateord, Some(DateOrOrdinal::Date(date)) if date.year == "1999"));
    assert_eq!(number.cutters()[1].key(), "A5");
}

#[test]
fn test_remainder_collects_everything_after_two_specials() {
    let number = structure("QA76 .E5 2007 2nd v. 3 Suppl. 1, etc. Index");
    assert_eq!(number.specials().len(), 2);
    let remainder: Vec<String> = number.remainder().iter().map(ToString::to_string).collect();
    assert_eq!(remainder, ["v. 3", "Suppl. 1, etc.", "Index"]);
}

#[test]
fn test_whitespace_tolerance() {
    let tight = structure("QA76.76.E5C45 2007");
    let loose = structure("  QA 76.76   .E5  C45   2007  ");
    assert_eq!(tight, loose);
}

#[test]
fn test_subfield_delimiter_ends_input() {
    let number = structure("QA76.76 .E5\u{1f}bC45");
    assert_eq!(number.cutters().len(), 1);
    let number = structure("QA76\u{1e}");
    assert_eq!(number.caption().integer, "76");
}

#[test]
fn test_trailing_input_reports_offset() {
    let err = "QA76.76 .E5 \u{2014}".parse::<CallNumber>().unwrap_err();
    assert_eq!(
        err,
        CallNumberError::TrailingInput {
            offset: 12,
            remaining: "\u{2014}".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Unexpected trailing input at offset 12: '\u{2014}'"
    );
}

#[test]
fn test_auto_uppercase_option() {
    assert_eq!(
        LcCallNumber::parse("qa76.76 .e5").unwrap().to_string(),
        "QA76.76 .E5"
    );
    let strict = ParseOptions::new().with_auto_uppercase(false);
    assert_eq!(
        LcCallNumber::parse_with("qa76.76 .e5", &strict),
        Err(CallNumberError::MissingClass { offset: 0 })
    );
    let number = LcCallNumber::parse_with("QA76.76 .E5", &strict).unwrap();
    assert_eq!(number.call_number().cutters()[0].key(), "E5");

    // Without folding, a lowercase cutter is not a cutter at all
    let number = LcCallNumber::parse_with("QA76.76 .e5", &strict).unwrap();
    assert!(number.call_number().cutters().is_empty());
    assert!(matches!(number.call_number().specials(), [Special::Word(word)] if *word == ".e5"));
}

#[test]
fn test_empty_inputs() {
    for input in ["", " ", "\t\n", "\u{0}"] {
        assert_eq!(
            LcCallNumber::parse(input),
            Err(CallNumberError::Empty),
            "{input:?}"
        );
    }
}
