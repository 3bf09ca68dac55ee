//! Parsing and sorting from many threads at once.

mod common;

use common::SHELF;
use lc_callnum::{FormatStyle, LcCallNumber};
use rayon::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_thread_safe() {
    assert_send_sync::<LcCallNumber>();
    assert_send_sync::<lc_callnum::CallNumber>();
    assert_send_sync::<FormatStyle>();
}

#[test]
fn test_parallel_parse_matches_sequential() {
    let inputs: Vec<&str> = SHELF.iter().copied().cycle().take(SHELF.len() * 50).collect();

    let sequential: Vec<LcCallNumber> = inputs.iter().map(|s| s.parse().unwrap()).collect();
    let parallel: Vec<LcCallNumber> = inputs.par_iter().map(|s| s.parse().unwrap()).collect();

    assert_eq!(parallel.len(), sequential.len());
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.call_number(), s.call_number());
    }
}

#[test]
fn test_parallel_sort() {
    let mut numbers: Vec<LcCallNumber> = SHELF
        .par_iter()
        .rev()
        .map(|s| LcCallNumber::parse(s).unwrap())
        .collect();
    numbers.par_sort();

    let labels: Vec<String> = numbers
        .par_iter()
        .map(|n| n.format(&FormatStyle::canonical()))
        .collect();
    assert_eq!(labels, SHELF);
}
