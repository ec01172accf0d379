use std::{
    hash::{BuildHasher, RandomState},
    string::String,
    vec::Vec,
};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::TString;

/// Property: constructing from any byte sequence and reading it back yields
/// exactly that sequence, with the terminator one past it.
#[quickcheck]
fn round_trip(content: Vec<u8>) -> bool {
    let s = TString::from(&content[..]);
    s.as_bytes() == &content[..]
        && s.len() == content.len()
        && *s.as_terminated_bytes().last().unwrap() == 0
}

/// Property: appending piecewise equals appending the concatenation.
#[quickcheck]
fn append_is_associative(a: Vec<u8>, b: Vec<u8>, c: Vec<u8>) -> bool {
    let mut piecewise = TString::from(&a[..]);
    piecewise.append(&b[..]);
    piecewise.append(&c[..]);

    let mut joined = TString::from(&a[..]);
    joined.append(TString::from(&b[..]) + &c[..]);

    piecewise == joined
}

/// Property: mutating a copy never affects the original, and vice versa.
#[quickcheck]
fn copies_are_independent(content: Vec<u8>, extra: u8) -> bool {
    let original = TString::from(&content[..]);
    let mut copy = original.clone();
    copy.push(extra);
    let copy_intact = copy.as_bytes()[..content.len()] == content[..] && copy.len() == content.len() + 1;

    let mut original = original;
    original.push(extra.wrapping_add(1));
    copy_intact && original.len() == content.len() + 1 && copy != original
}

/// Property: `find` agrees with a naive windowed scan, including the empty
/// and too-long needle rules.
#[quickcheck]
fn find_matches_a_naive_scan(haystack: Vec<u8>, needle: Vec<u8>) -> bool {
    let s = TString::from(&haystack[..]);
    let expected = if needle.is_empty() {
        Some(0)
    } else if needle.len() > haystack.len() {
        None
    } else {
        haystack.windows(needle.len()).position(|w| w == needle)
    };
    s.find(&needle[..]) == expected
}

/// Property: `split` yields exactly the non-empty runs between delimiters,
/// in order.
#[quickcheck]
fn split_drops_exactly_the_empty_runs(content: Vec<u8>, delimiter: u8) -> bool {
    let s = TString::from(&content[..]);
    let expected: Vec<&[u8]> = content
        .split(|&b| b == delimiter)
        .filter(|run| !run.is_empty())
        .collect();
    let parts = s.split(delimiter);
    parts.len() == expected.len()
        && parts
            .iter()
            .zip(expected)
            .all(|(part, want)| part.as_bytes() == want)
}

/// Property: equality and hashing agree with the equivalent `str` value.
#[quickcheck]
fn str_equality_and_hash_parity(text: String) -> bool {
    let s = TString::from(&*text);
    let state = RandomState::new();
    s == *text && state.hash_one(&s) == state.hash_one(&*text)
}

/// Property: across any sequence of appends the capacity never shrinks and,
/// absent an explicit over-reservation, stays the smallest power of two that
/// fits the content plus its terminator.
#[test]
fn capacity_stays_minimal_and_monotonic() {
    fn prop(chunks: Vec<Vec<u8>>) -> bool {
        let mut s = TString::new();
        let mut last_capacity = 0;
        for chunk in chunks {
            s.append(&chunk[..]);
            let capacity = s.capacity();
            if capacity < last_capacity {
                return false;
            }
            // A never-written string owns nothing; after the first write the
            // block is exactly the minimal power of two.
            let minimal = if capacity == 0 {
                s.len() == 0
            } else {
                capacity == (s.len() + 1).next_power_of_two()
            };
            if !minimal {
                return false;
            }
            last_capacity = capacity;
        }
        true
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<Vec<u8>>) -> bool);
}

/// Property: `substr` with any length clamps to `substr_from`, and every
/// in-range start position succeeds while `len + 1` fails.
#[test]
fn substr_clamps_and_range_checks() {
    fn prop(content: Vec<u8>, pos: usize, max_len: usize) -> bool {
        let s = TString::from(&content[..]);
        let pos = pos % (content.len() + 2);
        match (s.substr(pos, max_len), s.substr_from(pos)) {
            (Ok(clamped), Ok(tail)) => {
                pos <= s.len()
                    && tail.as_bytes() == &content[pos..]
                    && clamped.as_bytes() == &content[pos..pos.saturating_add(max_len).min(content.len())]
            }
            (Err(a), Err(b)) => pos == s.len() + 1 && a == b && a.pos == pos,
            _ => false,
        }
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>, usize, usize) -> bool);
}
