#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tstring::TString;

/// One mutation or query against the string under test. The same operations
/// are replayed against a `Vec<u8>` model and the two must agree after every
/// step.
#[derive(Arbitrary, Debug)]
enum Op {
    Append(Vec<u8>),
    Push(u8),
    Clear,
    Reserve(u16),
    Take,
    Substr { pos: u16, max_len: u16 },
    Find(Vec<u8>),
    Split(u8),
}

fn check_invariants(s: &TString, model: &[u8]) {
    assert_eq!(s.as_bytes(), model);
    assert_eq!(s.len(), model.len());
    let capacity = s.capacity();
    if capacity == 0 {
        assert!(model.is_empty());
    } else {
        assert!(capacity.is_power_of_two());
        assert!(capacity >= model.len() + 1);
    }
    let terminated = s.as_terminated_bytes();
    assert_eq!(terminated.len(), model.len() + 1);
    assert_eq!(terminated[model.len()], 0);
}

fn run(ops: Vec<Op>) {
    let mut s = TString::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Append(bytes) => {
                s.append(&bytes[..]);
                model.extend_from_slice(&bytes);
            }
            Op::Push(byte) => {
                s.push(byte);
                model.push(byte);
            }
            Op::Clear => {
                s.clear();
                model.clear();
            }
            Op::Reserve(min_capacity) => {
                let before = s.capacity();
                s.reserve(usize::from(min_capacity));
                assert!(s.capacity() >= before);
                assert!(s.capacity() >= usize::from(min_capacity));
            }
            Op::Take => {
                let taken = s.take();
                assert_eq!(taken.as_bytes(), model);
                assert!(s.is_empty());
                assert_eq!(s.capacity(), 0);
                model.clear();
            }
            Op::Substr { pos, max_len } => {
                let (pos, max_len) = (usize::from(pos), usize::from(max_len));
                match s.substr(pos, max_len) {
                    Ok(part) => {
                        assert!(pos <= model.len());
                        let end = (pos + max_len).min(model.len());
                        assert_eq!(part.as_bytes(), &model[pos..end]);
                    }
                    Err(err) => {
                        assert!(pos > model.len());
                        assert_eq!(err.pos, pos);
                        assert_eq!(err.len, model.len());
                    }
                }
            }
            Op::Find(needle) => {
                let expected = if needle.is_empty() {
                    Some(0)
                } else if needle.len() > model.len() {
                    None
                } else {
                    model.windows(needle.len()).position(|w| w == needle)
                };
                assert_eq!(s.find(&needle[..]), expected);
            }
            Op::Split(delimiter) => {
                let parts = s.split(delimiter);
                let expected: Vec<&[u8]> = model
                    .split(|&b| b == delimiter)
                    .filter(|run| !run.is_empty())
                    .collect();
                assert_eq!(parts.len(), expected.len());
                for (part, want) in parts.iter().zip(expected) {
                    assert_eq!(part.as_bytes(), want);
                }
            }
        }
        check_invariants(&s, &model);
    }
}

fuzz_target!(|ops: Vec<Op>| run(ops));
