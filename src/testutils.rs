// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing.
//!
//! The `assert_feed_*` macros take the input split into parts:
//! bytes that are processed, the problematic bytes and the remaining bytes
//! (or the unprocessed bytes when no error is expected), and the expected output.

use crate::error::MalformedInput;
use crate::types::RawDecoder;

/// Feeds `input` to the decoder and collects the output.
pub fn test_feed<D: RawDecoder + ?Sized>(decoder: &mut D, input: &[u8])
                                         -> (usize, Option<MalformedInput>, String) {
    let mut buf = String::new();
    let (nprocessed, err) = decoder.raw_feed(input, &mut buf);
    (nprocessed, err, buf)
}

/// Finishes the decoder and collects the output.
pub fn test_finish<D: RawDecoder + ?Sized>(decoder: &mut D) -> (Option<MalformedInput>, String) {
    let mut buf = String::new();
    let err = decoder.raw_finish(&mut buf);
    (err, buf)
}

macro_rules! assert_feed_ok {
    ($this:expr, $processed:expr, $unprocessed:expr, $output:expr) => ({
        let processed: &[u8] = &$processed;
        let unprocessed: &[u8] = &$unprocessed;
        let output: &str = $output;
        let input = [processed, unprocessed].concat();
        let (nprocessed, err, buf) = $crate::testutils::test_feed(&mut $this, &input);
        let upto = err.map(|e| e.upto);
        assert!(processed.len() == nprocessed && None == upto,
                "raw_feed should return {:?}, but instead returned {:?}",
                (processed.len(), None::<usize>), (nprocessed, upto));
        assert!(output == buf,
                "raw_feed should push {:?}, but instead pushed {:?}", output, buf);
    })
}

macro_rules! assert_feed_err {
    ($this:expr, $processed:expr, $problem:expr, $remaining:expr, $output:expr) => ({
        let processed: &[u8] = &$processed;
        let problem: &[u8] = &$problem;
        let remaining: &[u8] = &$remaining;
        let output: &str = $output;
        let input = [processed, problem, remaining].concat();
        let (nprocessed, err, buf) = $crate::testutils::test_feed(&mut $this, &input);
        let upto = err.map(|e| e.upto);
        assert!(processed.len() == nprocessed && Some(processed.len() + problem.len()) == upto,
                "raw_feed should return {:?}, but instead returned {:?}",
                (processed.len(), Some(processed.len() + problem.len())), (nprocessed, upto));
        assert!(output == buf,
                "raw_feed should push {:?}, but instead pushed {:?}", output, buf);
    })
}

macro_rules! assert_finish_ok {
    ($this:expr, $output:expr) => ({
        let output: &str = $output;
        let (err, buf) = $crate::testutils::test_finish(&mut $this);
        let upto = err.map(|e| e.upto);
        assert!(None == upto,
                "raw_finish should return {:?}, but instead returned {:?}", None::<usize>, upto);
        assert!(output == buf,
                "raw_finish should push {:?}, but instead pushed {:?}", output, buf);
    })
}

macro_rules! assert_finish_err {
    ($this:expr, $output:expr) => ({
        let output: &str = $output;
        let (err, buf) = $crate::testutils::test_finish(&mut $this);
        let upto = err.map(|e| e.upto);
        assert!(Some(0) == upto,
                "raw_finish should return {:?}, but instead returned {:?}", Some(0), upto);
        assert!(output == buf,
                "raw_finish should push {:?}, but instead pushed {:?}", output, buf);
    })
}

/// Decodes `input` one byte at a time, replacing each error with U+FFFD.
pub fn decode_bytewise<D: RawDecoder + ?Sized>(decoder: &mut D, input: &[u8]) -> String {
    let mut buf = String::new();
    let mut pending: Vec<u8> = Vec::new();
    for &b in input {
        pending.push(b);
        loop {
            let (_, err) = decoder.raw_feed(&pending, &mut buf);
            match err {
                Some(err) => {
                    buf.push('\u{fffd}');
                    pending.drain(..err.upto);
                    if pending.is_empty() {
                        break;
                    }
                }
                None => {
                    pending.clear();
                    break;
                }
            }
        }
    }
    if decoder.raw_finish(&mut buf).is_some() {
        buf.push('\u{fffd}');
    }
    buf
}
