// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Legacy traditional Chinese encodings.

use std::mem;

use crate::error::MalformedInput;
use crate::index::big5;
use crate::types::*;
use crate::util::as_char;

/**
 * A decoder for Big5 as defined by the Encoding Standard,
 * that is Big5 with the Hong Kong Supplementary Character Set and other common extensions.
 *
 * This is a traditional Chinese encoding spanning the region `[81-FE] [40-7E A1-FE]`.
 * Four pointers decode to a base letter followed by a combining mark.
 */
#[derive(Clone, Copy, Default)]
pub struct Big5Decoder {
    lead: u8,
}

impl Big5Decoder {
    pub fn new() -> Big5Decoder {
        Big5Decoder { lead: 0 }
    }
}

/// Returns the pointer of a lead byte 0x81-0xFE and a trail byte,
/// or `None` if the trail byte is out of range.
pub fn pointer(lead: u8, trail: u8) -> Option<usize> {
    debug_assert!((0x81..=0xfe).contains(&lead));
    let lead = lead as usize;
    let trail = trail as usize;
    match trail {
        0x40..=0x7e | 0xa1..=0xfe => {
            let trailoffset = if trail < 0x7f {0x40} else {0x62};
            Some((lead - 0x81) * 157 + trail - trailoffset)
        }
        _ => None,
    }
}

/// Writes the decoded pair and returns true, or returns false if the pair is unassigned.
fn write_pair(lead: u8, trail: u8, output: &mut dyn StringWriter) -> bool {
    match pointer(lead, trail) {
        Some(1133) => output.write_str("\u{ca}\u{304}"),
        Some(1135) => output.write_str("\u{ca}\u{30c}"),
        Some(1164) => output.write_str("\u{ea}\u{304}"),
        Some(1166) => output.write_str("\u{ea}\u{30c}"),
        Some(pointer) => match big5::forward(pointer) {
            0 => return false,
            ch => output.write_char(as_char(ch)),
        },
        None => return false,
    }
    true
}

impl RawDecoder for Big5Decoder {
    fn is_ascii_compatible(&self) -> bool { true }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        output.writer_hint(input.len());

        let mut processed = 0;
        for (i, &b) in input.iter().enumerate() {
            if self.lead == 0 {
                match b {
                    0x00..=0x7f => {
                        output.write_char(b as char);
                        processed = i + 1;
                    }
                    0x81..=0xfe => self.lead = b,
                    _ => {
                        return (i, Some(MalformedInput { upto: i + 1, cause: "invalid sequence" }));
                    }
                }
            } else {
                let lead = mem::replace(&mut self.lead, 0);
                if !write_pair(lead, b, output) {
                    // an ASCII trail byte is decoded again on its own
                    let upto = if b <= 0x7f {i} else {i + 1};
                    return (processed, Some(MalformedInput { upto, cause: "invalid sequence" }));
                }
                processed = i + 1;
            }
        }
        (processed, None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<MalformedInput> {
        if mem::replace(&mut self.lead, 0) != 0 {
            Some(MalformedInput { upto: 0, cause: "incomplete sequence" })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod big5_tests {
    use super::{pointer, Big5Decoder};
    use crate::testutils::decode_bytewise;

    #[test]
    fn test_pointer() {
        assert_eq!(pointer(0x81, 0x40), Some(0));
        assert_eq!(pointer(0x87, 0x40), Some(942));
        assert_eq!(pointer(0x88, 0x62), Some(1133));
        assert_eq!(pointer(0xfe, 0xfe), Some(19781));
        assert_eq!(pointer(0xa4, 0x7e), Some(5495 + 62));
        assert_eq!(pointer(0xa4, 0xa1), Some(5495 + 63));
        assert_eq!(pointer(0xfe, 0x39), None);
        assert_eq!(pointer(0xfe, 0x7f), None);
        assert_eq!(pointer(0xfe, 0xa0), None);
        assert_eq!(pointer(0xfe, 0xff), None);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = Big5Decoder::new();
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0x42, 0x43], [], "BC");
        assert_feed_ok!(d, [], [], "");
        assert_feed_ok!(d, [0xa4, 0xa4, 0xb5, 0xd8, 0xa5, 0xc1, 0xb0, 0xea], [],
                        "\u{4e2d}\u{83ef}\u{6c11}\u{570b}");
        assert_feed_ok!(d, [0x31, 0xa3, 0xe1, 0x2f, 0x6d], [], "1\u{20ac}/m");
        assert_feed_ok!(d, [0xf9, 0xfe], [], "\u{ffed}");
        assert_feed_ok!(d, [0x87, 0x7e], [], "\u{3eec}"); // HKSCS-2008 addition
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_edge_cases() {
        let mut d = Big5Decoder::new();
        assert_feed_ok!(d, [0x61, 0x62], [], "ab");
        assert_feed_ok!(d, [0x87, 0x40], [], "\u{43f0}");
        assert_feed_ok!(d, [0xfe, 0xfe], [], "\u{79d4}");
        assert_feed_ok!(d, [0xfe, 0xfd], [], "\u{2910d}");
        assert_feed_ok!(d, [0x88, 0x62], [], "\u{ca}\u{304}");
        assert_feed_ok!(d, [0x61, 0x87, 0x40, 0x62], [], "a\u{43f0}b");
        assert_feed_ok!(d, [0x61, 0xfe, 0xfe, 0x62], [], "a\u{79d4}b");
        assert_feed_ok!(d, [0x61, 0xfe, 0xfd, 0x62], [], "a\u{2910d}b");
        assert_feed_ok!(d, [0x61, 0x88, 0x62, 0x62], [], "a\u{ca}\u{304}b");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_two_code_points() {
        let mut d = Big5Decoder::new();
        assert_feed_ok!(d, [0x88, 0x62, 0x88, 0x64], [], "\u{ca}\u{304}\u{ca}\u{30c}");
        assert_feed_ok!(d, [0x88, 0xa3, 0x88, 0xa5], [], "\u{ea}\u{304}\u{ea}\u{30c}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid_lead() {
        let mut d = Big5Decoder::new();
        assert_feed_err!(d, [], [0x80], [], "");
        assert_feed_err!(d, [0x41], [0xff], [0x42], "A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid_trail() {
        // an ASCII trail byte is left for the next feed
        let mut d = Big5Decoder::new();
        assert_feed_err!(d, [], [0xfe], [0x39], "");
        assert_feed_ok!(d, [0x39], [], "9");
        // a non-ASCII trail byte is consumed along with the lead
        assert_feed_err!(d, [], [0xf0], [0x30, 0x30], "");
        assert_feed_err!(d, [], [0xf0, 0x80], [0x30], "");
        assert_feed_err!(d, [0x41], [0xf0, 0xff], [], "A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_unassigned_pointer() {
        // pointer 0 (0x81 0x40) is unassigned
        let mut d = Big5Decoder::new();
        assert_feed_err!(d, [], [0x81], [0x40], "");
        assert_feed_ok!(d, [0x40], [], "@");
        assert_feed_err!(d, [], [0x81, 0xa1], [0x41], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_split_pair() {
        let mut d = Big5Decoder::new();
        assert_feed_ok!(d, [0x41], [0xa4], "A");
        assert_feed_ok!(d, [0x40], [], "\u{4e00}");
        assert_feed_ok!(d, [], [0xfe], "");
        assert_feed_err!(d, [], [], [0x39], "");
        assert_feed_ok!(d, [0x39], [], "9");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_feed_after_finish() {
        let mut d = Big5Decoder::new();
        assert_feed_ok!(d, [0xa4, 0x40], [0xa4], "\u{4e00}");
        assert_finish_err!(d, "");
        assert_feed_ok!(d, [0xa4, 0x40], [], "\u{4e00}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_bytewise() {
        let mut d = Big5Decoder::new();
        assert_eq!(decode_bytewise(&mut d, &[0x61, 0xfe, 0xfd, 0x62, 0x88, 0x62]),
                   "a\u{2910d}b\u{ca}\u{304}");
        assert_eq!(decode_bytewise(&mut d, &[0xfe, 0x39]), "\u{fffd}9");
        assert_eq!(decode_bytewise(&mut d, &[0x61, 0xa4]), "a\u{fffd}");
        assert_eq!(decode_bytewise(&mut d, &[0x81, 0x40, 0x80, 0x41]), "\u{fffd}@\u{fffd}A");
    }
}
