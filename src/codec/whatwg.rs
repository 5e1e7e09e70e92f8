// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Special encoding constructions required by the WHATWG Encoding standard.

use crate::error::MalformedInput;
use crate::types::*;

/// A decoder for the replacement encoding, used to solve a particular attack vector due to
/// mismatching server and client supports for encodings. It is rarely useful outside.
///
/// The first non-empty input is a single malformed sequence spanning all of it;
/// anything after that decodes to nothing.
#[derive(Clone, Copy, Default)]
pub struct ReplacementDecoder {
    emitted: bool,
}

impl ReplacementDecoder {
    pub fn new() -> ReplacementDecoder {
        ReplacementDecoder { emitted: false }
    }
}

impl RawDecoder for ReplacementDecoder {
    fn raw_feed(&mut self, input: &[u8], _output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        if input.is_empty() {
            return (0, None);
        }
        if self.emitted {
            return (input.len(), None);
        }
        self.emitted = true;
        (0, Some(MalformedInput { upto: input.len(), cause: "replacement encoding" }))
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<MalformedInput> {
        self.emitted = false;
        None
    }
}

/// Algorithmic mapping for `x-user-defined` encoding.
pub mod x_user_defined {
    #[inline]
    pub fn forward(code: u8) -> u32 {
        0xf700 | (code as u32)
    }
}

/// A decoder for x-user-defined.
/// Bytes 0x00 to 0x7F are ASCII and bytes 0x80 to 0xFF map to U+F780 to U+F7FF.
#[derive(Clone, Copy, Default)]
pub struct UserDefinedDecoder;

impl UserDefinedDecoder {
    pub fn new() -> UserDefinedDecoder { UserDefinedDecoder }
}

impl RawDecoder for UserDefinedDecoder {
    fn is_ascii_compatible(&self) -> bool { true }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        output.writer_hint(input.len());
        for &b in input {
            if b <= 0x7f {
                output.write_char(b as char);
            } else {
                output.write_char(crate::util::as_char(x_user_defined::forward(b)));
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<MalformedInput> {
        None
    }
}

#[cfg(test)]
mod replacement_tests {
    use super::ReplacementDecoder;

    #[test]
    fn test_decoder() {
        let mut d = ReplacementDecoder::new();
        assert_feed_ok!(d, [], [], "");
        assert_feed_err!(d, [], [0x41, 0x42], [], "");
        assert_feed_ok!(d, [0x43, 0xff], [], "");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_after_finish() {
        let mut d = ReplacementDecoder::new();
        assert_feed_err!(d, [], [0x41], [], "");
        assert_finish_ok!(d, "");
        assert_feed_err!(d, [], [0x41], [], "");
        assert_finish_ok!(d, "");
    }
}
