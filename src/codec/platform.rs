// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Decoders delegated to `encoding_rs`.
//!
//! Multi-byte encodings other than Big5 are decoded by `encoding_rs`,
//! with BOM handling disabled so that the decoder sees exactly the bytes it is fed.
//! The inner decoder buffers incomplete sequences itself,
//! so every fed byte counts as processed unless it is part of a malformed sequence.

use encoding_rs::DecoderResult;

use crate::error::MalformedInput;
use crate::types::*;

/// A decoder backed by `encoding_rs`.
///
/// If `encoding_rs` has no decoder for the name, every non-empty input is malformed.
pub struct PlatformDecoder {
    encoding: Option<&'static encoding_rs::Encoding>,
    decoder: Option<encoding_rs::Decoder>,
}

impl PlatformDecoder {
    pub fn new(name: &str) -> PlatformDecoder {
        let encoding = encoding_rs::Encoding::for_label(name.as_bytes());
        let decoder = encoding.map(|encoding| encoding.new_decoder_without_bom_handling());
        PlatformDecoder { encoding, decoder }
    }

    /// Returns true if `encoding_rs` provides the decoder.
    pub fn is_available(&self) -> bool { self.decoder.is_some() }

    fn buffer_for(decoder: &encoding_rs::Decoder, len: usize) -> String {
        let capacity = decoder.max_utf8_buffer_length_without_replacement(len)
            .unwrap_or(len.saturating_mul(3));
        String::with_capacity(capacity.max(16))
    }
}

impl RawDecoder for PlatformDecoder {
    fn is_ascii_compatible(&self) -> bool {
        self.encoding.map_or(false, |encoding| encoding.is_ascii_compatible())
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        let decoder = match self.decoder {
            Some(ref mut decoder) => decoder,
            None if input.is_empty() => return (0, None),
            None => {
                return (0, Some(MalformedInput { upto: input.len(), cause: "no decoder available" }));
            }
        };

        let mut buf = PlatformDecoder::buffer_for(decoder, input.len());
        let mut read = 0;
        loop {
            let (result, nread) =
                decoder.decode_to_string_without_replacement(&input[read..], &mut buf, false);
            read += nread;
            output.write_str(&buf);
            buf.clear();
            match result {
                DecoderResult::InputEmpty => return (read, None),
                // `buf` has been drained and keeps its capacity
                DecoderResult::OutputFull => {}
                DecoderResult::Malformed(bad, after) => {
                    let upto = read;
                    let processed = upto.saturating_sub(bad as usize + after as usize);
                    return (processed, Some(MalformedInput { upto, cause: "invalid sequence" }));
                }
            }
        }
    }

    fn raw_finish(&mut self, output: &mut dyn StringWriter) -> Option<MalformedInput> {
        let decoder = self.decoder.as_mut()?;

        let mut buf = PlatformDecoder::buffer_for(decoder, 0);
        let mut err = None;
        loop {
            let (result, _) = decoder.decode_to_string_without_replacement(&[], &mut buf, true);
            output.write_str(&buf);
            buf.clear();
            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => {}
                DecoderResult::Malformed(..) => {
                    err.get_or_insert(MalformedInput { upto: 0, cause: "incomplete sequence" });
                }
            }
        }

        // a finished `encoding_rs` decoder cannot be reused
        self.decoder = self.encoding.map(|encoding| encoding.new_decoder_without_bom_handling());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::PlatformDecoder;
    use crate::types::RawDecoder;

    #[test]
    fn test_utf_8() {
        let mut d = PlatformDecoder::new("utf-8");
        assert!(d.is_available());
        assert!(d.is_ascii_compatible());
        assert_feed_ok!(d, [0x41, 0xc3, 0xa9], [], "A\u{e9}");
        assert_feed_ok!(d, [0x41, 0xe2, 0x82], [], "A");
        assert_feed_ok!(d, [0xac], [], "\u{20ac}");
        assert_feed_err!(d, [0x41], [0xff], [0x42], "A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_utf_8_no_bom_handling() {
        let mut d = PlatformDecoder::new("utf-8");
        assert_feed_ok!(d, [0xef, 0xbb, 0xbf, 0x41], [], "\u{feff}A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_incomplete_at_finish() {
        let mut d = PlatformDecoder::new("utf-8");
        assert_feed_ok!(d, [0xe2], [], "");
        assert_finish_err!(d, "");
        // the decoder is usable again
        assert_feed_ok!(d, [0xe2, 0x82, 0xac], [], "\u{20ac}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_utf_16() {
        let mut d = PlatformDecoder::new("utf-16le");
        assert!(!d.is_ascii_compatible());
        assert_feed_ok!(d, [0x41, 0x00, 0xac], [], "A");
        assert_feed_ok!(d, [0x20], [], "\u{20ac}");
        assert_finish_ok!(d, "");

        let mut d = PlatformDecoder::new("utf-16be");
        assert_feed_ok!(d, [0xd8, 0x64, 0xdd, 0x0d], [], "\u{2910d}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_shift_jis() {
        let mut d = PlatformDecoder::new("shift_jis");
        assert_feed_ok!(d, [0x82, 0xa0, 0x41], [], "\u{3042}A");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_unavailable() {
        let mut d = PlatformDecoder::new("x-no-such-encoding");
        assert!(!d.is_available());
        assert!(!d.is_ascii_compatible());
        assert_feed_ok!(d, [], [], "");
        assert_feed_err!(d, [], [0x41, 0x42], [], "");
        assert_finish_ok!(d, "");
    }
}
