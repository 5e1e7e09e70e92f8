// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for single-byte encodings.

use crate::error::MalformedInput;
use crate::index::singlebyte::SingleByteIndex;
use crate::types::*;

/// A decoder for single-byte encodings.
/// Bytes 0x00 to 0x7F are ASCII and the high half is looked up in the index.
#[derive(Clone, Copy)]
pub struct SingleByteDecoder {
    index: &'static SingleByteIndex,
}

impl SingleByteDecoder {
    pub fn new(index: &'static SingleByteIndex) -> SingleByteDecoder {
        SingleByteDecoder { index }
    }

    /// Returns true if the index has an unassigned byte.
    pub fn is_fallible(&self) -> bool { self.index.is_fallible() }
}

impl RawDecoder for SingleByteDecoder {
    fn is_ascii_compatible(&self) -> bool { true }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        output.writer_hint(input.len());

        if !self.index.is_fallible() {
            for &b in input {
                if b <= 0x7f {
                    output.write_char(b as char);
                } else {
                    output.write_char(self.index.forward_unchecked(b));
                }
            }
            return (input.len(), None);
        }

        for (i, &b) in input.iter().enumerate() {
            if b <= 0x7f {
                output.write_char(b as char);
            } else {
                match self.index.forward(b) {
                    Some(ch) => output.write_char(ch),
                    None => {
                        return (i, Some(MalformedInput { upto: i + 1, cause: "invalid sequence" }));
                    }
                }
            }
        }
        (input.len(), None)
    }

    fn raw_finish(&mut self, _output: &mut dyn StringWriter) -> Option<MalformedInput> {
        None
    }
}
