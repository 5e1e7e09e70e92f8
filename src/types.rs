// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Interface to the character encoding.
//!
//! # Raw incremental interface
//!
//! Methods which name starts with `raw_` constitute the raw incremental interface,
//! the lowest-available API for decoders.
//! This interface divides the entire input to four parts:
//!
//! - **Processed** bytes do not affect the future result.
//! - **Unprocessed** bytes may affect the future result
//!   and can be a part of problematic sequence according to the future input.
//! - **Problematic** byte is the first byte that causes an error condition.
//! - **Remaining** bytes are not yet processed nor read,
//!   so the caller should feed any remaining bytes again.
//!
//! `raw_feed` returns the offset of the first unprocessed byte
//! (zero when the unprocessed bytes started before the current call)
//! and, on an error, a `MalformedInput` whose `upto` is the offset of the first remaining byte.
//! A Big5 lead byte followed by an ASCII byte that does not make a valid pair is an example
//! where `upto` is less than the input consumed so far: the ASCII byte is remaining
//! and has to be fed again.

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::decoder::{decoder_for, Decoder};
use crate::error::{Error, MalformedInput};
use crate::index::singlebyte::SingleByteIndex;

/// String writer used by decoders. In most cases this will be an owned string.
pub trait StringWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single character.
    fn write_char(&mut self, c: char);

    /// Writes a string.
    fn write_str(&mut self, s: &str);
}

impl StringWriter for String {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

impl StringWriter for VecDeque<char> {
    fn write_char(&mut self, c: char) {
        self.push_back(c);
    }

    fn write_str(&mut self, s: &str) {
        self.extend(s.chars());
    }
}

/// Decoder converting a byte sequence into a Unicode string.
/// This is a lower level interface, and normally `Encoding::decode` should be used instead.
pub trait RawDecoder: Send {
    /// Returns true if this decoder passes bytes 0x00 to 0x7F through as ASCII.
    fn is_ascii_compatible(&self) -> bool { false }

    /// Feeds given portion of byte sequence to the decoder,
    /// returns the offset of the first unprocessed byte and an optional error.
    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>);

    /// Finishes the decoder, pushes any remaining characters and returns an optional error.
    /// The decoder is back to its initial state afterwards.
    fn raw_finish(&mut self, output: &mut dyn StringWriter) -> Option<MalformedInput>;
}

/// How an encoding is decoded.
pub enum DecoderKind {
    /// Through a 128-entry index of the high half.
    SingleByte(&'static SingleByteIndex),
    /// Through the compressed Big5 index.
    Big5,
    /// Every non-empty input is one malformed sequence.
    Replacement,
    /// x-user-defined, mapping the high half to U+F780-U+F7FF.
    UserDefined,
    /// With the decoder of another encoding.
    Alias(&'static Encoding),
    /// With the decoder of `encoding_rs` for the same name.
    Platform,
}

/// A character encoding of the Encoding Standard.
///
/// Every encoding is a `static` singleton in the `all` module,
/// so encodings compare by identity.
pub struct Encoding {
    name: &'static str,
    labels: &'static [&'static str],
    kind: DecoderKind,
}

impl Encoding {
    /// Creates an encoding. `labels` should be sorted.
    pub const fn new(name: &'static str, labels: &'static [&'static str],
                     kind: DecoderKind) -> Encoding {
        Encoding { name, labels, kind }
    }

    /// Returns the canonical name of the encoding.
    pub fn name(&self) -> &'static str { self.name }

    /// Returns every label of the encoding, sorted.
    pub fn labels(&self) -> &'static [&'static str] { self.labels }

    /// Returns how the encoding is decoded.
    pub fn kind(&self) -> &DecoderKind { &self.kind }

    /// Returns true if the encoding is decoded through a single-byte index.
    pub fn is_single_byte(&self) -> bool {
        matches!(self.kind, DecoderKind::SingleByte(_))
    }

    /// Always false: encodings can only be decoded.
    pub fn can_encode(&self) -> bool { false }

    /// Creates a new decoder.
    pub fn new_decoder(&'static self) -> Decoder { decoder_for(self) }

    /// Decodes `input` as a whole, handling errors with `trap`.
    ///
    /// On failure the returned error has `upto` relative to `input`.
    pub fn decode(&'static self, input: &[u8], trap: DecoderTrap)
                  -> Result<String, MalformedInput> {
        let mut decoder = self.new_decoder();
        let mut remaining = 0;
        let mut ret = String::new();

        loop {
            let (offset, err) = decoder.raw_feed(&input[remaining..], &mut ret);
            let unprocessed = remaining + offset;
            match err {
                Some(err) => {
                    remaining += err.upto;
                    if !trap.trap(&mut decoder, &input[unprocessed..remaining], &mut ret) {
                        return Err(MalformedInput { upto: remaining, cause: err.cause });
                    }
                }
                None => {
                    if let Some(err) = decoder.raw_finish(&mut ret) {
                        if !trap.trap(&mut decoder, &input[unprocessed..], &mut ret) {
                            return Err(MalformedInput { upto: input.len(), cause: err.cause });
                        }
                    }
                    return Ok(ret);
                }
            }
        }
    }

    /// Resolves a label. See `label::resolve`.
    pub fn for_label(label: &str) -> Result<&'static Encoding, Error> {
        crate::label::resolve(label)
    }

    /// Resolves a label, rejecting the replacement encoding.
    /// See `label::resolve_no_replacement`.
    pub fn for_label_no_replacement(label: &str) -> Result<&'static Encoding, Error> {
        crate::label::resolve_no_replacement(label)
    }
}

impl PartialEq for Encoding {
    fn eq(&self, other: &Encoding) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Encoding {}

impl Hash for Encoding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Encoding({})", self.name)
    }
}

/// A type of the bare function in `DecoderTrap` values.
pub type DecoderTrapFunc =
    fn(decoder: &mut dyn RawDecoder, input: &[u8], output: &mut dyn StringWriter) -> bool;

/// Trap, which handles decoder errors.
#[derive(Clone, Copy)]
pub enum DecoderTrap {
    /// Immediately fails on errors.
    /// Corresponds to WHATWG "fatal" error algorithm.
    Strict,
    /// Replaces an error with a U+FFFD (decoder).
    /// Corresponds to WHATWG "replacement" error algorithm.
    Replace,
    /// Silently ignores an error, effectively replacing it with an empty sequence.
    Ignore,
    /// Calls given function to handle decoder errors.
    /// The function is given the current decoder, the problematic input and output writer,
    /// and should return true only when it is fine to keep going.
    Call(DecoderTrapFunc),
}

impl DecoderTrap {
    /// Handles a decoder error. May write to the output writer.
    /// Returns true only when it is fine to keep going.
    fn trap(&self, decoder: &mut dyn RawDecoder, input: &[u8],
            output: &mut dyn StringWriter) -> bool {
        match *self {
            DecoderTrap::Strict => false,
            DecoderTrap::Replace => { output.write_char('\u{fffd}'); true },
            DecoderTrap::Ignore => true,
            DecoderTrap::Call(func) => func(decoder, input, output),
        }
    }
}

impl fmt::Debug for DecoderTrap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecoderTrap::Strict => f.write_str("Strict"),
            DecoderTrap::Replace => f.write_str("Replace"),
            DecoderTrap::Ignore => f.write_str("Ignore"),
            DecoderTrap::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// Determine the encoding by looking for a Byte Order Mark (BOM)
/// and decoded a single string in memory.
/// Return the result and the used encoding.
pub fn decode(input: &[u8], trap: DecoderTrap, fallback_encoding: &'static Encoding)
              -> (Result<String, MalformedInput>, &'static Encoding) {
    use crate::all::{UTF_8, UTF_16BE, UTF_16LE};
    if let Some(rest) = input.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        (UTF_8.decode(rest, trap), UTF_8)
    } else if let Some(rest) = input.strip_prefix(&[0xFE, 0xFF]) {
        (UTF_16BE.decode(rest, trap), UTF_16BE)
    } else if let Some(rest) = input.strip_prefix(&[0xFF, 0xFE]) {
        (UTF_16LE.decode(rest, trap), UTF_16LE)
    } else {
        (fallback_encoding.decode(input, trap), fallback_encoding)
    }
}
