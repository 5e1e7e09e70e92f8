// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Choosing a decoder for an encoding, and lazy decoding.

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::codec::platform::PlatformDecoder;
use crate::codec::singlebyte::SingleByteDecoder;
use crate::codec::tradchinese::Big5Decoder;
use crate::codec::whatwg::{ReplacementDecoder, UserDefinedDecoder};
use crate::error::MalformedInput;
use crate::types::{DecoderKind, Encoding, RawDecoder, StringWriter};

/// How many bytes `Decode` feeds to the decoder at once.
const CHUNK_SIZE: usize = 256;

enum VariantDecoder {
    SingleByte(SingleByteDecoder),
    Big5(Big5Decoder),
    Replacement(ReplacementDecoder),
    UserDefined(UserDefinedDecoder),
    Platform(PlatformDecoder),
}

/// A decoder for one of the encodings, as returned by `decoder_for`.
pub struct Decoder {
    encoding: &'static Encoding,
    variant: VariantDecoder,
}

/// Returns the decoder for `encoding`. This never fails.
///
/// Single-byte encodings get a decoder over their index,
/// then replacement, x-user-defined and Big5 get their own decoders,
/// then gbk is decoded as gb18030,
/// and everything else is delegated to `encoding_rs`.
/// If `encoding_rs` lacks the encoding, the decoder reports every non-empty input as malformed.
pub fn decoder_for(encoding: &'static Encoding) -> Decoder {
    let variant = match *encoding.kind() {
        DecoderKind::SingleByte(index) => VariantDecoder::SingleByte(SingleByteDecoder::new(index)),
        DecoderKind::Replacement => VariantDecoder::Replacement(ReplacementDecoder::new()),
        DecoderKind::UserDefined => VariantDecoder::UserDefined(UserDefinedDecoder::new()),
        DecoderKind::Big5 => VariantDecoder::Big5(Big5Decoder::new()),
        DecoderKind::Alias(target) => {
            debug!("decoding {} with the decoder of {}", encoding, target);
            decoder_for(target).variant
        }
        DecoderKind::Platform => {
            let decoder = PlatformDecoder::new(encoding.name());
            if decoder.is_available() {
                debug!("decoding {} with encoding_rs", encoding);
            } else {
                debug!("encoding_rs has no decoder for {}, every input will be malformed", encoding);
            }
            VariantDecoder::Platform(decoder)
        }
    };
    Decoder { encoding, variant }
}

macro_rules! with_variant {
    ($variant:expr, $d:ident => $body:expr) => (
        match $variant {
            VariantDecoder::SingleByte(ref mut $d) => $body,
            VariantDecoder::Big5(ref mut $d) => $body,
            VariantDecoder::Replacement(ref mut $d) => $body,
            VariantDecoder::UserDefined(ref mut $d) => $body,
            VariantDecoder::Platform(ref mut $d) => $body,
        }
    )
}

impl Decoder {
    /// Returns the encoding this decoder was created for.
    /// For gbk this is gbk, although the decoder is the one of gb18030.
    pub fn encoding(&self) -> &'static Encoding { self.encoding }

    /// Decodes `input` lazily.
    ///
    /// The decoder is fed at most a few hundred bytes ahead of what has been consumed,
    /// and dropping the iterator stops decoding.
    /// Errors carry `upto` relative to `input`.
    pub fn decode(self, input: &[u8]) -> Decode<'_> {
        Decode {
            decoder: self,
            input,
            pos: 0,
            pending: VecDeque::new(),
            error: None,
            untouched: true,
            finished: false,
        }
    }

    fn chunk_size(&self) -> usize {
        match self.variant {
            // the whole input is one malformed sequence
            VariantDecoder::Replacement(_) => usize::MAX,
            VariantDecoder::Platform(ref d) if !d.is_available() => usize::MAX,
            _ => CHUNK_SIZE,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self.variant {
            VariantDecoder::SingleByte(_) => "single-byte",
            VariantDecoder::Big5(_) => "big5",
            VariantDecoder::Replacement(_) => "replacement",
            VariantDecoder::UserDefined(_) => "x-user-defined",
            VariantDecoder::Platform(_) => "encoding_rs",
        }
    }
}

impl RawDecoder for Decoder {
    fn is_ascii_compatible(&self) -> bool {
        match self.variant {
            VariantDecoder::SingleByte(ref d) => d.is_ascii_compatible(),
            VariantDecoder::Big5(ref d) => d.is_ascii_compatible(),
            VariantDecoder::Replacement(ref d) => d.is_ascii_compatible(),
            VariantDecoder::UserDefined(ref d) => d.is_ascii_compatible(),
            VariantDecoder::Platform(ref d) => d.is_ascii_compatible(),
        }
    }

    fn raw_feed(&mut self, input: &[u8], output: &mut dyn StringWriter)
                -> (usize, Option<MalformedInput>) {
        with_variant!(self.variant, d => d.raw_feed(input, output))
    }

    fn raw_finish(&mut self, output: &mut dyn StringWriter) -> Option<MalformedInput> {
        with_variant!(self.variant, d => d.raw_finish(output))
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("encoding", &self.encoding.name())
            .field("variant", &self.variant_name())
            .finish()
    }
}

/// An iterator over the code points decoded from a byte slice, created by `Decoder::decode`.
///
/// Yields one `Err` per malformed sequence and keeps going after it.
pub struct Decode<'a> {
    decoder: Decoder,
    input: &'a [u8],
    pos: usize,
    pending: VecDeque<char>,
    error: Option<MalformedInput>,
    /// True until the decoder is fed for the first time.
    untouched: bool,
    finished: bool,
}

impl<'a> Decode<'a> {
    /// Returns the offset of the first byte not yet fed to the decoder.
    pub fn offset(&self) -> usize { self.pos }

    fn fill(&mut self) {
        if self.pos < self.input.len() {
            let end = self.pos.saturating_add(self.decoder.chunk_size()).min(self.input.len());
            if self.untouched && self.decoder.is_ascii_compatible() {
                // a leading ASCII run needs no decoder state
                let ascii = self.input[self.pos..end].iter().take_while(|b| b.is_ascii()).count();
                self.pending.extend(self.input[self.pos..self.pos + ascii].iter().map(|&b| b as char));
                self.pos += ascii;
                if self.pos == end {
                    return;
                }
            }
            self.untouched = false;
            let (_, err) = self.decoder.raw_feed(&self.input[self.pos..end], &mut self.pending);
            match err {
                Some(err) => {
                    let upto = self.pos + err.upto;
                    self.error = Some(MalformedInput { upto, cause: err.cause });
                    self.pos = upto;
                }
                None => self.pos = end,
            }
        } else {
            self.finished = true;
            if let Some(err) = self.decoder.raw_finish(&mut self.pending) {
                self.error = Some(MalformedInput { upto: self.input.len(), cause: err.cause });
            }
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<char, MalformedInput>;

    fn next(&mut self) -> Option<Result<char, MalformedInput>> {
        loop {
            // characters decoded before an error come out first
            if let Some(ch) = self.pending.pop_front() {
                return Some(Ok(ch));
            }
            if let Some(err) = self.error.take() {
                return Some(Err(err));
            }
            if self.finished {
                return None;
            }
            self.fill();
        }
    }
}
