// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Error types.

use thiserror::Error;

/// A malformed byte sequence found while decoding.
///
/// Decoders report one error per malformed sequence and never substitute on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{cause} (resume at byte {upto})")]
pub struct MalformedInput {
    /// The offset of the first byte after the malformed sequence,
    /// where decoding resumes.
    ///
    /// For `RawDecoder::raw_feed` it is relative to the current input;
    /// for `RawDecoder::raw_finish` it is 0.
    /// The `Decode` iterator and `Encoding::decode` report it relative to the whole input.
    pub upto: usize,
    /// A human-readable cause of the error.
    pub cause: &'static str,
}

/// Errors of label resolution and decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The label is empty or contains a character that no label can contain.
    #[error("invalid encoding label syntax: {0:?}")]
    InvalidLabelSyntax(String),

    /// The label is well-formed but names no supported encoding.
    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),

    /// The input could not be decoded.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MalformedInput { upto: 3, cause: "invalid sequence" };
        assert_eq!(err.to_string(), "invalid sequence (resume at byte 3)");
        assert_eq!(Error::from(err).to_string(), "invalid sequence (resume at byte 3)");
        assert_eq!(Error::InvalidLabelSyntax("utf 8".to_owned()).to_string(),
                   "invalid encoding label syntax: \"utf 8\"");
        assert_eq!(Error::UnsupportedEncoding("bogus".to_owned()).to_string(),
                   "unsupported encoding: \"bogus\"");
    }
}
