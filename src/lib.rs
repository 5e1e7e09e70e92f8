// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

/*!

# webencoding

Encoding labels and decoders of the [WHATWG Encoding Standard](https://encoding.spec.whatwg.org/).
Given a loosely formatted label from an HTTP header, a `<meta>` tag or a user,
it finds the canonical encoding, and given bytes in that encoding, it decodes them.
Only decoding is supported.

## Simple Usage

To get an encoding from a label:

~~~~ {.rust}
use webencoding::label;
use webencoding::all::{UTF_8, WINDOWS_1252};

assert_eq!(label::resolve(" UTF8 ").unwrap(), UTF_8);
assert_eq!(label::resolve("latin1").unwrap(), WINDOWS_1252);
assert_eq!(label::resolve("latin1").unwrap().name(), "windows-1252");
assert!(label::resolve("utf 8").is_err()); // not a label
assert!(label::resolve("bogus").is_err()); // not a known label
~~~~

To decode a byte sequence:

~~~~ {.rust}
use webencoding::DecoderTrap;
use webencoding::all::{BIG5, ISO_8859_6};

assert_eq!(BIG5.decode(&[0xa4, 0xa4, 0xb5, 0xd8], DecoderTrap::Strict),
           Ok("\u{4e2d}\u{83ef}".to_string()));
assert!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Strict).is_err());
assert_eq!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Replace),
           Ok("Acme\u{fffd}".to_string()));
assert_eq!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Ignore),
           Ok("Acme".to_string()));
~~~~

To decode lazily, one code point or error at a time:

~~~~ {.rust}
use webencoding::{decoder_for, MalformedInput};
use webencoding::all::BIG5;

let decoded: Vec<_> = decoder_for(BIG5).decode(&[0x61, 0xfe, 0x39]).collect();
assert_eq!(decoded, vec![Ok('a'), Err(MalformedInput { upto: 2, cause: "invalid sequence" }),
                         Ok('9')]);
~~~~

## Detailed Usage

**`Encoding`** is a single character encoding.
Every encoding is a `static` in `webencoding::all`, and `webencoding::label` resolves labels
to them, so two encodings are the same iff they are the same object.

**`Decoder`**, returned by `decoder_for` or `Encoding::new_decoder`, decodes one input.
`Decoder::decode` gives a lazy iterator, and the raw incremental interface of `RawDecoder`
(`raw_feed` and `raw_finish`) decodes input given in pieces.
Decoders never replace malformed input on their own;
`Encoding::decode` takes a `DecoderTrap` that decides what to do.

## Supported Encodings

All encodings of the WHATWG Encoding Standard are recognized.
The single-byte encodings, Big5, replacement and x-user-defined are decoded here;
the other multi-byte encodings and UTF-8/UTF-16 are decoded by `encoding_rs`.

*/

pub use self::decoder::{decoder_for, Decode, Decoder};
pub use self::error::{Error, MalformedInput};
pub use self::label::{available_encodings, default_encoding, is_supported,
                      is_supported_no_replacement, resolve, resolve_no_replacement};
pub use self::types::{decode, DecoderKind, DecoderTrap, DecoderTrapFunc, Encoding, RawDecoder,
                      StringWriter}; // reexport
pub use self::all::encodings;

mod util;
#[cfg(test)] #[macro_use] mod testutils;

pub mod error;
pub mod types;
pub mod decoder;

/// Indices used for character encoding implementation. Semi-internal.
pub mod index {
    pub mod singlebyte;
    pub mod big5;
    pub mod labels;
}

/// Codec implementations.
pub mod codec {
    pub mod singlebyte;
    pub mod tradchinese;
    pub mod whatwg;
    pub mod platform;
}

pub mod all;
pub mod label;
