// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoding (or a set of encodings) from a string label.
//!
//! Labels are matched as the WHATWG Encoding Standard does:
//! ASCII whitespace around the label is ignored and ASCII letters match case-insensitively.
//! Anything else that cannot appear in a label is a syntax error,
//! so `"utf 8"`, `"\u{a0}utf-8"` and `"gree\u{212a}"` (with a Kelvin sign) are rejected
//! rather than looked up.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::{debug, trace};

use crate::all;
use crate::error::Error;
use crate::index::labels::LABELS;
use crate::types::Encoding;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Head,
    Label,
    Tail,
}

fn is_label_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Canonicalizes a raw label: strips surrounding ASCII whitespace and lowercases ASCII letters.
///
/// Fails with `Error::InvalidLabelSyntax` if `raw` is empty, has interior whitespace,
/// starts or ends with punctuation, or contains a character other than
/// ASCII letters, digits, whitespace and `- + . : _`.
/// A label of whitespace only normalizes to the empty string.
pub fn normalize(raw: &str) -> Result<String, Error> {
    let syntax_error = || Error::InvalidLabelSyntax(raw.to_owned());

    if raw.is_empty() {
        return Err(syntax_error());
    }

    let mut label = String::with_capacity(raw.len());
    let mut state = State::Head;
    for c in raw.chars() {
        if is_label_whitespace(c) {
            if state == State::Label {
                state = State::Tail;
            }
        } else if c.is_ascii_alphanumeric() {
            if state == State::Tail {
                return Err(syntax_error());
            }
            state = State::Label;
            label.push(c.to_ascii_lowercase());
        } else if matches!(c, '-' | '+' | '.' | ':' | '_') {
            if state != State::Label {
                return Err(syntax_error());
            }
            label.push(c);
        } else {
            return Err(syntax_error());
        }
    }
    Ok(label)
}

fn lookup(label: &str) -> Option<&'static Encoding> {
    LABELS.binary_search_by(|&(l, _)| l.cmp(label)).ok().map(|i| LABELS[i].1)
}

/// Returns the encoding for `raw`.
/// Implements "get an encoding" algorithm: <https://encoding.spec.whatwg.org/#concept-encoding-get>
///
/// Fails with `Error::InvalidLabelSyntax` if `raw` is not a well-formed label
/// and with `Error::UnsupportedEncoding` if no encoding has the label.
pub fn resolve(raw: &str) -> Result<&'static Encoding, Error> {
    if raw.is_empty() {
        return Err(Error::InvalidLabelSyntax(String::new()));
    }
    if let Some(encoding) = lookup(raw) {
        return Ok(encoding);
    }

    let label = normalize(raw)?;
    trace!("normalized encoding label {:?} to {:?}", raw, label);
    match lookup(&label) {
        Some(encoding) => Ok(encoding),
        None => {
            trace!("no encoding for label {:?}", label);
            Err(Error::UnsupportedEncoding(raw.to_owned()))
        }
    }
}

/// Same as `resolve`, but the replacement encoding is reported as `Error::UnsupportedEncoding`.
pub fn resolve_no_replacement(raw: &str) -> Result<&'static Encoding, Error> {
    let encoding = resolve(raw)?;
    if encoding == all::REPLACEMENT {
        return Err(Error::UnsupportedEncoding(raw.to_owned()));
    }
    Ok(encoding)
}

/// Returns true if `resolve` succeeds for `raw`.
pub fn is_supported(raw: &str) -> bool {
    resolve(raw).is_ok()
}

/// Returns true if `resolve_no_replacement` succeeds for `raw`.
pub fn is_supported_no_replacement(raw: &str) -> bool {
    resolve_no_replacement(raw).is_ok()
}

/// Returns every encoding keyed by its canonical name.
/// The map is built on the first call.
pub fn available_encodings() -> &'static BTreeMap<&'static str, &'static Encoding> {
    static ENCODINGS: OnceLock<BTreeMap<&'static str, &'static Encoding>> = OnceLock::new();
    ENCODINGS.get_or_init(|| {
        let map: BTreeMap<_, _> = all::encodings().iter()
            .map(|&encoding| (encoding.name(), encoding))
            .collect();
        debug!("built the map of {} available encodings", map.len());
        map
    })
}

/// Returns the encoding to use when nothing else is known, windows-1252.
pub fn default_encoding() -> &'static Encoding {
    all::WINDOWS_1252
}
