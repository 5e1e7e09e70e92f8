// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

/// Converts a code point from an index table to `char`.
///
/// Index tables only contain scalar values, so the fallback to U+FFFD is never taken.
#[inline]
pub fn as_char(ch: u32) -> char {
    debug_assert!(char::from_u32(ch).is_some(), "{:#x} is not a scalar value", ch);
    char::from_u32(ch).unwrap_or('\u{fffd}')
}

#[cfg(test)]
mod tests {
    use super::as_char;

    #[test]
    fn test_as_char() {
        assert_eq!(as_char(0x41), 'A');
        assert_eq!(as_char(0x2910d), '\u{2910d}');
    }
}
