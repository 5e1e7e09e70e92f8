// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Single-byte index tables.
//!
//! Each table maps bytes 0x80 to 0xFF to a code point, 0 meaning unassigned.
//! The tables are generated by the build script from `encoding-index-singlebyte`.

use crate::util::as_char;

/// The high half of a single-byte encoding.
pub struct SingleByteIndex {
    table: [u16; 128],
    fallible: bool,
}

impl SingleByteIndex {
    /// Creates an index from the table of bytes 0x80 to 0xFF.
    /// The index is fallible iff some entry is unassigned.
    pub const fn new(table: [u16; 128]) -> SingleByteIndex {
        let mut fallible = false;
        let mut i = 0;
        while i < 128 {
            if table[i] == 0 {
                fallible = true;
            }
            i += 1;
        }
        SingleByteIndex { table, fallible }
    }

    /// Returns true if some byte of the high half is unassigned.
    #[inline]
    pub fn is_fallible(&self) -> bool { self.fallible }

    /// Maps a byte 0x80 to 0xFF, or returns `None` if it is unassigned.
    #[inline]
    pub fn forward(&self, b: u8) -> Option<char> {
        debug_assert!(b >= 0x80);
        match self.table[(b - 0x80) as usize] {
            0 => None,
            ch => Some(as_char(ch as u32)),
        }
    }

    /// Maps a byte 0x80 to 0xFF of an infallible index.
    #[inline]
    pub fn forward_unchecked(&self, b: u8) -> char {
        debug_assert!(b >= 0x80 && !self.fallible);
        as_char(self.table[(b - 0x80) as usize] as u32)
    }
}

include!(concat!(env!("OUT_DIR"), "/singlebyte_data.rs"));
