// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Big5 index, compressed.
//!
//! The index is stored as two tables generated by the build script:
//!
//! - `LOW_BITS_RANGES` covers every assigned pointer with ordered, disjoint ranges.
//!   Each range holds the low 16 bits of the code point of each of its pointers,
//!   0 for the few unassigned pointers inside the range.
//! - `ASTRAL_RANGES` tells which pointers map to a code point in plane 2,
//!   either one bit per pointer or, for a lone pointer, the pointer itself.
//!
//! Both tables are scanned sequentially.
//! Pointers 1133, 1135, 1164 and 1166 map to the first code point of their two-code-point
//! sequences here; the decoder handles them before consulting the index.

struct LowBitsRange {
    start: usize,
    end: usize,
    low_bits: &'static [u16],
}

enum AstralRange {
    Single(usize),
    Bitmap { start: usize, end: usize, bits: &'static [u16] },
}

include!(concat!(env!("OUT_DIR"), "/big5_data.rs"));

/// Returns the low 16 bits of the code point for `pointer`, or 0 if it is unassigned.
pub fn low_bits(pointer: usize) -> u16 {
    for range in LOW_BITS_RANGES.iter() {
        if pointer < range.start {
            return 0;
        }
        if pointer < range.end {
            return range.low_bits[pointer - range.start];
        }
    }
    0
}

/// Returns true if `pointer` maps to an astral code point.
/// Only meaningful for assigned pointers.
pub fn is_astral(pointer: usize) -> bool {
    for range in ASTRAL_RANGES.iter() {
        match *range {
            AstralRange::Single(p) => {
                if pointer < p {
                    return false;
                }
                if pointer == p {
                    return true;
                }
            }
            AstralRange::Bitmap { start, end, bits } => {
                if pointer < start {
                    return false;
                }
                if pointer < end {
                    let i = pointer - start;
                    return bits[i >> 4] & (1 << (i & 0xf)) != 0;
                }
            }
        }
    }
    false
}

/// Returns the code point for `pointer`, or 0 if it is unassigned.
pub fn forward(pointer: usize) -> u32 {
    match low_bits(pointer) {
        0 => 0,
        low if is_astral(pointer) => 0x20000 | low as u32,
        low => low as u32,
    }
}
