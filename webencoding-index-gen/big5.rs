// This is a part of webencoding.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Compression of the Big5 index.
//!
//! The index is split twice over the same pointer space.
//! The first split keeps every pointer that maps to something,
//! storing the low 16 bits of the code point inline.
//! The second split records which pointers map to an astral code point, one bit per pointer.
//! Both drop long runs of uninteresting pointers and keep short runs inline,
//! trading a few wasted slots for fewer ranges to scan.

use std::io::{self, Write};

use super::write_hex_list;

/// Number of pointers addressable by a lead byte (0x81-0xFE) and a trail byte.
pub const POINTER_COUNT: usize = (0xff - 0x81) * 157;

/// Runs of unassigned pointers longer than this end a low-bits range.
pub const RANGE_GAP_THRESHOLD: usize = 4;

/// Runs of BMP or unassigned pointers longer than this end an astral range.
pub const ASTRAL_GAP_THRESHOLD: usize = 40;

/// Builds the WHATWG Big5 index from a rust-encoding style `forward` function.
///
/// `forward` returns `0xffff` for unassigned pointers and `0` to `3` for the four pointers
/// that decode to two code points (1133, 1135, 1164 and 1166).
/// The WHATWG index stores the first code point of each pair there, so that is what we keep.
/// Unassigned pointers become 0.
pub fn index_from_forward<F>(forward: F) -> Vec<u32> where F: Fn(u16) -> u32 {
    (0..POINTER_COUNT).map(|pointer| {
        match forward(pointer as u16) {
            0xffff => 0,
            0 | 1 => 0x00ca,
            2 | 3 => 0x00ea,
            code_point => code_point,
        }
    }).collect()
}

/// Finds runs of consecutive pointers for which `in_gap` holds and that are longer than
/// `threshold`. A run only counts as a gap once a pointer outside of it terminates it,
/// so a trailing run is never a gap.
pub fn find_gaps<F>(index: &[u32], threshold: usize, in_gap: F) -> Vec<(usize, usize)>
        where F: Fn(u32) -> bool {
    let mut gaps = Vec::new();
    let mut run_start = 0;
    let mut run_len = 0;
    for (offset, &code_point) in index.iter().enumerate() {
        if in_gap(code_point) {
            if run_len == 0 {
                run_start = offset;
            }
            run_len += 1;
        } else {
            if run_len > threshold {
                gaps.push((run_start, run_start + run_len));
            }
            run_len = 0;
        }
    }
    gaps
}

/// Returns the complement of sorted, disjoint `gaps` within `0..cap`. Empty ranges are dropped.
pub fn invert_ranges(gaps: &[(usize, usize)], cap: usize) -> Vec<(usize, usize)> {
    let mut inverted = Vec::with_capacity(gaps.len() + 1);
    let mut start = 0;
    for &(gap_start, gap_end) in gaps {
        if gap_start > start {
            inverted.push((start, gap_start));
        }
        start = gap_end;
    }
    if start < cap {
        inverted.push((start, cap));
    }
    inverted
}

/// Packs one bit per entry into 16-bit units, bit `i & 15` of unit `i >> 4`.
/// The last unit is padded with zero bits.
pub fn pack_bits(bits: &[bool]) -> Vec<u16> {
    let mut units = vec![0u16; (bits.len() + 15) / 16];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            units[i >> 4] |= 1 << (i & 0xf);
        }
    }
    units
}

/// A range of pointers with the low 16 bits of their code points (0 if unassigned).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowBitsRange {
    pub start: usize,
    pub end: usize,
    pub low_bits: Vec<u16>,
}

/// A range of pointers of the astral bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstralRange {
    /// A lone astral pointer.
    Single(usize),
    /// A range with one bit per pointer.
    Bitmap { start: usize, end: usize, bits: Vec<u16> },
}

/// The compressed Big5 tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Big5Tables {
    pub ranges: Vec<LowBitsRange>,
    pub astral: Vec<AstralRange>,
}

impl Big5Tables {
    /// Compresses `index`, where `index[pointer]` is a code point or 0 for unassigned.
    ///
    /// Panics if an astral code point is outside plane 2 or has zero low bits,
    /// since the decoder promotes astral low bits with `0x20000 | low_bits`
    /// and treats zero low bits as unassigned.
    pub fn compress(index: &[u32]) -> Big5Tables {
        for (pointer, &code_point) in index.iter().enumerate() {
            if code_point > 0xffff {
                assert!(code_point >> 16 == 2,
                        "pointer {} maps to U+{:X} outside of plane 2", pointer, code_point);
                assert!(code_point & 0xffff != 0,
                        "pointer {} maps to U+{:X} with zero low bits", pointer, code_point);
            }
        }

        let cap = index.len();

        let gaps = find_gaps(index, RANGE_GAP_THRESHOLD, |code_point| code_point == 0);
        let ranges = invert_ranges(&gaps, cap).into_iter().map(|(start, end)| {
            LowBitsRange {
                start,
                end,
                low_bits: index[start..end].iter().map(|&code_point| code_point as u16).collect(),
            }
        }).collect();

        let gaps = find_gaps(index, ASTRAL_GAP_THRESHOLD, |code_point| code_point <= 0xffff);
        let astral = invert_ranges(&gaps, cap).into_iter().map(|(start, end)| {
            if end - start == 1 && index[start] > 0xffff {
                AstralRange::Single(start)
            } else {
                let bits: Vec<bool> =
                    index[start..end].iter().map(|&code_point| code_point > 0xffff).collect();
                AstralRange::Bitmap { start, end, bits: pack_bits(&bits) }
            }
        }).collect();

        Big5Tables { ranges, astral }
    }

    /// Emits the tables as `LOW_BITS_RANGES` and `ASTRAL_RANGES` statics.
    /// The including module provides the `LowBitsRange` and `AstralRange` types.
    pub fn write_rust<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "// THIS IS A GENERATED FILE. PLEASE DO NOT EDIT.")?;
        writeln!(out, "// Regenerated by build.rs from encoding-index-tradchinese.")?;
        writeln!(out)?;
        writeln!(out, "static LOW_BITS_RANGES: [LowBitsRange; {}] = [", self.ranges.len())?;
        for range in &self.ranges {
            writeln!(out, "    LowBitsRange {{")?;
            writeln!(out, "        start: {},", range.start)?;
            writeln!(out, "        end: {},", range.end)?;
            writeln!(out, "        low_bits: &[")?;
            write_hex_list(out, &range.low_bits, 10, "            ")?;
            writeln!(out, "        ],")?;
            writeln!(out, "    }},")?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(out, "static ASTRAL_RANGES: [AstralRange; {}] = [", self.astral.len())?;
        for range in &self.astral {
            match *range {
                AstralRange::Single(pointer) => {
                    writeln!(out, "    AstralRange::Single({}),", pointer)?;
                }
                AstralRange::Bitmap { start, end, ref bits } => {
                    writeln!(out, "    AstralRange::Bitmap {{")?;
                    writeln!(out, "        start: {},", start)?;
                    writeln!(out, "        end: {},", end)?;
                    writeln!(out, "        bits: &[")?;
                    write_hex_list(out, bits, 10, "            ")?;
                    writeln!(out, "        ],")?;
                    writeln!(out, "    }},")?;
                }
            }
        }
        writeln!(out, "];")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_count() {
        assert_eq!(POINTER_COUNT, 19782);
    }

    #[test]
    fn test_index_from_forward() {
        let index = index_from_forward(|pointer| match pointer {
            942 => 0x43f0,
            1133 => 0,
            1135 => 1,
            1164 => 2,
            1166 => 3,
            19781 => 0x79d4,
            _ => 0xffff,
        });
        assert_eq!(index.len(), POINTER_COUNT);
        assert_eq!(index[0], 0);
        assert_eq!(index[942], 0x43f0);
        assert_eq!(index[1133], 0xca);
        assert_eq!(index[1135], 0xca);
        assert_eq!(index[1164], 0xea);
        assert_eq!(index[1166], 0xea);
        assert_eq!(index[19781], 0x79d4);
    }

    #[test]
    fn test_find_gaps_threshold() {
        // runs of 4 zeros are folded, runs of 5 are gaps
        let index = [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1];
        assert_eq!(find_gaps(&index, 4, |cp| cp == 0), vec![(6, 11)]);
    }

    #[test]
    fn test_find_gaps_leading_and_trailing() {
        let index = [0, 0, 0, 0, 0, 0, 7, 8, 0, 0, 0, 0, 0, 0];
        // the leading run is a gap, the trailing one is never terminated
        assert_eq!(find_gaps(&index, 4, |cp| cp == 0), vec![(0, 6)]);
    }

    #[test]
    fn test_invert_ranges() {
        assert_eq!(invert_ranges(&[(0, 6)], 14), vec![(6, 14)]);
        assert_eq!(invert_ranges(&[(2, 4), (6, 9)], 12), vec![(0, 2), (4, 6), (9, 12)]);
        assert_eq!(invert_ranges(&[(2, 12)], 12), vec![(0, 2)]);
        assert_eq!(invert_ranges(&[], 5), vec![(0, 5)]);
    }

    #[test]
    fn test_pack_bits() {
        assert_eq!(pack_bits(&[]), Vec::<u16>::new());
        assert_eq!(pack_bits(&[true]), vec![0x0001]);
        assert_eq!(pack_bits(&[false, true, false, true]), vec![0x000a]);
        let mut bits = vec![false; 17];
        bits[15] = true;
        bits[16] = true;
        assert_eq!(pack_bits(&bits), vec![0x8000, 0x0001]);
    }

    fn lookup(tables: &Big5Tables, pointer: usize) -> u32 {
        let low = tables.ranges.iter()
            .find(|range| range.start <= pointer && pointer < range.end)
            .map_or(0, |range| range.low_bits[pointer - range.start]);
        if low == 0 {
            return 0;
        }
        let astral = tables.astral.iter().any(|range| match *range {
            AstralRange::Single(p) => p == pointer,
            AstralRange::Bitmap { start, end, ref bits } => {
                start <= pointer && pointer < end &&
                    (bits[(pointer - start) >> 4] & (1 << ((pointer - start) & 0xf))) != 0
            }
        });
        if astral { 0x20000 | low as u32 } else { low as u32 }
    }

    #[test]
    fn test_compress_round_trip() {
        let mut index = vec![0u32; 300];
        index[3] = 0x4e00;
        index[5] = 0x4e01; // short gap, kept inline
        for p in 20..60 { index[p] = 0x5000 + p as u32; }
        index[61] = 0x2a6a5;
        index[150] = 0x20021;
        index[299] = 0x79d4;

        let tables = Big5Tables::compress(&index);
        for (pointer, &expected) in index.iter().enumerate() {
            assert_eq!(lookup(&tables, pointer), expected, "pointer {}", pointer);
        }
        // the leading run of three is too short to be a gap
        assert_eq!(tables.ranges[0].start, 0);
        assert_eq!(tables.ranges[0].end, 6);
        assert_eq!(tables.ranges[0].low_bits, vec![0, 0, 0, 0x4e00, 0, 0x4e01]);
        assert_eq!(tables.astral[0], AstralRange::Single(61));
        assert!(matches!(tables.astral[1], AstralRange::Bitmap { start: 150, end: 300, .. }));
    }

    #[test]
    #[should_panic]
    fn test_compress_rejects_other_planes() {
        let mut index = vec![0u32; 10];
        index[1] = 0x10000;
        Big5Tables::compress(&index);
    }

    #[test]
    fn test_write_rust() {
        let mut index = vec![0u32; 64];
        index[10] = 0x43f0;
        index[11] = 0x2910d;
        let tables = Big5Tables::compress(&index);
        let mut buf = Vec::new();
        tables.write_rust(&mut buf).unwrap();
        let source = String::from_utf8(buf).unwrap();
        assert!(source.contains("static LOW_BITS_RANGES: [LowBitsRange; 1] = ["));
        assert!(source.contains("0x43F0, 0x910D,"));
        assert!(source.contains("static ASTRAL_RANGES: [AstralRange; "));
    }
}
