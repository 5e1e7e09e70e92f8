// This is a part of webencoding.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Table generator for [webencoding](https://github.com/webencoding/webencoding).
//!
//! The build script of webencoding reads the index crates of rust-encoding,
//! runs them through this crate and writes the resulting Rust source into `OUT_DIR`.
//! Nothing here is used at run time.

pub mod big5;
pub mod singlebyte;

use std::io::{self, Write};

/// Writes `values` as comma-separated hexadecimal literals, `per_line` to a line.
pub fn write_hex_list<W: Write>(out: &mut W, values: &[u16], per_line: usize,
                                indent: &str) -> io::Result<()> {
    for line in values.chunks(per_line) {
        write!(out, "{}", indent)?;
        for (i, value) in line.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "0x{:04X},", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
