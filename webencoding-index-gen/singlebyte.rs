// This is a part of webencoding.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Single-byte index tables.

use std::io::{self, Write};

use super::write_hex_list;

/// Builds the high-half table (bytes 0x80-0xFF) from a rust-encoding style `forward` function,
/// which returns `0xffff` for unassigned bytes. Unassigned entries become 0.
pub fn table_from_forward<F>(forward: F) -> [u16; 128] where F: Fn(u8) -> u16 {
    let mut table = [0u16; 128];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = match forward(0x80 + i as u8) {
            0xffff => 0,
            code_point => code_point,
        };
    }
    table
}

/// Emits `table` as a `SingleByteIndex` static named `ident`.
/// The including module provides the `SingleByteIndex` type.
pub fn write_table<W: Write>(out: &mut W, ident: &str, name: &str,
                             table: &[u16; 128]) -> io::Result<()> {
    writeln!(out, "/// The index of {}, for bytes 0x80 to 0xFF.", name)?;
    writeln!(out, "pub static {}: SingleByteIndex = SingleByteIndex::new([", ident)?;
    write_hex_list(out, table, 8, "    ")?;
    writeln!(out, "]);")?;
    writeln!(out)?;
    Ok(())
}
