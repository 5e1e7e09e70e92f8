// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! Generates the index tables into `OUT_DIR`.
//!
//! The single-byte tables are copied from `encoding-index-singlebyte`.
//! The Big5 index from `encoding-index-tradchinese` is compressed into
//! low-bits ranges and an astral bitmap by `webencoding-index-gen`.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use webencoding_index_gen::{big5, singlebyte};

macro_rules! singlebyte_indexes {
    ($($ident:ident => $module:ident, $name:expr;)*) => (
        &[$((stringify!($ident), $name,
             encoding_index_singlebyte::$module::forward as fn(u8) -> u16)),*]
    )
}

static SINGLEBYTE_INDEXES: &[(&str, &str, fn(u8) -> u16)] = singlebyte_indexes! {
    IBM866 => ibm866, "ibm866";
    ISO_8859_2 => iso_8859_2, "iso-8859-2";
    ISO_8859_3 => iso_8859_3, "iso-8859-3";
    ISO_8859_4 => iso_8859_4, "iso-8859-4";
    ISO_8859_5 => iso_8859_5, "iso-8859-5";
    ISO_8859_6 => iso_8859_6, "iso-8859-6";
    ISO_8859_7 => iso_8859_7, "iso-8859-7";
    ISO_8859_8 => iso_8859_8, "iso-8859-8 and iso-8859-8-i";
    ISO_8859_10 => iso_8859_10, "iso-8859-10";
    ISO_8859_13 => iso_8859_13, "iso-8859-13";
    ISO_8859_14 => iso_8859_14, "iso-8859-14";
    ISO_8859_15 => iso_8859_15, "iso-8859-15";
    ISO_8859_16 => iso_8859_16, "iso-8859-16";
    KOI8_R => koi8_r, "koi8-r";
    KOI8_U => koi8_u, "koi8-u";
    MACINTOSH => macintosh, "macintosh";
    WINDOWS_874 => windows_874, "windows-874";
    WINDOWS_1250 => windows_1250, "windows-1250";
    WINDOWS_1251 => windows_1251, "windows-1251";
    WINDOWS_1252 => windows_1252, "windows-1252";
    WINDOWS_1253 => windows_1253, "windows-1253";
    WINDOWS_1254 => windows_1254, "windows-1254";
    WINDOWS_1255 => windows_1255, "windows-1255";
    WINDOWS_1256 => windows_1256, "windows-1256";
    WINDOWS_1257 => windows_1257, "windows-1257";
    WINDOWS_1258 => windows_1258, "windows-1258";
    X_MAC_CYRILLIC => x_mac_cyrillic, "x-mac-cyrillic";
};

fn write_singlebyte(path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "// THIS IS A GENERATED FILE. PLEASE DO NOT EDIT.")?;
    writeln!(out, "// Regenerated by build.rs from encoding-index-singlebyte.")?;
    writeln!(out)?;
    for &(ident, name, forward) in SINGLEBYTE_INDEXES {
        let table = singlebyte::table_from_forward(forward);
        singlebyte::write_table(&mut out, ident, name, &table)?;
    }
    out.flush()
}

fn write_big5(path: &Path) -> io::Result<()> {
    let index = big5::index_from_forward(encoding_index_tradchinese::big5::forward);
    let tables = big5::Big5Tables::compress(&index);
    let mut out = BufWriter::new(File::create(path)?);
    tables.write_rust(&mut out)?;
    out.flush()
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_dir = Path::new(&out_dir);
    write_singlebyte(&out_dir.join("singlebyte_data.rs"))?;
    write_big5(&out_dir.join("big5_data.rs"))?;
    Ok(())
}
