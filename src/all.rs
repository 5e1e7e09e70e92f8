// This is a part of webencoding.
// Copyright (c) 2026, webencoding developers.
// See README.md and LICENSE.txt for details.

//! A list of all supported encodings. Useful for encodings fixed in the compile time.
//!
//! Each encoding is a `static` singleton, `FOO_INIT`, with a `&'static Encoding` handle `FOO`.
//! Labels and canonical names follow the WHATWG Encoding Standard.

use crate::index::singlebyte;
use crate::types::{DecoderKind, Encoding};

macro_rules! encoding {
    ($var:ident, $init:ident, $name:literal, [$($label:literal),+], $kind:expr) => (
        #[doc(hidden)]
        pub static $init: Encoding = Encoding::new($name, &[$($label),+], $kind);
        #[doc = concat!("The `", $name, "` encoding.")]
        pub static $var: &Encoding = &$init;
    )
}

encoding!(UTF_8, UTF_8_INIT, "utf-8",
          ["unicode-1-1-utf-8", "unicode11utf8", "unicode20utf8", "utf-8", "utf8",
           "x-unicode20utf8"],
          DecoderKind::Platform);
encoding!(IBM866, IBM866_INIT, "ibm866",
          ["866", "cp866", "csibm866", "ibm866"],
          DecoderKind::SingleByte(&singlebyte::IBM866));
encoding!(ISO_8859_2, ISO_8859_2_INIT, "iso-8859-2",
          ["csisolatin2", "iso-8859-2", "iso-ir-101", "iso8859-2", "iso88592", "iso_8859-2",
           "iso_8859-2:1987", "l2", "latin2"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_2));
encoding!(ISO_8859_3, ISO_8859_3_INIT, "iso-8859-3",
          ["csisolatin3", "iso-8859-3", "iso-ir-109", "iso8859-3", "iso88593", "iso_8859-3",
           "iso_8859-3:1988", "l3", "latin3"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_3));
encoding!(ISO_8859_4, ISO_8859_4_INIT, "iso-8859-4",
          ["csisolatin4", "iso-8859-4", "iso-ir-110", "iso8859-4", "iso88594", "iso_8859-4",
           "iso_8859-4:1988", "l4", "latin4"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_4));
encoding!(ISO_8859_5, ISO_8859_5_INIT, "iso-8859-5",
          ["csisolatincyrillic", "cyrillic", "iso-8859-5", "iso-ir-144", "iso8859-5",
           "iso88595", "iso_8859-5", "iso_8859-5:1988"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_5));
encoding!(ISO_8859_6, ISO_8859_6_INIT, "iso-8859-6",
          ["arabic", "asmo-708", "csiso88596e", "csiso88596i", "csisolatinarabic", "ecma-114",
           "iso-8859-6", "iso-8859-6-e", "iso-8859-6-i", "iso-ir-127", "iso8859-6", "iso88596",
           "iso_8859-6", "iso_8859-6:1987"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_6));
encoding!(ISO_8859_7, ISO_8859_7_INIT, "iso-8859-7",
          ["csisolatingreek", "ecma-118", "elot_928", "greek", "greek8", "iso-8859-7",
           "iso-ir-126", "iso8859-7", "iso88597", "iso_8859-7", "iso_8859-7:1987",
           "sun_eu_greek"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_7));
encoding!(ISO_8859_8, ISO_8859_8_INIT, "iso-8859-8",
          ["csiso88598e", "csisolatinhebrew", "hebrew", "iso-8859-8", "iso-8859-8-e",
           "iso-ir-138", "iso8859-8", "iso88598", "iso_8859-8", "iso_8859-8:1988", "visual"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_8));
encoding!(ISO_8859_8_I, ISO_8859_8_I_INIT, "iso-8859-8-i",
          ["csiso88598i", "iso-8859-8-i", "logical"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_8));
encoding!(ISO_8859_10, ISO_8859_10_INIT, "iso-8859-10",
          ["csisolatin6", "iso-8859-10", "iso-ir-157", "iso8859-10", "iso885910", "l6", "latin6"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_10));
encoding!(ISO_8859_13, ISO_8859_13_INIT, "iso-8859-13",
          ["iso-8859-13", "iso8859-13", "iso885913"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_13));
encoding!(ISO_8859_14, ISO_8859_14_INIT, "iso-8859-14",
          ["iso-8859-14", "iso8859-14", "iso885914"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_14));
encoding!(ISO_8859_15, ISO_8859_15_INIT, "iso-8859-15",
          ["csisolatin9", "iso-8859-15", "iso8859-15", "iso885915", "iso_8859-15", "l9"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_15));
encoding!(ISO_8859_16, ISO_8859_16_INIT, "iso-8859-16",
          ["iso-8859-16"],
          DecoderKind::SingleByte(&singlebyte::ISO_8859_16));
encoding!(KOI8_R, KOI8_R_INIT, "koi8-r",
          ["cskoi8r", "koi", "koi8", "koi8-r", "koi8_r"],
          DecoderKind::SingleByte(&singlebyte::KOI8_R));
encoding!(KOI8_U, KOI8_U_INIT, "koi8-u",
          ["koi8-ru", "koi8-u"],
          DecoderKind::SingleByte(&singlebyte::KOI8_U));
encoding!(MACINTOSH, MACINTOSH_INIT, "macintosh",
          ["csmacintosh", "mac", "macintosh", "x-mac-roman"],
          DecoderKind::SingleByte(&singlebyte::MACINTOSH));
encoding!(WINDOWS_874, WINDOWS_874_INIT, "windows-874",
          ["dos-874", "iso-8859-11", "iso8859-11", "iso885911", "tis-620", "windows-874"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_874));
encoding!(WINDOWS_1250, WINDOWS_1250_INIT, "windows-1250",
          ["cp1250", "windows-1250", "x-cp1250"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1250));
encoding!(WINDOWS_1251, WINDOWS_1251_INIT, "windows-1251",
          ["cp1251", "windows-1251", "x-cp1251"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1251));
encoding!(WINDOWS_1252, WINDOWS_1252_INIT, "windows-1252",
          ["ansi_x3.4-1968", "ascii", "cp1252", "cp819", "csisolatin1", "ibm819", "iso-8859-1",
           "iso-ir-100", "iso8859-1", "iso88591", "iso_8859-1", "iso_8859-1:1987", "l1",
           "latin1", "us-ascii", "windows-1252", "x-cp1252"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1252));
encoding!(WINDOWS_1253, WINDOWS_1253_INIT, "windows-1253",
          ["cp1253", "windows-1253", "x-cp1253"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1253));
encoding!(WINDOWS_1254, WINDOWS_1254_INIT, "windows-1254",
          ["cp1254", "csisolatin5", "iso-8859-9", "iso-ir-148", "iso8859-9", "iso88599",
           "iso_8859-9", "iso_8859-9:1989", "l5", "latin5", "windows-1254", "x-cp1254"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1254));
encoding!(WINDOWS_1255, WINDOWS_1255_INIT, "windows-1255",
          ["cp1255", "windows-1255", "x-cp1255"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1255));
encoding!(WINDOWS_1256, WINDOWS_1256_INIT, "windows-1256",
          ["cp1256", "windows-1256", "x-cp1256"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1256));
encoding!(WINDOWS_1257, WINDOWS_1257_INIT, "windows-1257",
          ["cp1257", "windows-1257", "x-cp1257"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1257));
encoding!(WINDOWS_1258, WINDOWS_1258_INIT, "windows-1258",
          ["cp1258", "windows-1258", "x-cp1258"],
          DecoderKind::SingleByte(&singlebyte::WINDOWS_1258));
encoding!(X_MAC_CYRILLIC, X_MAC_CYRILLIC_INIT, "x-mac-cyrillic",
          ["x-mac-cyrillic", "x-mac-ukrainian"],
          DecoderKind::SingleByte(&singlebyte::X_MAC_CYRILLIC));
encoding!(GBK, GBK_INIT, "gbk",
          ["chinese", "csgb2312", "csiso58gb231280", "gb2312", "gb_2312", "gb_2312-80", "gbk",
           "iso-ir-58", "x-gbk"],
          DecoderKind::Alias(&GB18030_INIT));
encoding!(GB18030, GB18030_INIT, "gb18030",
          ["gb18030"],
          DecoderKind::Platform);
encoding!(BIG5, BIG5_INIT, "big5",
          ["big5", "big5-hkscs", "cn-big5", "csbig5", "x-x-big5"],
          DecoderKind::Big5);
encoding!(EUC_JP, EUC_JP_INIT, "euc-jp",
          ["cseucpkdfmtjapanese", "euc-jp", "x-euc-jp"],
          DecoderKind::Platform);
encoding!(ISO_2022_JP, ISO_2022_JP_INIT, "iso-2022-jp",
          ["csiso2022jp", "iso-2022-jp"],
          DecoderKind::Platform);
encoding!(SHIFT_JIS, SHIFT_JIS_INIT, "shift_jis",
          ["csshiftjis", "ms932", "ms_kanji", "shift-jis", "shift_jis", "sjis", "windows-31j",
           "x-sjis"],
          DecoderKind::Platform);
encoding!(EUC_KR, EUC_KR_INIT, "euc-kr",
          ["cseuckr", "csksc56011987", "euc-kr", "iso-ir-149", "korean", "ks_c_5601-1987",
           "ks_c_5601-1989", "ksc5601", "ksc_5601", "windows-949"],
          DecoderKind::Platform);
encoding!(REPLACEMENT, REPLACEMENT_INIT, "replacement",
          ["csiso2022kr", "hz-gb-2312", "iso-2022-cn", "iso-2022-cn-ext", "iso-2022-kr",
           "replacement"],
          DecoderKind::Replacement);
encoding!(UTF_16BE, UTF_16BE_INIT, "utf-16be",
          ["unicodefffe", "utf-16be"],
          DecoderKind::Platform);
encoding!(UTF_16LE, UTF_16LE_INIT, "utf-16le",
          ["csunicode", "iso-10646-ucs-2", "ucs-2", "unicode", "unicodefeff", "utf-16",
           "utf-16le"],
          DecoderKind::Platform);
encoding!(X_USER_DEFINED, X_USER_DEFINED_INIT, "x-user-defined",
          ["x-user-defined"],
          DecoderKind::UserDefined);

/// Returns every encoding, sorted by canonical name.
pub fn encodings() -> &'static [&'static Encoding] {
    crate::index::labels::ENCODINGS
}
