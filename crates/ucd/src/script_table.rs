// Generated from Scripts.txt (UCD 12.1.0) by `ucd gen`. Do not edit.

use crate::Script;

// (first codepoint, number of codepoints, script), sorted by first
// codepoint, non-overlapping. Codepoints in no range have no assigned
// script.
#[rustfmt::skip]
pub(crate) const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0000, 0x41, Script::Common),
    (0x0041, 0x1A, Script::Latin),
    (0x005B, 0x06, Script::Common),
    (0x0061, 0x1A, Script::Latin),
    (0x007B, 0x2F, Script::Common),
    (0x00AA, 0x01, Script::Latin),
    (0x00AB, 0x0F, Script::Common),
    (0x00BA, 0x01, Script::Latin),
    (0x00BB, 0x05, Script::Common),
    (0x00C0, 0x17, Script::Latin),
    (0x00D7, 0x01, Script::Common),
    (0x00D8, 0x1F, Script::Latin),
    (0x00F7, 0x01, Script::Common),
    (0x00F8, 0x1C1, Script::Latin),
    (0x02B9, 0x27, Script::Common),
    (0x02E0, 0x05, Script::Latin),
    (0x02E5, 0x05, Script::Common),
    (0x02EA, 0x02, Script::Bopomofo),
    (0x02EC, 0x14, Script::Common),
    (0x0300, 0x70, Script::Inherited),
    (0x0370, 0x04, Script::Greek),
    (0x0374, 0x01, Script::Common),
    (0x0375, 0x03, Script::Greek),
    (0x037A, 0x04, Script::Greek),
    (0x037E, 0x01, Script::Common),
    (0x037F, 0x01, Script::Greek),
    (0x0384, 0x01, Script::Greek),
    (0x0385, 0x01, Script::Common),
    (0x0386, 0x01, Script::Greek),
    (0x0387, 0x01, Script::Common),
    (0x0388, 0x03, Script::Greek),
    (0x038C, 0x01, Script::Greek),
    (0x038E, 0x14, Script::Greek),
    (0x03A3, 0x3F, Script::Greek),
    (0x03E2, 0x0E, Script::Coptic),
    (0x03F0, 0x10, Script::Greek),
    (0x0400, 0x85, Script::Cyrillic),
    (0x0485, 0x02, Script::Inherited),
    (0x0487, 0xA9, Script::Cyrillic),
    (0x0531, 0x26, Script::Armenian),
    (0x0559, 0x37, Script::Armenian),
    (0x0591, 0x37, Script::Hebrew),
    (0x05D0, 0x1B, Script::Hebrew),
    (0x05EF, 0x06, Script::Hebrew),
    (0x0600, 0x05, Script::Arabic),
    (0x0605, 0x01, Script::Common),
    (0x0606, 0x06, Script::Arabic),
    (0x060C, 0x01, Script::Common),
    (0x060D, 0x0E, Script::Arabic),
    (0x061B, 0x01, Script::Common),
    (0x061C, 0x03, Script::Arabic),
    (0x061F, 0x01, Script::Common),
    (0x0620, 0x20, Script::Arabic),
    (0x0640, 0x01, Script::Common),
    (0x0641, 0x0A, Script::Arabic),
    (0x064B, 0x0B, Script::Inherited),
    (0x0656, 0x1A, Script::Arabic),
    (0x0670, 0x01, Script::Inherited),
    (0x0671, 0x6C, Script::Arabic),
    (0x06DD, 0x01, Script::Common),
    (0x06DE, 0x22, Script::Arabic),
    (0x0700, 0x50, Script::Syriac),
    (0x0750, 0x30, Script::Arabic),
    (0x0780, 0x32, Script::Thaana),
    (0x07C0, 0x40, Script::Nko),
    (0x0800, 0x40, Script::Samaritan),
    (0x0840, 0x20, Script::Mandaic),
    (0x0860, 0x0B, Script::Syriac),
    (0x08A0, 0x60, Script::Arabic),
    (0x0900, 0x51, Script::Devanagari),
    (0x0951, 0x04, Script::Inherited),
    (0x0955, 0x0F, Script::Devanagari),
    (0x0964, 0x02, Script::Common),
    (0x0966, 0x1A, Script::Devanagari),
    (0x0980, 0x80, Script::Bengali),
    (0x0A01, 0x76, Script::Gurmukhi),
    (0x0A81, 0x7F, Script::Gujarati),
    (0x0B01, 0x77, Script::Oriya),
    (0x0B82, 0x79, Script::Tamil),
    (0x0C00, 0x80, Script::Telugu),
    (0x0C80, 0x80, Script::Kannada),
    (0x0D00, 0x80, Script::Malayalam),
    (0x0D81, 0x74, Script::Sinhala),
    (0x0E01, 0x3A, Script::Thai),
    (0x0E3F, 0x01, Script::Common),
    (0x0E40, 0x1C, Script::Thai),
    (0x0E81, 0x5F, Script::Lao),
    (0x0F00, 0xD5, Script::Tibetan),
    (0x0FD5, 0x04, Script::Common),
    (0x0FD9, 0x02, Script::Tibetan),
    (0x1000, 0xA0, Script::Myanmar),
    (0x10A0, 0x26, Script::Georgian),
    (0x10C7, 0x01, Script::Georgian),
    (0x10CD, 0x01, Script::Georgian),
    (0x10D0, 0x2B, Script::Georgian),
    (0x10FB, 0x01, Script::Common),
    (0x10FC, 0x04, Script::Georgian),
    (0x1100, 0x100, Script::Hangul),
    (0x1200, 0x17D, Script::Ethiopic),
    (0x1380, 0x1A, Script::Ethiopic),
    (0x13A0, 0x5E, Script::Cherokee),
    (0x1400, 0x280, Script::CanadianAboriginal),
    (0x1680, 0x1D, Script::Ogham),
    (0x16A0, 0x4B, Script::Runic),
    (0x16EB, 0x03, Script::Common),
    (0x16EE, 0x0B, Script::Runic),
    (0x1700, 0x15, Script::Tagalog),
    (0x1720, 0x15, Script::Hanunoo),
    (0x1735, 0x02, Script::Common),
    (0x1740, 0x14, Script::Buhid),
    (0x1760, 0x14, Script::Tagbanwa),
    (0x1780, 0x5E, Script::Khmer),
    (0x17E0, 0x0A, Script::Khmer),
    (0x17F0, 0x0A, Script::Khmer),
    (0x1800, 0x02, Script::Mongolian),
    (0x1802, 0x02, Script::Common),
    (0x1804, 0x01, Script::Mongolian),
    (0x1805, 0x01, Script::Common),
    (0x1806, 0xA5, Script::Mongolian),
    (0x18B0, 0x46, Script::CanadianAboriginal),
    (0x1900, 0x50, Script::Limbu),
    (0x1950, 0x25, Script::TaiLe),
    (0x1980, 0x60, Script::NewTaiLue),
    (0x19E0, 0x20, Script::Khmer),
    (0x1A00, 0x20, Script::Buginese),
    (0x1A20, 0x8E, Script::TaiTham),
    (0x1AB0, 0x0F, Script::Inherited),
    (0x1B00, 0x7D, Script::Balinese),
    (0x1B80, 0x40, Script::Sundanese),
    (0x1BC0, 0x40, Script::Batak),
    (0x1C00, 0x50, Script::Lepcha),
    (0x1C50, 0x30, Script::OlChiki),
    (0x1C80, 0x09, Script::Cyrillic),
    (0x1C90, 0x30, Script::Georgian),
    (0x1CC0, 0x08, Script::Sundanese),
    (0x1CD0, 0x03, Script::Inherited),
    (0x1CD3, 0x01, Script::Common),
    (0x1CD4, 0x0D, Script::Inherited),
    (0x1CE1, 0x01, Script::Common),
    (0x1CE2, 0x07, Script::Inherited),
    (0x1CE9, 0x04, Script::Common),
    (0x1CED, 0x01, Script::Inherited),
    (0x1CEE, 0x06, Script::Common),
    (0x1CF4, 0x01, Script::Inherited),
    (0x1CF5, 0x06, Script::Common),
    (0x1D00, 0x26, Script::Latin),
    (0x1D26, 0x05, Script::Greek),
    (0x1D2B, 0x01, Script::Cyrillic),
    (0x1D2C, 0x31, Script::Latin),
    (0x1D5D, 0x05, Script::Greek),
    (0x1D62, 0x04, Script::Latin),
    (0x1D66, 0x05, Script::Greek),
    (0x1D6B, 0x0D, Script::Latin),
    (0x1D78, 0x01, Script::Cyrillic),
    (0x1D79, 0x46, Script::Latin),
    (0x1DBF, 0x01, Script::Greek),
    (0x1DC0, 0x40, Script::Inherited),
    (0x1E00, 0x100, Script::Latin),
    (0x1F00, 0xFF, Script::Greek),
    (0x2000, 0x0C, Script::Common),
    (0x200C, 0x02, Script::Inherited),
    (0x200E, 0x57, Script::Common),
    (0x2066, 0x0A, Script::Common),
    (0x2070, 0x01, Script::Common),
    (0x2071, 0x01, Script::Latin),
    (0x2074, 0x0B, Script::Common),
    (0x207F, 0x01, Script::Latin),
    (0x2080, 0x0F, Script::Common),
    (0x2090, 0x0D, Script::Latin),
    (0x20A0, 0x21, Script::Common),
    (0x20D0, 0x21, Script::Inherited),
    (0x2100, 0x26, Script::Common),
    (0x2126, 0x01, Script::Greek),
    (0x2127, 0x03, Script::Common),
    (0x212A, 0x02, Script::Latin),
    (0x212C, 0x06, Script::Common),
    (0x2132, 0x01, Script::Latin),
    (0x2133, 0x1B, Script::Common),
    (0x214E, 0x01, Script::Latin),
    (0x214F, 0x11, Script::Common),
    (0x2160, 0x29, Script::Latin),
    (0x2189, 0x03, Script::Common),
    (0x2190, 0x297, Script::Common),
    (0x2440, 0x0B, Script::Common),
    (0x2460, 0x3A0, Script::Common),
    (0x2800, 0x100, Script::Braille),
    (0x2900, 0x200, Script::Common),
    (0x2B00, 0x74, Script::Common),
    (0x2B76, 0x20, Script::Common),
    (0x2B98, 0x68, Script::Common),
    (0x2C00, 0x60, Script::Glagolitic),
    (0x2C60, 0x20, Script::Latin),
    (0x2C80, 0x80, Script::Coptic),
    (0x2D00, 0x26, Script::Georgian),
    (0x2D27, 0x01, Script::Georgian),
    (0x2D2D, 0x01, Script::Georgian),
    (0x2D30, 0x50, Script::Tifinagh),
    (0x2D80, 0x60, Script::Ethiopic),
    (0x2DE0, 0x20, Script::Cyrillic),
    (0x2E00, 0x50, Script::Common),
    (0x2E80, 0x1A, Script::Han),
    (0x2E9B, 0x59, Script::Han),
    (0x2F00, 0xD6, Script::Han),
    (0x2FF0, 0x0C, Script::Common),
    (0x3000, 0x05, Script::Common),
    (0x3005, 0x01, Script::Han),
    (0x3006, 0x01, Script::Common),
    (0x3007, 0x01, Script::Han),
    (0x3008, 0x19, Script::Common),
    (0x3021, 0x09, Script::Han),
    (0x302A, 0x04, Script::Inherited),
    (0x302E, 0x02, Script::Hangul),
    (0x3030, 0x08, Script::Common),
    (0x3038, 0x04, Script::Han),
    (0x303C, 0x04, Script::Common),
    (0x3041, 0x56, Script::Hiragana),
    (0x3099, 0x02, Script::Inherited),
    (0x309B, 0x02, Script::Common),
    (0x309D, 0x03, Script::Hiragana),
    (0x30A0, 0x01, Script::Common),
    (0x30A1, 0x5A, Script::Katakana),
    (0x30FB, 0x02, Script::Common),
    (0x30FD, 0x03, Script::Katakana),
    (0x3105, 0x2B, Script::Bopomofo),
    (0x3131, 0x5E, Script::Hangul),
    (0x3190, 0x10, Script::Common),
    (0x31A0, 0x20, Script::Bopomofo),
    (0x31C0, 0x24, Script::Common),
    (0x31F0, 0x10, Script::Katakana),
    (0x3200, 0x1F, Script::Hangul),
    (0x3220, 0x40, Script::Common),
    (0x3260, 0x1F, Script::Hangul),
    (0x327F, 0x51, Script::Common),
    (0x32D0, 0x2F, Script::Katakana),
    (0x32FF, 0x01, Script::Common),
    (0x3300, 0x58, Script::Katakana),
    (0x3358, 0xA8, Script::Common),
    (0x3400, 0x19B6, Script::Han),
    (0x4DC0, 0x40, Script::Common),
    (0x4E00, 0x51F0, Script::Han),
    (0xA000, 0x48D, Script::Yi),
    (0xA490, 0x37, Script::Yi),
    (0xA4D0, 0x30, Script::Lisu),
    (0xA500, 0x12C, Script::Vai),
    (0xA640, 0x60, Script::Cyrillic),
    (0xA6A0, 0x60, Script::Bamum),
    (0xA700, 0x22, Script::Common),
    (0xA722, 0x66, Script::Latin),
    (0xA788, 0x03, Script::Common),
    (0xA78B, 0x75, Script::Latin),
    (0xA800, 0x2D, Script::SylotiNagri),
    (0xA830, 0x0A, Script::Common),
    (0xA840, 0x38, Script::PhagsPa),
    (0xA880, 0x60, Script::Saurashtra),
    (0xA8E0, 0x20, Script::Devanagari),
    (0xA900, 0x30, Script::KayahLi),
    (0xA930, 0x30, Script::Rejang),
    (0xA960, 0x20, Script::Hangul),
    (0xA980, 0x60, Script::Javanese),
    (0xA9E0, 0x20, Script::Myanmar),
    (0xAA00, 0x60, Script::Cham),
    (0xAA60, 0x20, Script::Myanmar),
    (0xAA80, 0x60, Script::TaiViet),
    (0xAAE0, 0x20, Script::MeeteiMayek),
    (0xAB00, 0x30, Script::Ethiopic),
    (0xAB30, 0x2B, Script::Latin),
    (0xAB5B, 0x01, Script::Common),
    (0xAB5C, 0x09, Script::Latin),
    (0xAB65, 0x01, Script::Greek),
    (0xAB66, 0x0A, Script::Latin),
    (0xAB70, 0x50, Script::Cherokee),
    (0xABC0, 0x40, Script::MeeteiMayek),
    (0xAC00, 0x2BA4, Script::Hangul),
    (0xD7B0, 0x50, Script::Hangul),
    (0xF900, 0x200, Script::Han),
    (0xFB00, 0x07, Script::Latin),
    (0xFB13, 0x05, Script::Armenian),
    (0xFB1D, 0x33, Script::Hebrew),
    (0xFB50, 0x1EE, Script::Arabic),
    (0xFD3E, 0x02, Script::Common),
    (0xFD50, 0xB0, Script::Arabic),
    (0xFE00, 0x10, Script::Inherited),
    (0xFE10, 0x0A, Script::Common),
    (0xFE20, 0x0E, Script::Inherited),
    (0xFE2E, 0x02, Script::Cyrillic),
    (0xFE30, 0x3C, Script::Common),
    (0xFE70, 0x8D, Script::Arabic),
    (0xFEFF, 0x01, Script::Common),
    (0xFF01, 0x20, Script::Common),
    (0xFF21, 0x1A, Script::Latin),
    (0xFF3B, 0x06, Script::Common),
    (0xFF41, 0x1A, Script::Latin),
    (0xFF5B, 0x0B, Script::Common),
    (0xFF66, 0x0A, Script::Katakana),
    (0xFF70, 0x01, Script::Common),
    (0xFF71, 0x2D, Script::Katakana),
    (0xFF9E, 0x02, Script::Common),
    (0xFFA0, 0x3D, Script::Hangul),
    (0xFFE0, 0x0F, Script::Common),
    (0xFFF9, 0x05, Script::Common),
    (0x10000, 0xFB, Script::LinearB),
    (0x10100, 0x40, Script::Common),
    (0x10140, 0x4F, Script::Greek),
    (0x10190, 0x0D, Script::Common),
    (0x101A0, 0x01, Script::Greek),
    (0x101D0, 0x2D, Script::Common),
    (0x101FD, 0x01, Script::Inherited),
    (0x10280, 0x1D, Script::Lycian),
    (0x102A0, 0x31, Script::Carian),
    (0x102E0, 0x01, Script::Inherited),
    (0x102E1, 0x1B, Script::Common),
    (0x10300, 0x24, Script::OldItalic),
    (0x1032D, 0x03, Script::OldItalic),
    (0x10330, 0x1B, Script::Gothic),
    (0x10350, 0x2B, Script::OldPermic),
    (0x10380, 0x20, Script::Ugaritic),
    (0x103A0, 0x40, Script::OldPersian),
    (0x10400, 0x50, Script::Deseret),
    (0x10450, 0x30, Script::Shavian),
    (0x10480, 0x30, Script::Osmanya),
    (0x104B0, 0x4C, Script::Osage),
    (0x10500, 0x28, Script::Elbasan),
    (0x10530, 0x40, Script::CaucasianAlbanian),
    (0x10600, 0x168, Script::LinearA),
    (0x10800, 0x40, Script::Cypriot),
    (0x10840, 0x20, Script::ImperialAramaic),
    (0x10860, 0x20, Script::Palmyrene),
    (0x10880, 0x30, Script::Nabataean),
    (0x108E0, 0x20, Script::Hatran),
    (0x10900, 0x20, Script::Phoenician),
    (0x10920, 0x20, Script::Lydian),
    (0x10980, 0x20, Script::MeroiticHieroglyphs),
    (0x109A0, 0x60, Script::MeroiticCursive),
    (0x10A00, 0x60, Script::Kharoshthi),
    (0x10A60, 0x20, Script::OldSouthArabian),
    (0x10A80, 0x20, Script::OldNorthArabian),
    (0x10AC0, 0x40, Script::Manichaean),
    (0x10B00, 0x40, Script::Avestan),
    (0x10B40, 0x20, Script::InscriptionalParthian),
    (0x10B60, 0x20, Script::InscriptionalPahlavi),
    (0x10B80, 0x30, Script::PsalterPahlavi),
    (0x10C00, 0x49, Script::OldTurkic),
    (0x10C80, 0x80, Script::OldHungarian),
    (0x10D00, 0x40, Script::HanifiRohingya),
    (0x10E60, 0x1F, Script::Arabic),
    (0x10F00, 0x30, Script::OldSogdian),
    (0x10F30, 0x2A, Script::Sogdian),
    (0x10FE0, 0x17, Script::Elymaic),
    (0x11000, 0x80, Script::Brahmi),
    (0x11080, 0x50, Script::Kaithi),
    (0x110D0, 0x30, Script::SoraSompeng),
    (0x11100, 0x50, Script::Chakma),
    (0x11150, 0x30, Script::Mahajani),
    (0x11180, 0x60, Script::Sharada),
    (0x111E0, 0x20, Script::Sinhala),
    (0x11200, 0x50, Script::Khojki),
    (0x11280, 0x30, Script::Multani),
    (0x112B0, 0x50, Script::Khudawadi),
    (0x11300, 0x80, Script::Grantha),
    (0x11400, 0x80, Script::Newa),
    (0x11480, 0x60, Script::Tirhuta),
    (0x11580, 0x80, Script::Siddham),
    (0x11600, 0x60, Script::Modi),
    (0x11660, 0x20, Script::Mongolian),
    (0x11680, 0x50, Script::Takri),
    (0x11700, 0x40, Script::Ahom),
    (0x11800, 0x50, Script::Dogra),
    (0x118A0, 0x60, Script::WarangCiti),
    (0x119A0, 0x60, Script::Nandinagari),
    (0x11A00, 0x50, Script::ZanabazarSquare),
    (0x11A50, 0x60, Script::Soyombo),
    (0x11AC0, 0x40, Script::PauCinHau),
    (0x11C00, 0x70, Script::Bhaiksuki),
    (0x11C70, 0x50, Script::Marchen),
    (0x11D00, 0x60, Script::MasaramGondi),
    (0x11D60, 0x50, Script::GunjalaGondi),
    (0x11EE0, 0x20, Script::Makasar),
    (0x11FC0, 0x40, Script::Tamil),
    (0x12000, 0x550, Script::Cuneiform),
    (0x13000, 0x430, Script::EgyptianHieroglyphs),
    (0x14400, 0x280, Script::AnatolianHieroglyphs),
    (0x16800, 0x239, Script::Bamum),
    (0x16A40, 0x30, Script::Mro),
    (0x16AD0, 0x30, Script::BassaVah),
    (0x16B00, 0x90, Script::PahawhHmong),
    (0x16E40, 0x5B, Script::Medefaidrin),
    (0x16F00, 0xA0, Script::Miao),
    (0x16FE0, 0x01, Script::Tangut),
    (0x16FE1, 0x01, Script::Nushu),
    (0x17000, 0x1800, Script::Tangut),
    (0x18800, 0x300, Script::Tangut),
    (0x1B000, 0x01, Script::Katakana),
    (0x1B001, 0x11E, Script::Hiragana),
    (0x1B170, 0x190, Script::Nushu),
    (0x1BC00, 0x9A, Script::Duployan),
    (0x1BCA0, 0x04, Script::Common),
    (0x1D000, 0xF6, Script::Common),
    (0x1D100, 0x67, Script::Common),
    (0x1D167, 0x03, Script::Inherited),
    (0x1D16A, 0x11, Script::Common),
    (0x1D17B, 0x08, Script::Inherited),
    (0x1D183, 0x02, Script::Common),
    (0x1D185, 0x07, Script::Inherited),
    (0x1D18C, 0x1E, Script::Common),
    (0x1D1AA, 0x04, Script::Inherited),
    (0x1D1AE, 0x3B, Script::Common),
    (0x1D200, 0x46, Script::Greek),
    (0x1D2E0, 0x19, Script::Common),
    (0x1D300, 0x57, Script::Common),
    (0x1D360, 0x19, Script::Common),
    (0x1D400, 0x400, Script::Common),
    (0x1D800, 0x28C, Script::Signwriting),
    (0x1DA9B, 0x15, Script::Signwriting),
    (0x1E000, 0x2D, Script::Glagolitic),
    (0x1E100, 0x50, Script::NyiakengPuachueHmong),
    (0x1E2C0, 0x40, Script::Wancho),
    (0x1E800, 0xD7, Script::MendeKikakui),
    (0x1E900, 0x60, Script::Adlam),
    (0x1EC70, 0x50, Script::Common),
    (0x1EE00, 0x100, Script::Arabic),
    (0x1F000, 0x100, Script::Common),
    (0x1F100, 0x100, Script::Common),
    (0x1F200, 0x01, Script::Hiragana),
    (0x1F201, 0xFF, Script::Common),
    (0x1F300, 0x800, Script::Common),
    (0x20000, 0xA6D7, Script::Han),
    (0x2A700, 0x1035, Script::Han),
    (0x2B740, 0xDE, Script::Han),
    (0x2B820, 0x1682, Script::Han),
    (0x2CEB0, 0x1D31, Script::Han),
    (0x2F800, 0x220, Script::Han),
];
