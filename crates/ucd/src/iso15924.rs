use strum::{EnumCount, IntoEnumIterator};

use crate::Script;

/// Tag returned for anything without a real ISO 15924 assignment, `"Zzzz"`.
pub const UNKNOWN_TAG: u32 = tag(b"Zzzz");

// http://unicode.org/iso15924/
// Tags are packed big endian, 'Z' << 24 | 'y' << 16 | ..
const fn tag(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

impl Script {
    /// ISO 15924 tag of this script, packed as 4 ASCII bytes.
    ///
    /// `Invalid` has no tag and returns 0. `Unknown` returns
    /// [`UNKNOWN_TAG`].
    pub fn iso15924(self) -> u32 {
        use Script::*;

        match self {
            Common => tag(b"Zyyy"),
            Inherited => tag(b"Zinh"),
            Arabic => tag(b"Arab"),
            Armenian => tag(b"Armn"),
            Bengali => tag(b"Beng"),
            Bopomofo => tag(b"Bopo"),
            Cherokee => tag(b"Cher"),
            Coptic => tag(b"Copt"),
            Cyrillic => tag(b"Cyrl"),
            Deseret => tag(b"Dsrt"),
            Devanagari => tag(b"Deva"),
            Ethiopic => tag(b"Ethi"),
            Georgian => tag(b"Geor"),
            Gothic => tag(b"Goth"),
            Greek => tag(b"Grek"),
            Gujarati => tag(b"Gujr"),
            Gurmukhi => tag(b"Guru"),
            Han => tag(b"Hani"),
            Hangul => tag(b"Hang"),
            Hebrew => tag(b"Hebr"),
            Hiragana => tag(b"Hira"),
            Kannada => tag(b"Knda"),
            Katakana => tag(b"Kana"),
            Khmer => tag(b"Khmr"),
            Lao => tag(b"Laoo"),
            Latin => tag(b"Latn"),
            Malayalam => tag(b"Mlym"),
            Mongolian => tag(b"Mong"),
            Myanmar => tag(b"Mymr"),
            Ogham => tag(b"Ogam"),
            OldItalic => tag(b"Ital"),
            Oriya => tag(b"Orya"),
            Runic => tag(b"Runr"),
            Sinhala => tag(b"Sinh"),
            Syriac => tag(b"Syrc"),
            Tamil => tag(b"Taml"),
            Telugu => tag(b"Telu"),
            Thaana => tag(b"Thaa"),
            Thai => tag(b"Thai"),
            Tibetan => tag(b"Tibt"),
            CanadianAboriginal => tag(b"Cans"),
            Yi => tag(b"Yiii"),
            Tagalog => tag(b"Tglg"),
            Hanunoo => tag(b"Hano"),
            Buhid => tag(b"Buhd"),
            Tagbanwa => tag(b"Tagb"),

            Braille => tag(b"Brai"),
            Cypriot => tag(b"Cprt"),
            Limbu => tag(b"Limb"),
            Osmanya => tag(b"Osma"),
            Shavian => tag(b"Shaw"),
            LinearB => tag(b"Linb"),
            TaiLe => tag(b"Tale"),
            Ugaritic => tag(b"Ugar"),

            NewTaiLue => tag(b"Talu"),
            Buginese => tag(b"Bugi"),
            Glagolitic => tag(b"Glag"),
            Tifinagh => tag(b"Tfng"),
            SylotiNagri => tag(b"Sylo"),
            OldPersian => tag(b"Xpeo"),
            Kharoshthi => tag(b"Khar"),

            Unknown => tag(b"Zzzz"),
            Balinese => tag(b"Bali"),
            Cuneiform => tag(b"Xsux"),
            Phoenician => tag(b"Phnx"),
            PhagsPa => tag(b"Phag"),
            Nko => tag(b"Nkoo"),

            KayahLi => tag(b"Kali"),
            Lepcha => tag(b"Lepc"),
            Rejang => tag(b"Rjng"),
            Sundanese => tag(b"Sund"),
            Saurashtra => tag(b"Saur"),
            Cham => tag(b"Cham"),
            OlChiki => tag(b"Olck"),
            Vai => tag(b"Vaii"),
            Carian => tag(b"Cari"),
            Lycian => tag(b"Lyci"),
            Lydian => tag(b"Lydi"),

            Avestan => tag(b"Avst"),
            Bamum => tag(b"Bamu"),
            EgyptianHieroglyphs => tag(b"Egyp"),
            ImperialAramaic => tag(b"Armi"),
            InscriptionalPahlavi => tag(b"Phli"),
            InscriptionalParthian => tag(b"Prti"),
            Javanese => tag(b"Java"),
            Kaithi => tag(b"Kthi"),
            Lisu => tag(b"Lisu"),
            MeeteiMayek => tag(b"Mtei"),
            OldSouthArabian => tag(b"Sarb"),
            OldTurkic => tag(b"Orkh"),
            Samaritan => tag(b"Samr"),
            TaiTham => tag(b"Lana"),
            TaiViet => tag(b"Tavt"),

            Batak => tag(b"Batk"),
            Brahmi => tag(b"Brah"),
            Mandaic => tag(b"Mand"),

            Chakma => tag(b"Cakm"),
            MeroiticCursive => tag(b"Merc"),
            MeroiticHieroglyphs => tag(b"Mero"),
            Miao => tag(b"Plrd"),
            Sharada => tag(b"Shrd"),
            SoraSompeng => tag(b"Sora"),
            Takri => tag(b"Takr"),

            BassaVah => tag(b"Bass"),
            CaucasianAlbanian => tag(b"Aghb"),
            Duployan => tag(b"Dupl"),
            Elbasan => tag(b"Elba"),
            Grantha => tag(b"Gran"),
            Khojki => tag(b"Khoj"),
            Khudawadi => tag(b"Sind"),
            LinearA => tag(b"Lina"),
            Mahajani => tag(b"Mahj"),
            Manichaean => tag(b"Manu"),
            MendeKikakui => tag(b"Mend"),
            Modi => tag(b"Modi"),
            Mro => tag(b"Mroo"),
            Nabataean => tag(b"Nbat"),
            OldNorthArabian => tag(b"Narb"),
            OldPermic => tag(b"Perm"),
            PahawhHmong => tag(b"Hmng"),
            Palmyrene => tag(b"Palm"),
            PauCinHau => tag(b"Pauc"),
            PsalterPahlavi => tag(b"Phlp"),
            Siddham => tag(b"Sidd"),
            Tirhuta => tag(b"Tirh"),
            WarangCiti => tag(b"Wara"),

            Ahom => tag(b"Ahom"),
            AnatolianHieroglyphs => tag(b"Hluw"),
            Hatran => tag(b"Hatr"),
            Multani => tag(b"Mult"),
            OldHungarian => tag(b"Hung"),
            Signwriting => tag(b"Sgnw"),

            Adlam => tag(b"Adlm"),
            Bhaiksuki => tag(b"Bhks"),
            Marchen => tag(b"Marc"),
            Newa => tag(b"Newa"),
            Osage => tag(b"Osge"),
            Tangut => tag(b"Tang"),

            MasaramGondi => tag(b"Gonm"),
            Nushu => tag(b"Nshu"),
            Soyombo => tag(b"Soyo"),
            ZanabazarSquare => tag(b"Zanb"),

            Dogra => tag(b"Dogr"),
            GunjalaGondi => tag(b"Gong"),
            HanifiRohingya => tag(b"Rohg"),
            Makasar => tag(b"Maka"),
            Medefaidrin => tag(b"Medf"),
            OldSogdian => tag(b"Sogo"),
            Sogdian => tag(b"Sogd"),

            Elymaic => tag(b"Elym"),
            Nandinagari => tag(b"Nand"),
            NyiakengPuachueHmong => tag(b"Hmnp"),
            Wancho => tag(b"Wcho"),

            Invalid => 0,
        }
    }

    /// Script for a packed ISO 15924 tag.
    ///
    /// Tag 0 maps back to `Invalid`. Comparison is an exact match over the
    /// packed bytes; a tag nothing in the registry carries yields `Unknown`.
    pub fn from_iso15924(tag: u32) -> Script {
        if tag == 0 {
            return Script::Invalid;
        }

        Script::iter()
            .find(|script| script.iso15924() == tag)
            .unwrap_or(Script::Unknown)
    }

    /// Script at a registry ordinal, `Unknown` for anything past the
    /// registry tail (`Invalid` is not part of the registry).
    pub fn from_ordinal(ordinal: u32) -> Script {
        Script::iter()
            .take(Script::COUNT - 1)
            .nth(ordinal as usize)
            .unwrap_or(Script::Unknown)
    }
}
