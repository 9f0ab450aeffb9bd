use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// ISO 639-1 language code, independent of the script the language is
/// written in.
#[derive(
    Clone, Debug, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, AsRefStr, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Unknown,

    Aa,
    Ab,
    Ae,
    Af,
    Ak,
    Am,
    An,
    Ar,
    As,
    Av,
    Ay,
    Az,
    Ba,
    Be,
    Bg,
    Bh,
    Bi,
    Bm,
    Bn,
    Bo,
    Br,
    Bs,
    Ca,
    Ce,
    Ch,
    Co,
    Cr,
    Cs,
    Cu,
    Cv,
    Cy,
    Da,
    De,
    Dv,
    Dz,
    Ee,
    El,
    En,
    Eo,
    Es,
    Et,
    Eu,
    Fa,
    Ff,
    Fi,
    Fj,
    Fo,
    Fr,
    Fy,
    Ga,
    Gd,
    Gl,
    Gn,
    Gu,
    Gv,
    Ha,
    He,
    Hi,
    Ho,
    Hr,
    Ht,
    Hu,
    Hy,
    Hz,
    Ia,
    Id,
    Ie,
    Ig,
    Ii,
    Ik,
    Io,
    Is,
    It,
    Iu,
    Ja,
    Jv,
    Ka,
    Kg,
    Ki,
    Kj,
    Kk,
    Kl,
    Km,
    Kn,
    Ko,
    Kr,
    Ks,
    Ku,
    Kv,
    Kw,
    Ky,
    La,
    Lb,
    Lg,
    Li,
    Ln,
    Lo,
    Lt,
    Lu,
    Lv,
    Mg,
    Mh,
    Mi,
    Mk,
    Ml,
    Mn,
    Mr,
    Ms,
    Mt,
    My,
    Na,
    Nb,
    Nd,
    Ne,
    Ng,
    Nl,
    Nn,
    No,
    Nr,
    Nv,
    Ny,
    Oc,
    Oj,
    Om,
    Or,
    Os,
    Pa,
    Pi,
    Pl,
    Ps,
    Pt,
    Qu,
    Rm,
    Rn,
    Ro,
    Ru,
    Rw,
    Sa,
    Sc,
    Sd,
    Se,
    Sg,
    Si,
    Sk,
    Sl,
    Sm,
    Sn,
    So,
    Sq,
    Sr,
    Ss,
    St,
    Su,
    Sv,
    Sw,
    Ta,
    Te,
    Tg,
    Th,
    Ti,
    Tk,
    Tl,
    Tn,
    To,
    Tr,
    Ts,
    Tt,
    Tw,
    Ty,
    Ug,
    Uk,
    Ur,
    Uz,
    Ve,
    Vi,
    Vo,
    Wa,
    Wo,
    Xh,
    Yi,
    Yo,
    Za,
    Zh,
    Zu,
}

impl LanguageCode {
    /// Language code for an ISO 639 identifier.
    ///
    /// Region and script subtags are dropped (`"az-ir"` resolves as
    /// `"az"`), ASCII case is folded. Anything the registry does not
    /// know resolves to `Unknown`.
    pub fn from_iso639(tag: &str) -> LanguageCode {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        primary.to_ascii_lowercase().parse().unwrap_or(LanguageCode::Unknown)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn primary_subtag() {
        assert_eq!(LanguageCode::from_iso639("zh"), LanguageCode::Zh);
        assert_eq!(LanguageCode::from_iso639("az-ir"), LanguageCode::Az);
        assert_eq!(LanguageCode::from_iso639("sr_RS"), LanguageCode::Sr);
        assert_eq!(LanguageCode::from_iso639("PT"), LanguageCode::Pt);
    }

    #[test]
    fn unrecognized() {
        assert_eq!(LanguageCode::from_iso639(""), LanguageCode::Unknown);
        assert_eq!(LanguageCode::from_iso639("xyz"), LanguageCode::Unknown);
        assert_eq!(LanguageCode::from_iso639("x-klingon"), LanguageCode::Unknown);
    }

    #[test]
    fn round_trips_as_str() {
        assert_eq!(LanguageCode::Zh.as_ref(), "zh");
        assert_eq!(LanguageCode::from_iso639(LanguageCode::Ko.as_ref()), LanguageCode::Ko);
    }
}
