//! Static Hijri month table and the month-label resolution ladder.
//!
//! Calendar oracles report the Hijri month as free text whose exact spelling
//! varies by platform (apostrophe and diacritic variants are common, e.g.
//! "Rabi' I" vs "Rabiʻ I"). Resolution therefore runs through an ordered
//! ladder of strategies instead of a single lookup, and degrades to the raw
//! label rather than failing the whole date.

/// Islamic month, in calendar order (index 0 = Muharram = month 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhulQadah,
    DhulHijjah,
}

impl HijriMonth {
    /// All twelve months in calendar order. Both lookup views below are
    /// derived from this one list so they cannot drift apart.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhulQadah,
        HijriMonth::DhulHijjah,
    ];

    /// Zero-based lookup (0 = Muharram .. 11 = Dhu al-Hijjah).
    pub fn from_index(index: usize) -> Option<HijriMonth> {
        HijriMonth::ALL.get(index).copied()
    }

    /// Canonical English transliteration, as CLDR-style formatters emit it.
    pub fn key(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabiʻ I",
            HijriMonth::RabiAlThani => "Rabiʻ II",
            HijriMonth::JumadaAlAwwal => "Jumada I",
            HijriMonth::JumadaAlThani => "Jumada II",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Shaʻban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhulQadah => "Dhuʻl-Qiʻdah",
            HijriMonth::DhulHijjah => "Dhuʻl-Hijjah",
        }
    }

    /// Urdu display name.
    pub fn urdu_name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "محرم",
            HijriMonth::Safar => "صفر",
            HijriMonth::RabiAlAwwal => "ربیع الاول",
            HijriMonth::RabiAlThani => "ربیع الثانی",
            HijriMonth::JumadaAlAwwal => "جمادی الاول",
            HijriMonth::JumadaAlThani => "جمادی الثانی",
            HijriMonth::Rajab => "رجب",
            HijriMonth::Shaban => "شعبان",
            HijriMonth::Ramadan => "رمضان",
            HijriMonth::Shawwal => "شوال",
            HijriMonth::DhulQadah => "ذوالقعدہ",
            HijriMonth::DhulHijjah => "ذوالحجہ",
        }
    }
}

/// Outcome of the resolution ladder, tagged with the strategy that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthResolution {
    /// Label equalled a canonical key.
    Exact(HijriMonth),
    /// First whitespace token of the label was found inside a canonical key.
    Partial(HijriMonth),
    /// Resolved through the zero-based numeric ordinal.
    Ordinal(HijriMonth),
    /// Nothing matched; the raw oracle label is kept as-is.
    Unresolved(String),
}

impl MonthResolution {
    /// The Urdu display text, or the raw label when nothing resolved.
    pub fn display_name(self) -> String {
        match self {
            MonthResolution::Exact(m)
            | MonthResolution::Partial(m)
            | MonthResolution::Ordinal(m) => m.urdu_name().to_string(),
            MonthResolution::Unresolved(raw) => raw,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, MonthResolution::Unresolved(_))
    }
}

/// Resolve an oracle month label through the ladder, first success wins:
/// exact key match, then first-token substring match, then the zero-based
/// `ordinal_hint` (valid 0..=11), and finally the raw label unchanged.
pub fn resolve_month_label(label: &str, ordinal_hint: Option<i32>) -> MonthResolution {
    if let Some(month) = HijriMonth::ALL.iter().find(|m| m.key() == label) {
        return MonthResolution::Exact(*month);
    }

    if let Some(token) = label.split_whitespace().next() {
        if let Some(month) = HijriMonth::ALL.iter().find(|m| m.key().contains(token)) {
            return MonthResolution::Partial(*month);
        }
    }

    if let Some(index) = ordinal_hint {
        if (0..12).contains(&index) {
            if let Some(month) = HijriMonth::from_index(index as usize) {
                return MonthResolution::Ordinal(month);
            }
        }
    }

    MonthResolution::Unresolved(label.to_string())
}
