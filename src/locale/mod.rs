//! Locale text facility: long-form month, weekday and numeral rendering
//! for Gregorian instants. Behind a trait so resolvers can be tested
//! against fixed tables instead of a platform locale subsystem.

use chrono::Weekday;

use crate::calendar::digits::localize_digits;

pub trait LocaleText {
    /// Long Gregorian month name, `month` 1–12.
    fn gregorian_month_name(&self, month: u32) -> &'static str;

    /// Long weekday name.
    fn weekday_name(&self, weekday: Weekday) -> &'static str;

    /// Render numeric text in the locale's own numerals.
    fn render_number(&self, text: &str) -> String;
}

/// Urdu month names, January first. Urdu uses transliterated Gregorian
/// month names rather than translations.
const URDU_GREGORIAN_MONTHS: [&str; 12] = [
    "جنوری",
    "فروری",
    "مارچ",
    "اپریل",
    "مئی",
    "جون",
    "جولائی",
    "اگست",
    "ستمبر",
    "اکتوبر",
    "نومبر",
    "دسمبر",
];

/// Urdu weekday names, Sunday first.
const URDU_WEEKDAYS: [&str; 7] = [
    "اتوار",
    "پیر",
    "منگل",
    "بدھ",
    "جمعرات",
    "جمعہ",
    "ہفتہ",
];

/// Urdu (ur-PK) locale with static CLDR-derived tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrduLocale;

impl LocaleText for UrduLocale {
    fn gregorian_month_name(&self, month: u32) -> &'static str {
        URDU_GREGORIAN_MONTHS
            .get(month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }

    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        URDU_WEEKDAYS[weekday.num_days_from_sunday() as usize]
    }

    fn render_number(&self, text: &str) -> String {
        localize_digits(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(UrduLocale.gregorian_month_name(1), "جنوری");
        assert_eq!(UrduLocale.gregorian_month_name(12), "دسمبر");
        assert_eq!(UrduLocale.gregorian_month_name(13), "");
        assert_eq!(UrduLocale.gregorian_month_name(0), "");
    }

    #[test]
    fn weekday_names_follow_chrono() {
        assert_eq!(UrduLocale.weekday_name(Weekday::Sun), "اتوار");
        assert_eq!(UrduLocale.weekday_name(Weekday::Fri), "جمعہ");
        assert_eq!(UrduLocale.weekday_name(Weekday::Sat), "ہفتہ");
    }

    #[test]
    fn numbers_render_in_urdu_digits() {
        assert_eq!(UrduLocale.render_number("2024"), "۲۰۲۴");
    }
}
