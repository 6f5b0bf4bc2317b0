//! Date resolvers: Hijri (with the regional day shift and the month
//! resolution ladder), Gregorian, and the weekday name.

use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::digits::localize_digits;
use super::months::{resolve_month_label, MonthResolution};
use super::oracle::{CalendarOracle, OracleError};
use crate::locale::LocaleText;

/// Pakistan typically sights the moon one day after the Umm al-Qura
/// reference, so Hijri fields are read for the previous Gregorian day.
/// Fixed policy constant, not a per-call parameter.
const REGIONAL_DAY_SHIFT: i64 = -1;

/// Localized day/month/year display record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Resolve the Hijri date shown for `date`.
///
/// The oracle is queried with the shifted instant. The day keeps Western
/// numerals, the year is stripped of era markers and digit-localized, and
/// the month label runs through the resolution ladder. Only oracle failure
/// propagates; label ambiguity degrades to the raw label.
pub fn resolve_hijri_date(
    oracle: &impl CalendarOracle,
    date: NaiveDate,
) -> Result<FormattedDate, OracleError> {
    let shifted = date + Duration::days(REGIONAL_DAY_SHIFT);
    let fields = oracle.hijri_fields(shifted)?;

    let mut month = resolve_month_label(&fields.month_label, None);
    if month.is_unresolved() {
        // One bounded re-query for the numeric ordinal; if it also fails
        // the raw label is still preferable to no date at all.
        let hint = match oracle.month_ordinal(shifted) {
            Ok(ordinal) => Some(ordinal as i32 - 1),
            Err(e) => {
                warn!("month ordinal re-query failed for {shifted}: {e}");
                None
            }
        };
        month = resolve_month_label(&fields.month_label, hint);
        if month.is_unresolved() {
            warn!("unmapped hijri month label {:?}", fields.month_label);
        } else {
            debug!("label {:?} resolved via ordinal fallback", fields.month_label);
        }
    }

    let year: String = fields.year.chars().filter(|c| c.is_ascii_digit()).collect();

    Ok(FormattedDate {
        day: fields.day,
        month: month.display_name(),
        year: localize_digits(&year),
    })
}

/// Long-form localized Gregorian date. No day shift and no fallback ladder;
/// the locale facility's own numeral rendering is trusted as-is.
pub fn resolve_gregorian_date(locale: &impl LocaleText, date: NaiveDate) -> FormattedDate {
    FormattedDate {
        day: locale.render_number(&date.day().to_string()),
        month: locale.gregorian_month_name(date.month()).to_string(),
        year: locale.render_number(&date.year().to_string()),
    }
}

/// Long localized weekday name of the unshifted instant. Real-world calendars
/// shift only the Hijri fields, never the day-of-week label.
pub fn resolve_weekday_name(locale: &impl LocaleText, date: NaiveDate) -> String {
    locale.weekday_name(date.weekday()).to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::calendar::oracle::HijriFields;
    use crate::locale::UrduLocale;

    /// Deterministic oracle that records every date it is asked about.
    struct StubOracle {
        fields: HijriFields,
        ordinal: Option<u32>,
        queried: RefCell<Vec<NaiveDate>>,
    }

    impl StubOracle {
        fn new(day: &str, month_label: &str, year: &str, ordinal: Option<u32>) -> Self {
            Self {
                fields: HijriFields {
                    day: day.to_string(),
                    month_label: month_label.to_string(),
                    year: year.to_string(),
                },
                ordinal,
                queried: RefCell::new(Vec::new()),
            }
        }
    }

    impl CalendarOracle for StubOracle {
        fn hijri_fields(&self, date: NaiveDate) -> Result<HijriFields, OracleError> {
            self.queried.borrow_mut().push(date);
            Ok(self.fields.clone())
        }

        fn month_ordinal(&self, date: NaiveDate) -> Result<u32, OracleError> {
            self.queried.borrow_mut().push(date);
            self.ordinal.ok_or(OracleError::Conversion {
                date,
                reason: "no ordinal".to_string(),
            })
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn queries_oracle_with_previous_day() {
        let oracle = StubOracle::new("15", "Ramadan", "1446", None);
        resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(oracle.queried.borrow().as_slice(), &[day(2024, 3, 25)]);
    }

    #[test]
    fn ordinal_requery_uses_the_shifted_day_too() {
        let oracle = StubOracle::new("1", "???", "1446", Some(1));
        resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(
            oracle.queried.borrow().as_slice(),
            &[day(2024, 3, 25), day(2024, 3, 25)]
        );
    }

    #[test]
    fn known_label_skips_the_requery() {
        let oracle = StubOracle::new("15", "Ramadan", "1446", Some(3));
        resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        // Exactly one oracle call: the ladder matched without the ordinal.
        assert_eq!(oracle.queried.borrow().len(), 1);
    }

    #[test]
    fn full_record_for_known_label() {
        let oracle = StubOracle::new("15", "Ramadan", "1446", None);
        let got = resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(got.day, "15");
        assert_eq!(got.month, "رمضان");
        assert_eq!(got.year, "۱۴۴۶");
    }

    #[test]
    fn year_era_marker_is_stripped_before_localizing() {
        let oracle = StubOracle::new("15", "Ramadan", "1446 AH", None);
        let got = resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(got.year, localize_digits("1446"));
    }

    #[test]
    fn all_non_digit_year_degrades_to_empty() {
        let oracle = StubOracle::new("15", "Ramadan", "AH", None);
        let got = resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(got.year, "");
    }

    #[test]
    fn unknown_label_with_ordinal_resolves_through_table() {
        let oracle = StubOracle::new("1", "???", "1446", Some(2));
        let got = resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(got.month, "صفر");
    }

    #[test]
    fn unknown_label_without_ordinal_keeps_raw_text() {
        let oracle = StubOracle::new("1", "Mystery Month", "1446", None);
        let got = resolve_hijri_date(&oracle, day(2024, 3, 26)).unwrap();
        assert_eq!(got.month, "Mystery Month");
    }

    #[test]
    fn gregorian_record_is_localized() {
        let got = resolve_gregorian_date(&UrduLocale, day(2024, 3, 26));
        assert_eq!(got.day, "۲۶");
        assert_eq!(got.month, "مارچ");
        assert_eq!(got.year, "۲۰۲۴");
    }

    #[test]
    fn weekday_reads_the_unshifted_instant() {
        // 2024-03-26 is a Tuesday; the shifted day would be Monday.
        assert_eq!(resolve_weekday_name(&UrduLocale, day(2024, 3, 26)), "منگل");
    }
}
