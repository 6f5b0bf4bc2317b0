//! Calendar oracle boundary: the capability that maps a Gregorian date to
//! Umm al-Qura Hijri fields. Kept behind a narrow trait so the resolution
//! ladder can be exercised against deterministic stubs in tests.

use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;
use thiserror::Error;

use super::months::HijriMonth;

/// Failure of the underlying calendar facility. This is an environment
/// error, not a data-shape one: callers see it unmodified rather than a
/// fabricated date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("hijri conversion failed for {date}: {reason}")]
    Conversion { date: NaiveDate, reason: String },
}

/// Raw triple returned by the oracle. `month_label` is locale/platform
/// dependent free text and must not be trusted to match any fixed string;
/// `day` and `year` are numeric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriFields {
    pub day: String,
    pub month_label: String,
    pub year: String,
}

pub trait CalendarOracle {
    /// Day, long month label and year for `date` in the Umm al-Qura calendar.
    fn hijri_fields(&self, date: NaiveDate) -> Result<HijriFields, OracleError>;

    /// Numeric Hijri month (1–12) for `date`. Used as the single bounded
    /// re-query of the ordinal fallback.
    fn month_ordinal(&self, date: NaiveDate) -> Result<u32, OracleError>;
}

/// Default oracle backed by the `hijri_date` Umm al-Qura tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UmmAlQura;

impl UmmAlQura {
    fn convert(&self, date: NaiveDate) -> Result<HijriDate, OracleError> {
        if date.year() < 1 {
            return Err(OracleError::Conversion {
                date,
                reason: "year before common era".to_string(),
            });
        }
        HijriDate::from_gr(
            date.year() as usize,
            date.month() as usize,
            date.day() as usize,
        )
        .map_err(|e| OracleError::Conversion {
            date,
            reason: e.to_string(),
        })
    }
}

impl CalendarOracle for UmmAlQura {
    fn hijri_fields(&self, date: NaiveDate) -> Result<HijriFields, OracleError> {
        let hd = self.convert(date)?;
        // hijri_date reports months 1-12; label them with the canonical
        // transliteration so downstream matching sees a known spelling.
        let month_label = HijriMonth::from_index(hd.month().saturating_sub(1))
            .map(|m| m.key().to_string())
            .unwrap_or_default();
        Ok(HijriFields {
            day: hd.day().to_string(),
            month_label,
            year: hd.year().to_string(),
        })
    }

    fn month_ordinal(&self, date: NaiveDate) -> Result<u32, OracleError> {
        Ok(self.convert(date)?.month() as u32)
    }
}
