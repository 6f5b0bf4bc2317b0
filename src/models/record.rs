use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::oracle::{CalendarOracle, OracleError};
use crate::calendar::resolver::{
    resolve_gregorian_date, resolve_hijri_date, resolve_weekday_name, FormattedDate,
};
use crate::locale::LocaleText;

/// Everything the card needs for one instant: the localized weekday plus
/// the Hijri and Gregorian display records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub weekday: String,
    pub hijri: FormattedDate,
    pub gregorian: FormattedDate,
}

impl DateRecord {
    pub fn resolve(
        oracle: &impl CalendarOracle,
        locale: &impl LocaleText,
        date: NaiveDate,
    ) -> Result<Self, OracleError> {
        Ok(Self {
            weekday: resolve_weekday_name(locale, date),
            hijri: resolve_hijri_date(oracle, date)?,
            gregorian: resolve_gregorian_date(locale, date),
        })
    }
}
