//! Hijri and Gregorian date resolution for Urdu daily cards.
//!
//! Given a Gregorian instant, produces the Umm al-Qura Hijri date (with the
//! fixed one-day regional adjustment), the Gregorian date and the weekday as
//! Urdu display records. Calendar and locale facilities sit behind narrow
//! traits ([`CalendarOracle`], [`LocaleText`]) so the resolution logic stays
//! deterministic under test.

pub mod calendar;
pub mod locale;
pub mod models;
pub mod quote;

pub use calendar::{
    localize_digits, resolve_gregorian_date, resolve_hijri_date, resolve_month_label,
    resolve_weekday_name, CalendarOracle, FormattedDate, HijriFields, HijriMonth,
    MonthResolution, OracleError, UmmAlQura,
};
pub use locale::{LocaleText, UrduLocale};
pub use models::{DateRecord, Quotation};
pub use quote::{ReferenceHistory, HISTORY_CAP};
