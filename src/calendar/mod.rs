pub mod digits;
pub mod months;
pub mod oracle;
pub mod resolver;

pub use digits::localize_digits;
pub use months::{resolve_month_label, HijriMonth, MonthResolution};
pub use oracle::{CalendarOracle, HijriFields, OracleError, UmmAlQura};
pub use resolver::{
    resolve_gregorian_date, resolve_hijri_date, resolve_weekday_name, FormattedDate,
};
