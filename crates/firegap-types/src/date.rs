//! ISO calendar dates (`YYYY-MM-DD`) for rule validity windows.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), ISO_DATE)
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    // The format description only contains date components.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// `#[serde(with = "firegap_types::date::iso_date_option")]` for optional dates.
pub mod iso_date_option {
    use super::{format_iso_date, parse_iso_date};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&format_iso_date(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_iso_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
