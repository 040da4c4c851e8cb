use crate::error::{DeparturesError, DeparturesResult};
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::{Offset, TimeZone};
use jiff::{ToSpan, Zoned};

/// Every constructed departure falls in this year.
pub const DEPARTURE_YEAR: i16 = 1980;

const ABBREVIATIONS: [(&str, i8); 16] = [
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
    ("AKST", -9),
    ("AKDT", -8),
    ("HST", -10),
    ("BST", 1),
    ("CET", 1),
    ("CEST", 2),
];

pub fn resolve_time_zone(abbreviation: &str) -> DeparturesResult<TimeZone> {
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(abbreviation))
        .map(|(_, hours)| TimeZone::fixed(Offset::constant(*hours)))
        .ok_or_else(|| DeparturesError::UnknownTimeZone(abbreviation.to_string()))
}

fn try_build_departure_time(
    month: i8,
    day: i8,
    time_zone: &str,
    hour: i8,
    minute: i8,
) -> DeparturesResult<Zoned> {
    let tz = resolve_time_zone(time_zone)?;
    if !(1..=31).contains(&day) {
        return Err(DeparturesError::DayOutOfRange(day));
    }
    // days past the end of the month roll into the next one
    let date = Date::new(DEPARTURE_YEAR, month, 1)?.checked_add(i64::from(day - 1).days())?;
    let civil = DateTime::from_parts(date, Time::new(hour, minute, 0, 0)?);
    Ok(civil.to_zoned(tz)?)
}

/// Builds a departure in [`DEPARTURE_YEAR`] from its calendar parts.
///
/// A day beyond the month's length carries over into the following month.
/// An unknown abbreviation or a component outside its range yields the
/// current time instead of an error.
pub fn build_departure_time(month: i8, day: i8, time_zone: &str, hour: i8, minute: i8) -> Zoned {
    try_build_departure_time(month, day, time_zone, hour, minute).unwrap_or_else(|_| Zoned::now())
}

/// Time of day without date or seconds, e.g. `10:45 PM`.
pub fn short_time(time: &Zoned) -> String {
    time.strftime("%-I:%M %p").to_string()
}
