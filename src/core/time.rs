//! Time normalization: sheet date/time/offset triples → absolute instants
//! and local display-day keys.

use chrono::{NaiveDate, NaiveTime};

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_MINUTE: i64 = 60_000;

pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_sheet_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Offset column parsing: an empty cell means UTC, anything unparseable
/// invalidates the instant.
pub fn parse_offset(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0);
    }
    s.parse::<i64>().ok()
}

/// Absolute instant of a (date, time, UTC offset) triple, in epoch millis.
///
/// The literal wall-clock digits are read as if they were UTC, then shifted
/// by the offset (east-positive). `None` replaces the source's NaN for
/// malformed input; downstream sorting pushes such items last.
pub fn to_instant(date: &str, time: &str, utc_offset: &str) -> Option<i64> {
    let d = parse_sheet_date(date)?;
    let t = parse_sheet_time(time)?;
    let offset = parse_offset(utc_offset)?;
    let wall = d.and_time(t).and_utc().timestamp_millis();
    Some(wall - offset * MS_PER_HOUR)
}

/// Local grouping day of a row: the sheet's own calendar date, untouched by
/// the UTC offset. Two items on the same sheet day must share a bucket even
/// when their offsets differ.
pub fn day_key(date: &str) -> Option<NaiveDate> {
    parse_sheet_date(date)
}

/// Display form of a sheet-local time: the raw time string, with the offset
/// appended as "(+Nh)" / "(-Nh)" only when non-zero.
pub fn format_sheet_time(time: &str, utc_offset: &str) -> String {
    match parse_offset(utc_offset) {
        Some(n) if n != 0 => {
            let sign = if n >= 0 { "+" } else { "" };
            format!("{} ({}{}h)", time, sign, n)
        }
        _ => time.to_string(),
    }
}
