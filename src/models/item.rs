use super::item_type::ItemType;
use chrono::NaiveDate;
use serde::Serialize;

/// One normalized, renderable timeline entry.
///
/// Interval rows (Flight/Hotel/Cruise/Train) produce two of these, a start
/// item carrying the computed duration and an end item without it; every
/// other row produces exactly one, with no phase. Items are never mutated
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: ItemType,

    /// "Check-in", "Take off", ... — absent for single-point items.
    pub phase: Option<String>,

    /// Absolute instant in epoch milliseconds. `None` means the row's
    /// date/time did not parse; such items sort after all valid ones.
    pub timestamp: Option<i64>,

    /// Local calendar day used for grouping. Derived from the sheet's local
    /// date string, never from the UTC-shifted instant.
    pub day: Option<NaiveDate>,

    pub title: String,

    /// Labeled detail lines joined with '\n'; empty when suppressed.
    pub details: String,

    pub address: String,
    pub booking_ref: String,

    /// Only present on the start item of interval types.
    pub duration: Option<String>,

    // Raw sheet strings kept for display: the timeline must show the local
    // sheet time with its offset annotation, not the absolute instant.
    pub start_date: String,
    pub start_time: String,
    pub start_utc: String,
}

impl Item {
    /// Synthetic "no plans" entry for a gap day inside the trip span.
    pub fn placeholder(day: NaiveDate) -> Self {
        let midnight = day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis());
        Self {
            kind: ItemType::None,
            phase: None,
            timestamp: midnight,
            day: Some(day),
            title: "No plans…yet".to_string(),
            details: String::new(),
            address: String::new(),
            booking_ref: String::new(),
            duration: None,
            start_date: String::new(),
            start_time: String::new(),
            start_utc: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == ItemType::None
    }
}
