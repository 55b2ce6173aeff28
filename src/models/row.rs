use serde::{Deserialize, Serialize};

/// One spreadsheet row, exactly as published by the sheet endpoint.
///
/// The endpoint returns an array of objects keyed by the sheet's header row,
/// hence the uppercase field names. Every field is optional on the wire and
/// defaults to an empty string; absence must never crash the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "TYPE", default)]
    pub kind: String,

    #[serde(rename = "TITLE", default)]
    pub title: String,

    #[serde(rename = "DETAILS", default)]
    pub details: String,

    #[serde(rename = "ADDRESS", default)]
    pub address: String,

    #[serde(rename = "BOOKING REF", default)]
    pub booking_ref: String,

    #[serde(rename = "START DATE", default)]
    pub start_date: String,

    #[serde(rename = "START TIME", default)]
    pub start_time: String,

    #[serde(rename = "START UTC", default)]
    pub start_utc: String,

    #[serde(rename = "END DATE", default)]
    pub end_date: String,

    #[serde(rename = "END TIME", default)]
    pub end_time: String,

    #[serde(rename = "END UTC", default)]
    pub end_utc: String,
}
