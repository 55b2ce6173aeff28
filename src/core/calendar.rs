//! Global calendar index: every configured trip, bucketed by local calendar
//! day, for the cross-trip month view.

use crate::config::Config;
use crate::models::item::Item;
use crate::models::item_type::ItemType;
use crate::sheet;
use crate::ui::messages;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// What one calendar day holds: the trips touching it and the distinct item
/// types occurring on it, both deduplicated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayEntry {
    pub trips: BTreeSet<String>,
    pub kinds: BTreeSet<ItemType>,
}

#[derive(Debug, Default, Serialize)]
pub struct CalendarIndex {
    pub days: BTreeMap<NaiveDate, DayEntry>,
}

impl CalendarIndex {
    /// Fold one trip's transformed items into the index. Placeholder items
    /// and items without a valid day key are skipped; the aggregation is
    /// commutative, so trip order does not affect the final contents.
    pub fn insert_trip(&mut self, trip_name: &str, items: &[Item]) {
        for item in items {
            if item.is_placeholder() {
                continue;
            }
            let Some(day) = item.day else { continue };

            let entry = self.days.entry(day).or_default();
            entry.trips.insert(trip_name.to_string());
            entry.kinds.insert(item.kind.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Navigation bounds across all indexed trips.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }
}

/// Fetch and transform every configured trip, sequentially, and build the
/// day index. One request at a time keeps the sheet endpoint happy; a trip
/// whose fetch fails is logged and skipped so the rest still index.
pub async fn build_index(client: &reqwest::Client, cfg: &Config) -> CalendarIndex {
    let mut index = CalendarIndex::default();

    for trip in &cfg.trips {
        match sheet::fetch_rows(client, cfg, &trip.tab).await {
            Ok(rows) => {
                let items = super::transform::transform(&rows);
                index.insert_trip(&trip.name, &items);
            }
            Err(e) => {
                messages::warning(format!("Skipping trip '{}': {}", trip.name, e));
            }
        }
    }

    index
}
