//! Row transformer: one trip's sheet rows → a time-sorted, gap-filled
//! sequence of display items.

use super::duration::duration_label;
use super::item::build_item;
use super::time;
use crate::models::item::Item;
use crate::models::item_type::ItemType;
use crate::models::row::Row;
use std::collections::BTreeSet;

/// Pure function of its input: no I/O, no ambient state. Returns items
/// sorted ascending by instant (stable on ties); items whose date/time did
/// not parse sort last in emission order and are excluded from the gap scan.
pub fn transform(rows: &[Row]) -> Vec<Item> {
    let mut items = Vec::new();

    for row in rows {
        let kind = ItemType::from_sheet(&row.kind);
        let start = time::to_instant(&row.start_date, &row.start_time, &row.start_utc);
        let end = time::to_instant(&row.end_date, &row.end_time, &row.end_utc);

        if let Some((start_phase, end_phase)) = kind.phases() {
            let duration = match (start, end) {
                (Some(s), Some(e)) => Some(duration_label(&kind, s, e)),
                _ => None,
            };

            items.push(build_item(
                row,
                start,
                Some(start_phase),
                duration.as_deref(),
                &row.start_date,
                &row.start_time,
                &row.start_utc,
                &kind,
            ));
            items.push(build_item(
                row,
                end,
                Some(end_phase),
                None,
                &row.end_date,
                &row.end_time,
                &row.end_utc,
                &kind,
            ));
        } else {
            items.push(build_item(
                row,
                start,
                None,
                None,
                &row.start_date,
                &row.start_time,
                &row.start_utc,
                &kind,
            ));
        }
    }

    fill_gap_days(&mut items);

    // Stable: ties keep row/phase emission order, invalid instants go last.
    items.sort_by_key(|i| match i.timestamp {
        Some(ts) => (0, ts),
        None => (1, 0),
    });

    items
}

/// Synthesize exactly one "No plans…yet" placeholder for every calendar day
/// inside the trip span that no real item touches. The span is computed in
/// local-day space over the day keys of valid items.
fn fill_gap_days(items: &mut Vec<Item>) {
    let covered: BTreeSet<_> = items.iter().filter_map(|i| i.day).collect();

    let (Some(&first), Some(&last)) = (covered.first(), covered.last()) else {
        return;
    };

    let mut day = first;
    while day <= last {
        if !covered.contains(&day) {
            items.push(Item::placeholder(day));
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
}
