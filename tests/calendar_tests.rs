mod common;
use common::{interval_row, point_row};

use chrono::NaiveDate;
use tripline::core::calendar::CalendarIndex;
use tripline::core::transform::transform;
use tripline::models::item_type::ItemType;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn trips_and_kinds_are_deduplicated_per_day() {
    // Two shows plus a hotel check-in, all on the same day of the same trip.
    let rows = vec![
        point_row("Show", "Matinee", ("2026-02-09", "14:00", "-5")),
        point_row("Show", "Evening show", ("2026-02-09", "19:30", "-5")),
        interval_row(
            "Hotel",
            "Midtown Hotel",
            "",
            ("2026-02-09", "15:00", "-5"),
            ("2026-02-10", "11:00", "-5"),
        ),
    ];

    let mut index = CalendarIndex::default();
    index.insert_trip("New York", &transform(&rows));

    let entry = index.days.get(&d("2026-02-09")).unwrap();
    assert_eq!(entry.trips.len(), 1);
    assert!(entry.trips.contains("New York"));
    assert_eq!(
        entry.kinds.iter().cloned().collect::<Vec<_>>(),
        vec![ItemType::Hotel, ItemType::Show]
    );
}

#[test]
fn placeholders_never_reach_the_index() {
    // Mar 2 and Mar 3 are gap days inside this trip's span.
    let rows = vec![interval_row(
        "Hotel",
        "Harbour Hotel",
        "",
        ("2026-03-01", "15:00", "0"),
        ("2026-03-04", "11:00", "0"),
    )];

    let mut index = CalendarIndex::default();
    index.insert_trip("Norway", &transform(&rows));

    assert!(index.days.contains_key(&d("2026-03-01")));
    assert!(index.days.contains_key(&d("2026-03-04")));
    assert!(!index.days.contains_key(&d("2026-03-02")));
    assert!(!index.days.contains_key(&d("2026-03-03")));
}

#[test]
fn days_shared_by_trips_union_both() {
    let trip_a = vec![point_row("Event", "Wedding", ("2026-05-03", "13:00", "2"))];
    let trip_b = vec![point_row("Food", "Dinner", ("2026-05-03", "20:00", "2"))];

    let mut index = CalendarIndex::default();
    index.insert_trip("Steffi's Wedding", &transform(&trip_a));
    index.insert_trip("Paris", &transform(&trip_b));

    let entry = index.days.get(&d("2026-05-03")).unwrap();
    assert_eq!(entry.trips.len(), 2);
    assert_eq!(entry.kinds.len(), 2);
}

#[test]
fn insertion_order_does_not_change_the_index() {
    let trip_a = vec![point_row("Event", "Wedding", ("2026-05-03", "13:00", "2"))];
    let trip_b = vec![point_row("Food", "Dinner", ("2026-05-03", "20:00", "2"))];

    let mut forward = CalendarIndex::default();
    forward.insert_trip("A", &transform(&trip_a));
    forward.insert_trip("B", &transform(&trip_b));

    let mut reverse = CalendarIndex::default();
    reverse.insert_trip("B", &transform(&trip_b));
    reverse.insert_trip("A", &transform(&trip_a));

    let fwd = forward.days.get(&d("2026-05-03")).unwrap();
    let rev = reverse.days.get(&d("2026-05-03")).unwrap();
    assert_eq!(fwd.trips, rev.trips);
    assert_eq!(fwd.kinds, rev.kinds);
}

#[test]
fn navigation_bounds_span_all_trips() {
    let february = vec![point_row("Event", "NYC", ("2026-02-08", "10:00", "-5"))];
    let august = vec![point_row("Event", "Paris", ("2026-08-20", "10:00", "2"))];

    let mut index = CalendarIndex::default();
    assert!(index.first_day().is_none());

    index.insert_trip("New York", &transform(&february));
    index.insert_trip("Paris", &transform(&august));

    assert_eq!(index.first_day(), Some(d("2026-02-08")));
    assert_eq!(index.last_day(), Some(d("2026-08-20")));
}

#[test]
fn dayless_items_are_skipped() {
    let rows = vec![point_row("Event", "Broken", ("??", "10:00", "0"))];

    let mut index = CalendarIndex::default();
    index.insert_trip("Mystery", &transform(&rows));

    assert!(index.is_empty());
}
