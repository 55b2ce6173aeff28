use tripline::core::duration::duration_label;
use tripline::core::time::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
use tripline::models::item_type::ItemType;

#[test]
fn hotel_nights_never_below_one() {
    // Same-day stay: 15:00 to 19:00.
    let label = duration_label(&ItemType::Hotel, 0, 4 * MS_PER_HOUR);
    assert_eq!(label, "1 night");

    // Degenerate zero-length interval.
    assert_eq!(duration_label(&ItemType::Hotel, 0, 0), "1 night");
}

#[test]
fn hotel_nights_round_up_and_pluralize() {
    // 2 days 20 hours rounds up to 3 nights.
    let delta = 2 * MS_PER_DAY + 20 * MS_PER_HOUR;
    assert_eq!(duration_label(&ItemType::Hotel, 0, delta), "3 nights");

    // Exactly one day is singular.
    assert_eq!(duration_label(&ItemType::Hotel, 0, MS_PER_DAY), "1 night");
}

#[test]
fn cruise_days_round_up_and_pluralize() {
    assert_eq!(
        duration_label(&ItemType::Cruise, 0, 7 * MS_PER_DAY),
        "7 days"
    );
    assert_eq!(duration_label(&ItemType::Cruise, 0, MS_PER_DAY), "1 day");
    // A half-day crossing still counts as a day afloat.
    assert_eq!(
        duration_label(&ItemType::Cruise, 0, 12 * MS_PER_HOUR),
        "1 day"
    );
}

#[test]
fn flights_and_trains_show_hours_and_minutes() {
    assert_eq!(
        duration_label(&ItemType::Flight, 0, 8 * MS_PER_HOUR + 5 * MS_PER_MINUTE),
        "8h 5m"
    );
    // Zero remainder minutes are still shown.
    assert_eq!(
        duration_label(&ItemType::Train, 0, 2 * MS_PER_HOUR),
        "2h 0m"
    );
    // Sub-minute remainders round to the nearest minute.
    assert_eq!(
        duration_label(&ItemType::Flight, 0, 45 * MS_PER_MINUTE + 31_000),
        "0h 46m"
    );
}
