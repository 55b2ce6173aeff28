//! Terminal rendering of one trip's timeline, grouped by day.

use crate::core::time;
use crate::models::item::Item;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_right};
use chrono::NaiveDate;

const DETAIL_WRAP_WIDTH: usize = 70;
const DETAIL_INDENT: &str = "        ";

pub fn render(items: &[Item], trip_name: &str) {
    println!("{}\n", bold(&format!("═══ {} ═══", trip_name)));

    if items.is_empty() {
        println!("{GREY}No bookings on this trip yet.{RESET}");
        return;
    }

    for (day, day_items) in group_by_day(items) {
        let heading = match day {
            Some(d) => date::pretty_date(d),
            None => "Unscheduled".to_string(),
        };
        println!("{}", bold(&heading));

        for item in day_items {
            print_item(item);
        }
        println!();
    }
}

/// Group while preserving the sorted item order; the day key of the first
/// item opens its group. Items without a day key collect at the end.
fn group_by_day(items: &[Item]) -> Vec<(Option<NaiveDate>, Vec<&Item>)> {
    let mut groups: Vec<(Option<NaiveDate>, Vec<&Item>)> = Vec::new();
    let mut dayless: Vec<&Item> = Vec::new();

    for item in items {
        match item.day {
            None => dayless.push(item),
            Some(d) => match groups.iter_mut().find(|(day, _)| *day == Some(d)) {
                Some((_, bucket)) => bucket.push(item),
                None => groups.push((Some(d), vec![item])),
            },
        }
    }

    if !dayless.is_empty() {
        groups.push((None, dayless));
    }

    groups
}

fn print_item(item: &Item) {
    if item.is_placeholder() {
        println!("  {GREY}{}{RESET}", item.title);
        return;
    }

    let icon = item.kind.color().paint(pad_right(item.kind.icon(), 3));

    let mut headline = String::new();
    if !item.start_time.is_empty() {
        headline.push_str(&format!(
            "{GREY}{}{RESET}  ",
            time::format_sheet_time(&item.start_time, &item.start_utc)
        ));
    }
    headline.push_str(&bold(&item.title));

    println!("  {}{}", icon, headline);

    if let Some(phase) = &item.phase {
        // Hotel and cruise durations already lead the details block;
        // flight and train legs show theirs next to the phase.
        match &item.duration {
            Some(d) if !item.kind.leads_with_duration() => {
                println!("     {} · {}", phase, d);
            }
            _ => println!("     {}", phase),
        }
    }

    for line in item.details.split('\n').filter(|l| !l.is_empty()) {
        let wrapped = textwrap::fill(
            line,
            textwrap::Options::new(DETAIL_WRAP_WIDTH)
                .initial_indent("     ")
                .subsequent_indent(DETAIL_INDENT),
        );
        println!("{}", wrapped);
    }

    if !item.booking_ref.is_empty() {
        println!("     {GREY}Ref: {}{RESET}", item.booking_ref);
    }
    if !item.address.is_empty() {
        println!("     {GREY}⌖ {}{RESET}", item.address);
    }
}
