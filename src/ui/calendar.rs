//! Terminal rendering of the cross-trip month calendar.

use crate::core::calendar::CalendarIndex;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::Datelike;

pub fn render(index: &CalendarIndex, year: i32, month: u32) {
    println!("{}\n", bold(&format!("     {}", date::month_title(year, month))));
    println!(" Mo  Tu  We  Th  Fr  Sa  Su");

    let days = date::all_days_of_month(year, month);
    let Some(first) = days.first() else {
        return;
    };

    let mut line = "    ".repeat(first.weekday().num_days_from_monday() as usize);

    for d in &days {
        let cell = match index.days.get(d) {
            Some(entry) => {
                let colour = entry
                    .kinds
                    .iter()
                    .next()
                    .map(|k| k.color())
                    .unwrap_or(ansi_term::Colour::White);
                format!(" {}", colour.bold().paint(format!("{:>2}•", d.day())))
            }
            None => format!(" {:>2} ", d.day()),
        };
        line.push_str(&cell);

        if d.weekday().num_days_from_monday() == 6 {
            println!("{}", line);
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line);
    }
    println!();

    // Per-day legend: which trips and which kinds of plans touch each
    // marked day of this month.
    let mut any = false;
    for (day, entry) in &index.days {
        if day.year() != year || day.month() != month {
            continue;
        }
        any = true;

        let trips = entry.trips.iter().cloned().collect::<Vec<_>>().join(", ");
        let kinds = entry
            .kinds
            .iter()
            .map(|k| k.color().paint(k.label()).to_string())
            .collect::<Vec<_>>()
            .join(", ");

        println!(" {:>2}  {} {GREY}·{RESET} {}", day.day(), bold(&trips), kinds);
    }

    if !any {
        println!("{GREY}Nothing planned this month.{RESET}");
    }
}
