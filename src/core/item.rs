//! Item builder: maps one sheet row (plus phase/duration context) into one
//! display item.

use crate::core::time;
use crate::models::item::Item;
use crate::models::item_type::{DetailLabels, ItemType};
use crate::models::row::Row;
use regex::Regex;

/// Build one display item from a row.
///
/// `date_val`/`time_val`/`utc_val` are the raw sheet strings of whichever
/// endpoint this item represents (start or end); they drive the day key and
/// are preserved verbatim for display-time formatting. `kind` is normally the
/// row's own type but interval rows pass it explicitly for both phases.
#[allow(clippy::too_many_arguments)]
pub fn build_item(
    row: &Row,
    timestamp: Option<i64>,
    phase: Option<&str>,
    duration: Option<&str>,
    date_val: &str,
    time_val: &str,
    utc_val: &str,
    kind: &ItemType,
) -> Item {
    let title = rewrite_title(&row.title, kind);
    let day = time::day_key(date_val);
    let details = format_details(row, phase, duration, kind);

    Item {
        kind: kind.clone(),
        phase: phase.map(|p| p.to_string()),
        timestamp,
        day,
        title,
        details,
        address: row.address.clone(),
        booking_ref: row.booking_ref.clone(),
        duration: duration.map(|d| d.to_string()),
        start_date: date_val.to_string(),
        start_time: time_val.to_string(),
        start_utc: utc_val.to_string(),
    }
}

/// Transit types read better as "{Verb} to {destination}". Titles written as
/// "A > B" keep only the destination; otherwise the type's own name token is
/// stripped before prefixing the verb.
fn rewrite_title(title: &str, kind: &ItemType) -> String {
    let Some(verb) = kind.transit_verb() else {
        return title.to_string();
    };

    if let Some((_, dest)) = title.split_once('>') {
        let dest = dest.trim();
        if !dest.is_empty() {
            return format!("{} to {}", verb, dest);
        }
    }

    let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(verb))).unwrap();
    let stripped = re.replace_all(title, "");
    format!("{} to {}", verb, stripped.trim())
}

/// Details policy: the free-text DETAILS block describes the whole booking,
/// so interval rows carry it only on the start-phase item; the end item's
/// details are suppressed entirely. Single-point items always include it.
fn include_details(phase: Option<&str>, kind: &ItemType) -> bool {
    match (kind.phases(), phase) {
        (Some((_, end_phase)), Some(p)) => p != end_phase,
        _ => true,
    }
}

fn format_details(
    row: &Row,
    phase: Option<&str>,
    duration: Option<&str>,
    kind: &ItemType,
) -> String {
    if row.details.is_empty() || !include_details(phase, kind) {
        return String::new();
    }

    let mut lines: Vec<String> = row
        .details
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect();

    match kind.detail_labels() {
        DetailLabels::Uniform(label) => {
            for line in lines.iter_mut() {
                *line = format!("{}: {}", label, line);
            }
        }
        DetailLabels::Positional(labels) => {
            for (line, label) in lines.iter_mut().zip(labels.iter()) {
                *line = format!("{}: {}", label, line);
            }
        }
        DetailLabels::Verbatim => {}
    }

    // Hotel check-ins and cruise embarkations lead with the stay length.
    if kind.leads_with_duration() {
        if let (Some(d), Some((start_phase, _))) = (duration, kind.phases()) {
            if phase == Some(start_phase) {
                lines.insert(0, d.to_string());
            }
        }
    }

    lines.join("\n")
}
