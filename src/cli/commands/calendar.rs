use crate::config::Config;
use crate::core::calendar::build_index;
use crate::errors::{AppError, AppResult};
use crate::ui;
use crate::utils::date;
use chrono::Datelike;

/// Handle the `calendar` command: index every configured trip and render one
/// month of the cross-trip calendar.
pub async fn handle(cfg: &Config, month: Option<&str>, json: bool) -> AppResult<()> {
    // Validate the month argument before spending time on fetches.
    let requested = match month {
        Some(m) => {
            Some(date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?)
        }
        None => None,
    };

    let client = reqwest::Client::new();
    let index = build_index(&client, cfg).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    let (year, month) = requested.unwrap_or_else(|| {
        // Default to the earliest month with plans, today's month when
        // nothing indexed at all.
        let d = index.first_day().unwrap_or_else(date::today);
        (d.year(), d.month())
    });

    ui::calendar::render(&index, year, month);
    Ok(())
}
