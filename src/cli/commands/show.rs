use crate::config::Config;
use crate::core::transform::transform;
use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use crate::sheet;
use crate::ui::timeline;

/// Handle the `show` command: fetch one trip's rows, transform them and
/// render the timeline (or dump the sorted items as JSON).
pub async fn handle(cfg: &Config, trip_query: Option<&str>, json: bool) -> AppResult<()> {
    let trip = resolve_trip(cfg, trip_query)?;

    let client = reqwest::Client::new();
    let rows = sheet::fetch_rows(&client, cfg, &trip.tab).await?;
    let items = transform(&rows);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        timeline::render(&items, &trip.name);
    }

    Ok(())
}

fn resolve_trip<'a>(cfg: &'a Config, query: Option<&str>) -> AppResult<&'a Trip> {
    match query {
        Some(q) => cfg
            .trips
            .iter()
            .find(|t| t.matches(q))
            .ok_or_else(|| AppError::UnknownTrip(q.to_string())),
        None => cfg.trips.first().ok_or(AppError::NoTrips),
    }
}
