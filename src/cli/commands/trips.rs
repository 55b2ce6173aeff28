use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::formatting::{bold, pad_right};

/// Handle the `trips` command: list the configured trip registry in order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.trips.is_empty() {
        println!("No trips configured. Run 'tripline init' and edit the config file.");
        return Ok(());
    }

    let name_w = cfg
        .trips
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{}  {}", bold(&pad_right("Name", name_w)), bold("Sheet tab"));
    for trip in &cfg.trips {
        println!("{}  {}", pad_right(&trip.name, name_w), trip.tab);
    }

    Ok(())
}
