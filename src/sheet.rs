//! Sheet row retrieval: one GET per trip tab against an opensheet-style
//! endpoint that publishes each tab as a JSON array of header-keyed objects.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::row::Row;
use reqwest::{Client, Url};

fn tab_url(cfg: &Config, tab: &str) -> AppResult<Url> {
    let mut url = Url::parse(&cfg.base_url)
        .map_err(|e| AppError::Config(format!("invalid base_url '{}': {}", cfg.base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("base_url '{}' cannot be a base", cfg.base_url)))?
        .extend([cfg.sheet_id.as_str(), tab]);
    Ok(url)
}

/// Fetch all rows of one trip tab. A non-success status is a fetch failure
/// for the whole trip load; the caller decides whether that aborts (single
/// trip view) or degrades (calendar indexing).
pub async fn fetch_rows(client: &Client, cfg: &Config, tab: &str) -> AppResult<Vec<Row>> {
    let url = tab_url(cfg, tab)?;
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(AppError::Fetch {
            tab: tab.to_string(),
            status: res.status().as_u16(),
        });
    }

    Ok(res.json::<Vec<Row>>().await?)
}
