use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// Writes a default configuration file (demo sheet plus trip registry) that
/// the user then points at their own published spreadsheet.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::default();
    let path = cfg.save(cli.config.as_deref())?;

    println!("⚙️  Initializing tripline…");
    messages::success(format!("Config file: {}", path.display()));
    println!(
        "   Edit it to set your sheet_id and trips: tripline config --edit"
    );

    Ok(())
}
