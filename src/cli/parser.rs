use clap::{Parser, Subcommand};

/// Command-line interface definition for tripline
/// CLI application to render travel itineraries from a published spreadsheet
#[derive(Parser)]
#[command(
    name = "tripline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render spreadsheet-sourced trip itineraries as a timeline and a cross-trip calendar",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or a shared config)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the configured trips
    Trips,

    /// Fetch one trip and render its timeline
    Show {
        /// Trip display name or sheet tab (defaults to the first configured trip)
        trip: Option<String>,

        #[arg(long, help = "Emit the sorted display items as JSON instead of rendering")]
        json: bool,
    },

    /// Build the cross-trip index and render a month calendar
    Calendar {
        #[arg(
            long,
            value_name = "YYYY-MM",
            help = "Month to render (defaults to the earliest month with plans)"
        )]
        month: Option<String>,

        #[arg(long, help = "Emit the day index as JSON instead of rendering")]
        json: bool,
    },
}
