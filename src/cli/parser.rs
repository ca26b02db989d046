use crate::core::calculator::grid::ThresholdMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHOSlogger
/// CLI application to inspect Hours-of-Service trip plans
#[derive(Parser)]
#[command(
    name = "rhoslogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "An HOS trip planning CLI: duty timelines, daily log grids and log sheet snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Plan a trip with the planning service, or import a saved response
    Plan {
        #[arg(long = "current", help = "Current location")]
        current: Option<String>,

        #[arg(long = "pickup", help = "Pickup location")]
        pickup: Option<String>,

        #[arg(long = "dropoff", help = "Dropoff location")]
        dropoff: Option<String>,

        #[arg(long = "cycle-used", help = "Hours already used in the 70-hour cycle")]
        cycle_used: Option<f64>,

        #[arg(
            long = "file",
            value_name = "FILE",
            conflicts_with_all = ["current", "pickup", "dropoff", "cycle_used"],
            help = "Import a planning response saved as JSON"
        )]
        file: Option<String>,
    },

    /// Show the trip summary of the current plan
    Summary,

    /// Show the duty status timeline, one day at a time
    Timeline {
        #[arg(long, help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show the 24-hour daily log grid
    Grid {
        #[arg(long, help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, value_enum, help = "How grid boundaries are derived (default from config)")]
        mode: Option<ThresholdMode>,
    },

    /// List the stops bound to each day
    Stops {
        #[arg(long, help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Export log sheet snapshots or day views
    Export {
        #[arg(long, value_enum, default_value = "png")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Snapshot directory (png only, default from config)")]
        dir: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output file (json/csv, absolute path)")]
        file: Option<String>,

        #[arg(long, help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, value_enum, help = "How grid boundaries are derived (default from config)")]
        mode: Option<ThresholdMode>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table or the exported snapshots
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "exports", help = "List exported log snapshots")]
        exports: bool,
    },
}
