use crate::export::ExportFormat;
use crate::logging::Verbosity;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for ecotracker
#[derive(Parser)]
#[command(
    name = "ecotracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track transport, electricity, water and waste to estimate your carbon footprint",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or separate logs)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v, -vv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(global = true, short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Log a new activity
    Add {
        #[command(subcommand)]
        activity: AddActivity,
    },

    /// Show the activity log
    List,

    /// Delete an activity by its position in the log
    Del {
        /// 1-based position as shown by `list`
        index: usize,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Delete every logged activity
    Clear {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show total footprint, water usage and activity counts
    Summary,

    /// Show per-type statistics
    Stats,

    /// Show sustainability suggestions
    Suggest,

    /// Compare your totals with global daily averages
    Compare,

    /// Export the activity log
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Replace the activity log with the content of a JSON document
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum AddActivity {
    /// Transport: car, bus, train, bike or walk
    Transport {
        mode: String,

        /// Distance in km
        #[arg(allow_negative_numbers = true)]
        distance: f64,
    },

    /// Electricity consumption
    Electricity {
        /// Consumption in kWh
        #[arg(allow_negative_numbers = true)]
        kwh: f64,
    },

    /// Water usage (shower 5 min = 45-50 L, dishwasher = 15-25 L)
    Water {
        /// Amount in litres
        #[arg(allow_negative_numbers = true)]
        litres: f64,
    },

    /// Waste generation
    Waste {
        /// Amount in kg
        #[arg(allow_negative_numbers = true)]
        kg: f64,
    },
}
