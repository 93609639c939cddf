//! CLI command definitions

use crate::application::schedule::MAX_UPCOMING_COUNT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "payday")]
#[command(about = "Pay day countdown calendar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date to count from (e.g., today, tomorrow, +7, 15-07-2025, 2025-07-15)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Pay day of the month, overriding the stored setting
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=31)
    )]
    pub pay_day: Option<u32>,

    /// Weekend adjustment (next, previous), overriding the stored setting
    #[arg(short, long, global = true)]
    pub direction: Option<String>,

    /// Print the calendar without markup
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store pay day settings in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Pay day mode (first, last, specific); --day alone implies specific
        #[arg(short, long)]
        mode: Option<String>,

        /// Day of the month, used with --mode specific
        #[arg(long)]
        day: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List the next pay dates
    Upcoming {
        /// Number of pay dates to list (at most 1200)
        #[arg(
            short = 'n',
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(u32).range(0..=MAX_UPCOMING_COUNT)
        )]
        count: u32,

        /// Date to start from (default: today)
        #[arg(long)]
        from: Option<String>,
    },

    /// Show the pay period containing a date
    Period {
        /// Date inside the period (default: today)
        date: Option<String>,
    },
}
