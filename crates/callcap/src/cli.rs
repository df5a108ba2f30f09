use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "callcap")]
#[command(version)]
#[command(about = "Data-capture KPIs for call-center transcripts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute dashboard metrics for a batch of calls
    Metrics {
        /// Calls as a JSON array, JSONL, or a directory of JSON files
        #[arg(short, long)]
        file: PathBuf,

        /// UTC day for the demo fallback seed (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Engine config JSON (partial documents allowed)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Always return computed metrics for non-empty batches
        #[arg(long)]
        no_demo: bool,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show per-call extraction results and the raw aggregate
    Inspect {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the demo metrics for a day
    Fallback {
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Convert a raw telephony log into a call record
    Parse {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
