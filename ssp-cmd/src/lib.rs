//! Command implementations for the sail planner CLI.
//!
//! Provides subcommands for listing forecast regions and printing a
//! strategic briefing (table, barometer trend, rig and sea advisories).

use clap::Subcommand;

pub mod briefing;
pub mod regions;

#[derive(Subcommand)]
pub enum Command {
    /// List the available forecast regions
    Regions,

    /// Fetch the forecast for a region and print the strategic briefing
    Briefing {
        /// Region name from the catalog (see `regions`)
        #[arg(short, long)]
        region: String,

        /// Own course over ground in degrees
        #[arg(short, long, default_value_t = 0.0)]
        course: f64,

        /// Number of forecast hours to show (the dashboard offers 8/24/48/72)
        #[arg(long, default_value_t = 24)]
        hours: usize,

        /// Start hour, e.g. 2026-08-23T14:00 (defaults to the current hour)
        #[arg(long)]
        at: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Regions => regions::run_regions(),
        Command::Briefing {
            region,
            course,
            hours,
            at,
        } => briefing::run_briefing(&region, course, hours, at).await,
    }
}
