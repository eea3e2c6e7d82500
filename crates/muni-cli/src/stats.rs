//! # Stats Subcommand
//!
//! Prints the dashboard overview, recomputed from the current snapshot.

use clap::Args;

use muni_admin::AdminConsole;

use crate::print_json;

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {}

pub fn run(_args: StatsArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    let overview = console.stats()?;
    if json {
        return print_json(&overview);
    }
    println!("citizens:          {} total, {} pending, {} approved", overview.total_citizens, overview.pending_verifications, overview.approved_citizens);
    println!("approval rate:     {:.0}%", overview.approval_rate * 100.0);
    println!("sos alerts:        {} active", overview.active_sos);
    println!("help requests:     {} open, {} in progress", overview.open_help_requests, overview.in_progress_help_requests);
    println!("resolution rate:   {:.0}%", overview.resolution_rate * 100.0);
    println!("notices:           {} published", overview.published_notices);
    println!("volunteer events:  {}", overview.volunteer_events);
    println!("polls:             {} active", overview.active_polls);
    println!("safety alerts:     {} active", overview.active_safety_alerts);
    Ok(())
}
