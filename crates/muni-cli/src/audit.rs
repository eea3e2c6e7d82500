//! # Audit Subcommand
//!
//! Prints the session audit log, oldest first (newest last).

use clap::Args;

use muni_admin::AdminConsole;

use crate::print_json;

/// Arguments for the audit subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Show only the most recent N entries.
    #[arg(long)]
    pub tail: Option<usize>,
}

pub fn run(args: AuditArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    let entries = console.audit_log()?;
    let entries = match args.tail {
        Some(n) => &entries[entries.len().saturating_sub(n)..],
        None => entries,
    };
    if json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("no actions recorded this session");
        return Ok(());
    }
    for entry in entries {
        println!(
            "#{:<3} {}  {:<8} {:<24} {}",
            entry.seq,
            entry.timestamp,
            entry.severity.to_string(),
            entry.action,
            entry.details
        );
    }
    Ok(())
}
