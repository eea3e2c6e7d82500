//! # SOS Subcommand
//!
//! Alert triage: list, acknowledge, resolve, escalate.

use clap::{Args, Subcommand};

use muni_admin::AdminConsole;
use muni_core::SosAlertId;
use muni_state::SosStatus;

use crate::print_json;

/// Arguments for the sos subcommand.
#[derive(Args, Debug)]
pub struct SosArgs {
    #[command(subcommand)]
    pub action: SosAction,
}

#[derive(Subcommand, Debug)]
pub enum SosAction {
    /// List alerts with their triage status.
    List,
    /// Acknowledge an active alert.
    Ack {
        /// Alert identifier.
        id: SosAlertId,
    },
    /// Resolve an alert.
    Resolve {
        /// Alert identifier.
        id: SosAlertId,
    },
    /// Escalate an alert to district emergency services.
    Escalate {
        /// Alert identifier.
        id: SosAlertId,
    },
}

pub fn run(args: SosArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    let (id, status) = match args.action {
        SosAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.sos_alerts());
            }
            for alert in store.sos_alerts() {
                let kind = alert.kind.as_deref().unwrap_or("Emergency");
                println!(
                    "{}  {:<12} {} - {kind} ({})",
                    alert.id,
                    alert.status.to_string(),
                    alert.citizen_name,
                    alert.location
                );
            }
            return Ok(());
        }
        SosAction::Ack { id } => (id, SosStatus::Acknowledged),
        SosAction::Resolve { id } => (id, SosStatus::Resolved),
        SosAction::Escalate { id } => (id, SosStatus::Escalated),
    };
    console.update_sos_status(id, status)?;
    println!("{id} -> {status}");
    Ok(())
}
