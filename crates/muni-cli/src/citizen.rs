//! # Citizen Subcommand
//!
//! Verification queue: list registrations, approve, reject with reason.

use clap::{Args, Subcommand};

use muni_admin::AdminConsole;
use muni_core::CitizenId;
use muni_state::CitizenStatus;

use crate::print_json;

/// Arguments for the citizen subcommand.
#[derive(Args, Debug)]
pub struct CitizenArgs {
    #[command(subcommand)]
    pub action: CitizenAction,
}

#[derive(Subcommand, Debug)]
pub enum CitizenAction {
    /// List registrations with their review status.
    List,
    /// Approve a pending registration.
    Approve {
        /// Registration identifier.
        id: CitizenId,
    },
    /// Reject a pending registration.
    Reject {
        /// Registration identifier.
        id: CitizenId,
        /// Rejection reason (required, non-empty).
        #[arg(long)]
        reason: String,
    },
}

pub fn run(args: CitizenArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        CitizenAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.citizens());
            }
            for citizen in store.citizens() {
                let provider = citizen
                    .service_provider
                    .as_ref()
                    .map(|p| format!(" [{}]", p.service_type))
                    .unwrap_or_default();
                println!("{}  {:<9} {}{provider}", citizen.id, citizen.status.to_string(), citizen.name);
            }
        }
        CitizenAction::Approve { id } => {
            console.update_citizen_status(id, CitizenStatus::Approved, None)?;
            println!("approved {id}");
        }
        CitizenAction::Reject { id, reason } => {
            console.update_citizen_status(id, CitizenStatus::Rejected, Some(&reason))?;
            println!("rejected {id}: {reason}");
        }
    }
    Ok(())
}
